use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_counter;
use yew_hooks::use_interval;

use crate::content::STATS;

pub const COUNT_DELAY_MS: f64 = 500.0;
pub const COUNT_DURATION_MS: f64 = 3000.0;
const FRAME_MS: u32 = 40;

/// Counter value `elapsed_ms` into the count, easing out exponentially.
pub fn eased_value(end: u32, elapsed_ms: f64) -> u32 {
    if elapsed_ms <= 0.0 {
        return 0;
    }
    if elapsed_ms >= COUNT_DURATION_MS {
        return end;
    }
    let progress = (1.0 - 2f64.powf(-10.0 * elapsed_ms / COUNT_DURATION_MS)) * 1024.0 / 1023.0;
    (f64::from(end) * progress).round().min(f64::from(end)) as u32
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);
    let ticks = use_counter(0);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |_| {
                let check = move || {
                    let (Some(window), Some(element)) = (web_sys::window(), node.cast::<Element>()) else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    // a fifth of the band on screen is enough
                    if rect.top() < height - rect.height() * 0.2 && rect.bottom() > 0.0 {
                        in_view.set(true);
                    }
                };
                check();

                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let closure = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    let _ = window
                        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
                    closure
                });

                move || {
                    if let (Some(window), Some(closure)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let elapsed = f64::from(*ticks) * f64::from(FRAME_MS) - COUNT_DELAY_MS;
    let counting = *in_view && elapsed < COUNT_DURATION_MS;
    {
        let ticks = ticks.clone();
        use_interval(move || ticks.increase(), if counting { FRAME_MS } else { 0 });
    }

    html! {
        <div ref={node} class="stats">
            <div class="container stats-inner">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat" key={stat.text}>
                        <div class="stat-value">
                            <span>{eased_value(stat.end, elapsed).to_string()}</span>
                            if !stat.suffix.is_empty() {
                                <span class="stat-suffix">{stat.suffix}</span>
                            }
                        </div>
                        <p>{stat.text}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats {
                    margin-top: 4rem;
                    background: #0f1a2a;
                    padding: 2.5rem 0;
                    color: #fff;
                }
                .stats-inner {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 600;
                    display: flex;
                    align-items: flex-end;
                }
                .stat-suffix {
                    margin-left: 0.25rem;
                    color: #ffc221;
                    font-size: 1.875rem;
                }
                .stat p {
                    margin-top: 0.5rem;
                    font-size: 1.125rem;
                    text-align: center;
                }
                @media (min-width: 768px) {
                    .stats-inner {
                        flex-direction: row;
                    }
                }
                @media (min-width: 1280px) {
                    .stats {
                        margin-top: 8rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_end() {
        assert_eq!(eased_value(300208, -COUNT_DELAY_MS), 0);
        assert_eq!(eased_value(300208, 0.0), 0);
        assert_eq!(eased_value(300208, COUNT_DURATION_MS), 300208);
        assert_eq!(eased_value(33, COUNT_DURATION_MS + 500.0), 33);
    }

    #[test]
    fn never_overshoots_and_never_goes_back() {
        let mut last = 0;
        let mut t = 0.0;
        while t <= COUNT_DURATION_MS {
            let value = eased_value(100, t);
            assert!(value >= last && value <= 100, "{} at {}ms", value, t);
            last = value;
            t += f64::from(FRAME_MS);
        }
    }

    #[test]
    fn most_of_the_count_happens_early() {
        assert!(eased_value(100, COUNT_DURATION_MS / 2.0) > 90);
    }
}
