use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons;
use crate::components::nav_mobile::NavMobile;
use crate::content::{whatsapp_quote_url, NAV_LINKS};
use crate::scroll;

#[function_component(Header)]
pub fn header() -> Html {
    let active = use_state_eq(|| NAV_LINKS[0].path);

    // scroll spy for the desktop links
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let closure = Closure::wrap(Box::new(move || {
                        let tops: Vec<(&'static str, f64)> = NAV_LINKS
                            .iter()
                            .filter_map(|link| scroll::section_top(link.path).map(|top| (link.path, top)))
                            .collect();
                        if let Some(id) = scroll::active_section(&tops) {
                            active.set(id);
                        }
                    }) as Box<dyn FnMut()>);
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

    let on_link = |path: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_section(path);
        })
    };

    html! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href="#home" class="site-logo" onclick={on_link("home")}>
                    <img src="/assets/logo1.png" width="230" height="48" alt="EsferaNr6" />
                </a>

                <nav class="desktop-nav" aria-label="Navegação principal">
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.path}>
                                <a
                                    href={format!("#{}", link.path)}
                                    class={classes!("desktop-nav-link", (*active == link.path).then(|| "active"))}
                                    onclick={on_link(link.path)}
                                >
                                    {link.name}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <a
                        href={whatsapp_quote_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="header-quote"
                    >
                        {"Peça um orçamento"}
                        <span class="header-quote-icon">{icons::arrow_up_right()}</span>
                    </a>
                </nav>

                <NavMobile />
            </div>
            <style>
                {r#"
                .site-header {
                    background: #0f1a2a;
                    padding: 1rem 0;
                    position: sticky;
                    top: 0;
                    z-index: 50;
                }
                .site-header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .site-logo img {
                    display: block;
                    max-width: 180px;
                    height: auto;
                }
                .desktop-nav {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }
                .desktop-nav ul {
                    display: flex;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .desktop-nav li:not(:last-child)::after {
                    content: "/";
                    margin: 0 1rem;
                    color: #ffc221;
                }
                .desktop-nav-link {
                    color: #fff;
                    text-decoration: none;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                    letter-spacing: 1.2px;
                    font-weight: 500;
                    transition: color 0.2s;
                }
                .desktop-nav-link:hover,
                .desktop-nav-link.active {
                    color: #ffc221;
                }
                .header-quote {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fff;
                    color: #0f1a2a;
                    font-weight: 700;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    padding: 0.5rem 1rem;
                    border-radius: 4px;
                    text-decoration: none;
                }
                .header-quote-icon {
                    width: 2.75rem;
                    height: 2.75rem;
                    background: #0f1a2a;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 4px;
                    font-size: 1.25rem;
                    transition: transform 0.2s;
                }
                .header-quote:hover .header-quote-icon {
                    transform: rotate(45deg);
                }
                @media (min-width: 1280px) {
                    .desktop-nav {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
