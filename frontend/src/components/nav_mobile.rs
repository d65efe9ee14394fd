use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::components::icons;
use crate::content::NAV_LINKS;
use crate::drawer::{
    DrawerEvent, DrawerMachine, Effect, FocusTarget, Key, Phase, Scheduler, Surroundings,
};
use crate::scroll;

const FOCUSABLE: &str = "a[href], button:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Document keydown listener, removed again when released or dropped.
struct KeyListener {
    closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl KeyListener {
    fn attach(handler: impl FnMut(KeyboardEvent) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            closure: Some(closure),
        })
    }

    /// Unhooks now but frees the closure on the next tick, since this can run
    /// from inside the listener itself (Escape).
    fn release(mut self) {
        self.unhook();
        if let Some(closure) = self.closure.take() {
            Timeout::new(0, move || drop(closure)).forget();
        }
    }

    fn unhook(&self) {
        let (Some(closure), Some(document)) = (
            self.closure.as_ref(),
            web_sys::window().and_then(|w| w.document()),
        ) else {
            return;
        };
        let _ = document
            .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.unhook();
    }
}

/// Pins the body so the page behind the drawer cannot scroll.
struct ScrollLock;

impl ScrollLock {
    fn acquire(offset: f64) -> Self {
        if let Some(style) = body_style() {
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("top", &format!("-{}px", offset));
            let _ = style.set_property("width", "100%");
        }
        ScrollLock
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(style) = body_style() {
            for property in ["position", "top", "width"] {
                let _ = style.remove_property(property);
            }
        }
    }
}

fn body_style() -> Option<CssStyleDeclaration> {
    Some(web_sys::window()?.document()?.body()?.style())
}

fn active_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Settles transitions with real timers.
struct SettleTimer(Drawer);

impl Scheduler for SettleTimer {
    fn schedule(&mut self, delay_ms: u32, generation: u64) {
        let drawer = self.0.clone();
        Timeout::new(delay_ms, move || {
            drawer.dispatch(DrawerEvent::Settle { generation });
        })
        .forget();
    }
}

#[derive(Clone)]
struct Drawer {
    machine: Rc<RefCell<DrawerMachine>>,
    phase: UseStateHandle<Phase>,
    panel: NodeRef,
    toggle: NodeRef,
    previous_focus: Rc<RefCell<Option<HtmlElement>>>,
    key_listener: Rc<RefCell<Option<KeyListener>>>,
    scroll_lock: Rc<RefCell<Option<ScrollLock>>>,
}

impl Drawer {
    /// Runs `event` through the machine and carries out the effects.
    /// Returns true when the triggering DOM event must not do its default.
    fn dispatch(&self, event: DrawerEvent) -> bool {
        let now = self.surroundings();
        let mut timer = SettleTimer(self.clone());
        let effects = self.machine.borrow_mut().handle(event, &now, &mut timer);

        let mut prevent_default = false;
        for effect in effects {
            match effect {
                Effect::RememberFocus => {
                    *self.previous_focus.borrow_mut() = active_element();
                }
                Effect::LockScroll { offset } => {
                    *self.scroll_lock.borrow_mut() = Some(ScrollLock::acquire(offset));
                }
                Effect::UnlockScroll { offset } => {
                    self.scroll_lock.borrow_mut().take();
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, offset);
                    }
                }
                Effect::AttachKeyListener => {
                    let drawer = self.clone();
                    let listener = KeyListener::attach(move |e: KeyboardEvent| {
                        let key = Key::from_name(&e.key());
                        if drawer.dispatch(DrawerEvent::KeyDown {
                            key,
                            shift: e.shift_key(),
                        }) {
                            e.prevent_default();
                        }
                    });
                    if listener.is_none() {
                        log::warn!("Could not attach drawer keyboard listener");
                    }
                    *self.key_listener.borrow_mut() = listener;
                }
                Effect::DetachKeyListener => {
                    let listener = self.key_listener.borrow_mut().take();
                    if let Some(listener) = listener {
                        listener.release();
                    }
                }
                Effect::FocusPanelItem(index) => {
                    if let Some(item) = self.focusable().get(index) {
                        let _ = item.focus();
                    }
                }
                Effect::RestoreFocus(target) => {
                    let previous = self
                        .previous_focus
                        .borrow_mut()
                        .take()
                        .filter(|el| target == FocusTarget::Previous && el.is_connected());
                    if let Some(el) = previous.or_else(|| self.toggle.cast::<HtmlElement>()) {
                        let _ = el.focus();
                    }
                }
                Effect::PreventDefault => prevent_default = true,
            }
        }

        self.phase.set(self.machine.borrow().phase());
        prevent_default
    }

    fn focusable(&self) -> Vec<HtmlElement> {
        let Some(panel) = self.panel.cast::<Element>() else {
            return Vec::new();
        };
        let Ok(nodes) = panel.query_selector_all(FOCUSABLE) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn surroundings(&self) -> Surroundings {
        let items = self.focusable();
        let focused = active_element();
        let active = focused.as_ref().and_then(|focused| {
            items.iter().position(|item| {
                let node: &Node = item;
                focused.is_same_node(Some(node))
            })
        });
        Surroundings {
            scroll_y: scroll::scroll_y(),
            focusable: items.len(),
            active,
            focus_on_control: focused.map_or(false, |el| self.is_outside_control(&el)),
        }
    }

    /// False for the body, which Safari leaves focused after a tap, and for
    /// anything inside the panel.
    fn is_outside_control(&self, el: &HtmlElement) -> bool {
        let node: &Node = el;
        let is_body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map_or(true, |body| body.is_same_node(Some(node)));
        let in_panel = self
            .panel
            .cast::<Node>()
            .map_or(false, |panel| panel.contains(Some(node)));
        !is_body && !in_panel
    }
}

#[function_component(NavMobile)]
pub fn nav_mobile() -> Html {
    let phase = use_state_eq(|| Phase::Closed);
    let drawer = Drawer {
        machine: use_mut_ref(DrawerMachine::default),
        phase: phase.clone(),
        panel: use_node_ref(),
        toggle: use_node_ref(),
        previous_focus: use_mut_ref(|| None),
        key_listener: use_mut_ref(|| None),
        scroll_lock: use_mut_ref(|| None),
    };

    {
        let key_listener = drawer.key_listener.clone();
        let scroll_lock = drawer.scroll_lock.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    key_listener.borrow_mut().take();
                    scroll_lock.borrow_mut().take();
                }
            },
            (),
        );
    }

    let send = |event: DrawerEvent| {
        let drawer = drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer.dispatch(event);
        })
    };

    let on_link = |path: &'static str| {
        let drawer = drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer.dispatch(DrawerEvent::LinkClick);
            scroll::scroll_to_section(path);
        })
    };

    let on_quote = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| {
            drawer.dispatch(DrawerEvent::Close);
            scroll::scroll_to_section("contact");
        })
    };

    let is_open = phase.is_open();
    let tab_index = if is_open { "0" } else { "-1" };

    html! {
        <div class="nav-mobile" data-state={format!("{:?}", *phase).to_lowercase()}>
            <button
                ref={drawer.toggle.clone()}
                class="nav-mobile-toggle"
                onclick={send(DrawerEvent::Toggle)}
                aria-label={if is_open { "Fechar menu" } else { "Abrir menu" }}
                aria-expanded={is_open.to_string()}
                aria-controls="mobile-navigation"
                data-testid="mobile-menu-toggle"
            >
                { if is_open { icons::close() } else { icons::menu() } }
            </button>

            if is_open {
                <div
                    class="nav-mobile-overlay"
                    onclick={send(DrawerEvent::OverlayClick)}
                    aria-hidden="true"
                    data-testid="mobile-menu-overlay"
                ></div>
            }

            <nav
                ref={drawer.panel.clone()}
                id="mobile-navigation"
                class={classes!("nav-mobile-panel", is_open.then(|| "open"))}
                aria-label="Navegação principal"
                aria-hidden={(!is_open).to_string()}
                data-testid="mobile-menu"
            >
                <div class="nav-mobile-head">
                    <span class="nav-mobile-logo">{"EsferaNR6"}</span>
                    <button
                        class="nav-mobile-close"
                        onclick={send(DrawerEvent::Close)}
                        aria-label="Fechar menu"
                        tabindex={tab_index}
                        data-testid="mobile-menu-close"
                    >
                        {icons::close()}
                    </button>
                </div>
                <ul class="nav-mobile-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.path}>
                            <a
                                href={format!("#{}", link.path)}
                                onclick={on_link(link.path)}
                                tabindex={tab_index}
                                data-testid={format!("mobile-menu-link-{}", link.path)}
                            >
                                {link.name}
                            </a>
                        </li>
                    }) }
                </ul>
                <button
                    class="nav-mobile-cta"
                    onclick={on_quote}
                    tabindex={tab_index}
                    data-testid="mobile-menu-cta"
                >
                    <span>{"Peça um orçamento"}</span>
                    {icons::arrow_up_right()}
                </button>
            </nav>

            <style>
                {r#"
                .nav-mobile-toggle {
                    position: relative;
                    z-index: 60;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                    display: flex;
                }
                .nav-mobile-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 40;
                }
                .nav-mobile-panel {
                    position: fixed;
                    top: 0;
                    left: 0;
                    bottom: 0;
                    width: min(320px, 85vw);
                    background: #fff;
                    z-index: 50;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    transform: translateX(-100%);
                    transition: transform 300ms ease-in-out;
                    overflow-y: auto;
                }
                .nav-mobile-panel.open {
                    transform: translateX(0);
                }
                .nav-mobile-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-mobile-logo {
                    font-weight: 800;
                    font-size: 1.25rem;
                    color: #0f1a2a;
                }
                .nav-mobile-close {
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    cursor: pointer;
                    color: #0f1a2a;
                }
                .nav-mobile-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .nav-mobile-links a {
                    color: #0f1a2a;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 1.2px;
                    font-weight: 500;
                }
                .nav-mobile-links a:hover,
                .nav-mobile-links a:focus {
                    color: #ffc221;
                }
                .nav-mobile-cta {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem;
                    background: #ffc221;
                    border: none;
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                @media (min-width: 1280px) {
                    .nav-mobile {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
