use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact_form;
mod content;
mod drawer;
mod projects;
mod scroll;
mod components {
    pub mod about;
    pub mod common;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod nav_mobile;
    pub mod pricing;
    pub mod services;
    pub mod socials;
    pub mod stats;
    pub mod topbar;
    pub mod work;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting EsferaNR6");
    yew::Renderer::<App>::new().render();
}
