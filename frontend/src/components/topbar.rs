use yew::prelude::*;

use crate::components::icons;
use crate::components::socials::Socials;
use crate::content::{EMAIL, PHONE_DISPLAY};

#[function_component(Topbar)]
pub fn topbar() -> Html {
    html! {
        <section class="topbar" id="home">
            <div class="container topbar-inner">
                <div class="topbar-contacts">
                    <div class="topbar-item">
                        <span class="topbar-icon">{icons::phone()}</span>
                        <p>{PHONE_DISPLAY}</p>
                    </div>
                    <div class="topbar-item">
                        <span class="topbar-icon">{icons::mail()}</span>
                        <p>{EMAIL}</p>
                    </div>
                </div>
                <Socials class={classes!("topbar-socials")} />
            </div>
            <style>
                {r#"
                .topbar {
                    background: linear-gradient(to top, #ffc221, #ffd76e);
                    padding: 1rem 0;
                }
                .topbar-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .topbar-contacts {
                    display: none;
                    gap: 2rem;
                }
                .topbar-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 500;
                    color: #0f1a2a;
                }
                .topbar-item p {
                    margin: 0;
                }
                .topbar-icon {
                    width: 2rem;
                    height: 2rem;
                    background: #0f1a2a;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .topbar-socials {
                    margin: 0 auto;
                }
                @media (min-width: 1280px) {
                    .topbar {
                        height: 4rem;
                        padding: 0;
                        display: flex;
                        align-items: center;
                    }
                    .topbar-contacts {
                        display: flex;
                    }
                    .topbar-socials {
                        margin: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
