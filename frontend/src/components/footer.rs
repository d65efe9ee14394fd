use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons;
use crate::components::socials::Socials;
use crate::content::{EMAIL, PHONE_DISPLAY};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href="/" class="footer-logo">
                            <img src="/assets/logo1.png" alt="EsferaNr6" width="150" height="48" />
                        </a>
                        <p class="footer-tagline">
                            {"EsferaNR6: controle total de EPIs com biometria e IA. Menos planilhas, \
                            zero multas e mais segurança para sua equipe."}
                        </p>
                        <Socials class={classes!("footer-socials")} />
                    </div>
                    <div class="footer-contact">
                        <h4>{"Contato"}</h4>
                        <div class="footer-contact-item">
                            {icons::phone()}
                            <h5>{"Telefone:"}</h5>
                            <p>{PHONE_DISPLAY}</p>
                        </div>
                        <div class="footer-contact-item">
                            {icons::mail()}
                            <h5>{"E-mail:"}</h5>
                            <p>{EMAIL}</p>
                        </div>
                    </div>
                </div>
                <div class="footer-rights">
                    <p>{format!("© {} Todos os direitos reservados a Mosán dos Santos", year)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    margin-top: 4rem;
                    background: #0f1a2a;
                    color: #fff;
                    padding: 3rem 0;
                }
                .footer-grid {
                    display: grid;
                    gap: 2rem;
                }
                .footer-logo {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                }
                .footer-tagline {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    max-width: 36rem;
                }
                .footer-socials {
                    margin-top: 1.5rem;
                }
                .footer-socials a {
                    color: #ffc221;
                    font-size: 1.5rem;
                }
                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-contact-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #9ca3af;
                }
                .footer-contact-item .icon {
                    color: #ffc221;
                    font-size: 1.5rem;
                }
                .footer-contact-item h5,
                .footer-contact-item p {
                    margin: 0;
                }
                .footer-rights {
                    margin-top: 2.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 1.5rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                @media (min-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (min-width: 1280px) {
                    .site-footer {
                        margin-top: 8rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
