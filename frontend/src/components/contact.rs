use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::icons;
use crate::components::socials::Socials;
use crate::contact_form::{
    post_contact, submit, ContactFields, FormState, SubmitStatus, FAILED_MESSAGE, SENT_MESSAGE,
};
use crate::content::{mailto_url, EMAIL, PHONE_DISPLAY, PHONE_HREF};

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    let data = FormData::new_with_form(form).ok();
    let field = |name: &str| {
        data.as_ref()
            .and_then(|data| data.get(name).as_string())
            .unwrap_or_default()
    };
    ContactFields {
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        subject: field("subject"),
        message: field("message"),
        website: field("website"),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_state_eq(FormState::default);

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(sending) = state.begin() else {
                return;
            };

            let form: HtmlFormElement = e.target_unchecked_into();
            let fields = read_fields(&form);
            state.set(sending);

            let state = state.clone();
            spawn_local(async move {
                let outcome = submit(fields, post_contact).await;
                match &outcome {
                    SubmitStatus::Sent => form.reset(),
                    SubmitStatus::Failed(reason) => log!("Contact submission failed:", reason.as_str()),
                    SubmitStatus::Idle => {}
                }
                state.set(FormState::finish(outcome));
            });
        })
    };

    html! {
        <section class="contact section" id="contact">
            <div class="container">
                <div class="contact-box">
                    <div class="contact-info">
                        <div>
                            <h4>{"Contate-nos"}</h4>
                            <p class="contact-lead">
                                {"Cada grande projeto começa com uma conversa. Nós cuidamos de transformá-la \
                                em inovação e resultado real. Conte-nos sua ideia."}
                            </p>
                            <div class="contact-cards">
                                <div class="contact-card">
                                    <div class="contact-card-icon">{icons::mail()}</div>
                                    <div>
                                        <h5>{"Envie um email"}</h5>
                                        <p>{"Nosso time responderá em breve."}</p>
                                        <a href={mailto_url()}>{EMAIL}</a>
                                    </div>
                                </div>
                                <div class="contact-card">
                                    <div class="contact-card-icon">{icons::phone()}</div>
                                    <div>
                                        <h5>{"Ligue para nós"}</h5>
                                        <p>{"Disponível em horário comercial."}</p>
                                        <a href={PHONE_HREF}>{PHONE_DISPLAY}</a>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <Socials />
                    </div>

                    <div class="contact-form-column">
                        <h2>{"Solicite um Orçamento"}</h2>
                        <p>{"Descubra o potencial do que podemos criar juntos. Preencha o formulário abaixo."}</p>

                        <form class="contact-form" {onsubmit}>
                            // hidden from people, bots fill it in
                            <input type="text" name="website" class="honeypot" tabindex="-1" autocomplete="off" aria-hidden="true" />

                            <div class="contact-row">
                                <input name="name" placeholder="Seu nome" required={true} />
                                <input name="email" type="email" placeholder="Seu e-mail" required={true} />
                            </div>
                            <input name="phone" placeholder="Telefone (opcional)" />
                            <input name="subject" placeholder="Assunto" />
                            <textarea name="message" rows="5" placeholder="Mensagem" required={true} />

                            <button type="submit" class="contact-submit" disabled={state.loading}>
                                {if state.loading { "Enviando..." } else { "Enviar" }}
                            </button>

                            {
                                match &state.status {
                                    SubmitStatus::Idle => html! {},
                                    SubmitStatus::Sent => html! {
                                        <p class="contact-status sent" role="status">{SENT_MESSAGE}</p>
                                    },
                                    SubmitStatus::Failed(reason) => html! {
                                        <div class="contact-status failed" role="alert">
                                            <p>{FAILED_MESSAGE}</p>
                                            <p class="contact-status-detail">{reason.clone()}</p>
                                        </div>
                                    },
                                }
                            }
                        </form>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-box {
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    border-top: 4px solid #ffc221;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 40px;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .contact-info h4 {
                    font-size: 26px;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .contact-lead {
                    font-size: 1.125rem;
                    margin-bottom: 2.25rem;
                }
                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .contact-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.25rem;
                }
                .contact-card-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: rgba(15, 26, 42, 0.1);
                    color: #ffc221;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .contact-card h5 {
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem;
                }
                .contact-card p {
                    color: #6b7280;
                    margin: 0 0 0.25rem;
                }
                .contact-card a {
                    font-weight: 600;
                    color: #0f1a2a;
                    word-break: break-all;
                }
                .contact-form-column {
                    flex: 1;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form .honeypot {
                    display: none;
                }
                .contact-row {
                    display: grid;
                    gap: 1rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    padding: 0.75rem;
                    font: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #ffc221;
                }
                .contact-submit {
                    align-self: flex-start;
                    border: none;
                    border-radius: 6px;
                    background: #ffc221;
                    padding: 0.75rem 1.25rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .contact-status.sent {
                    color: #16a34a;
                    font-weight: 600;
                }
                .contact-status.failed {
                    color: #dc2626;
                }
                .contact-status.failed p:first-child {
                    font-weight: 600;
                }
                .contact-status-detail {
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                @media (min-width: 768px) {
                    .contact-row {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (min-width: 1280px) {
                    .contact-box {
                        flex-direction: row;
                        gap: 90px;
                        padding: 36px 90px;
                    }
                    .contact-info {
                        max-width: 420px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
