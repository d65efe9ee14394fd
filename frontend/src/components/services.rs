use yew::prelude::*;

use crate::components::common::{Button, Pretitle};
use crate::content::{whatsapp_quote_url, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    let active = use_state_eq(|| 0usize);
    let service = &SERVICES[(*active).min(SERVICES.len() - 1)];

    html! {
        <section class="services section" id="services">
            <div class="container">
                <div class="section-head">
                    <Pretitle text="Nossas Soluções" center={true} />
                    <h2>{"Soluções Completas para Gerenciamento de EPIs"}</h2>
                    <p>
                        {"EsferaNR6 é a plataforma mais completa para gerenciamento de EPIs, \
                        com conformidade total à NR-6 e integração opcional com NR-7."}
                    </p>
                </div>

                <div class="services-tabs" role="tablist">
                    { for SERVICES.iter().enumerate().map(|(index, item)| {
                        let selected = index == *active;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <button
                                key={item.name}
                                class={classes!("services-tab", selected.then(|| "selected"))}
                                role="tab"
                                aria-selected={selected.to_string()}
                                {onclick}
                            >
                                <i class={classes!("service-icon", format!("icon-{}", item.icon))}></i>
                                <h4>{item.title}</h4>
                            </button>
                        }
                    }) }
                </div>

                <div class="service-detail" role="tabpanel">
                    <div>
                        <div class="service-detail-head">
                            <i class={classes!("service-icon", "large", format!("icon-{}", service.icon))}></i>
                            <div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </div>
                        <ul class="service-items">
                            { for service.items.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                        <Button text="Saiba Mais" href={whatsapp_quote_url()} />
                    </div>
                    <div class="service-thumbs">
                        { for service.thumbs.iter().enumerate().map(|(i, url)| html! {
                            <img src={*url} alt={format!("{} - {}", service.title, i + 1)} />
                        }) }
                    </div>
                </div>

                <div class="services-cta">
                    <p>{"Quer conhecer todas as funcionalidades em detalhes?"}</p>
                    <Button text="Agendar Demonstração" href={whatsapp_quote_url()} />
                </div>
            </div>
            <style>
                {r#"
                .services {
                    background: #f9fafb;
                }
                .services-tabs {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .services-tab {
                    padding: 1rem;
                    border-radius: 8px;
                    border: 2px solid #e5e7eb;
                    background: #fff;
                    cursor: pointer;
                    transition: transform 0.3s, border-color 0.3s;
                }
                .services-tab:hover {
                    transform: scale(1.05);
                }
                .services-tab.selected {
                    background: #ffc221;
                    border-color: #ffc221;
                }
                .services-tab h4 {
                    font-size: 0.875rem;
                    margin: 0.5rem 0 0;
                }
                .service-detail {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }
                .service-detail-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .service-items {
                    margin-bottom: 2rem;
                    padding-left: 1.25rem;
                }
                .service-items li::marker {
                    color: #ffc221;
                }
                .service-thumbs {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .service-thumbs img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                    border-radius: 8px;
                    background: #e5e7eb;
                }
                .services-cta {
                    margin-top: 4rem;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                @media (min-width: 768px) {
                    .services-tabs {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (min-width: 1280px) {
                    .services-tabs {
                        grid-template-columns: repeat(5, 1fr);
                    }
                    .service-detail {
                        grid-template-columns: 1fr 1fr;
                        padding: 3rem;
                    }
                    .service-thumbs img {
                        height: 250px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
