use yew::prelude::*;

use crate::components::common::Button;
use crate::content::whatsapp_quote_url;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-shade"></div>
            <div class="container hero-inner">
                <div class="hero-copy">
                    <h1>
                        <span class="accent">{"A Revolução "}</span>
                        {"digital na gestão de EPI chegou."}
                    </h1>
                    <p>
                        {"Planilhas, fichas de papel e controles manuais ficaram no passado. \
                        O EsferaNR6 é um sistema inteligente que centraliza a entrega de EPIs com identificação facial e biometria, \
                        prevê necessidades de estoque com IA e garante total conformidade com a NR-6 e indiretamente com a NR-7. \
                        Reduza custos, elimine falhas humanas e tenha uma gestão de segurança moderna, eficiente e à prova de auditorias."}
                    </p>
                    <Button text="Solicite nosso orçamento" href={whatsapp_quote_url()} />
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    height: 70vh;
                    position: relative;
                    background: url('/assets/img/hero/bg.jpg') center / cover no-repeat, #0f1a2a;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to left, rgba(0,0,0,0), rgba(0,0,0,0.5), rgba(0,0,0,0.7));
                    z-index: 1;
                }
                .hero-inner {
                    height: 100%;
                    display: flex;
                    align-items: center;
                }
                .hero-copy {
                    position: relative;
                    z-index: 2;
                    color: #fff;
                    max-width: 608px;
                    margin: 0 auto;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .hero-copy p {
                    margin-bottom: 2.25rem;
                }
                @media (min-width: 1280px) {
                    .hero-copy {
                        margin: 0;
                        text-align: left;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}
