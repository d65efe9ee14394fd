use yew::prelude::*;

use crate::components::common::{Button, Pretitle};
use crate::content::whatsapp_quote_url;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about section" id="about">
            <div class="container about-inner">
                <div class="about-copy">
                    <Pretitle text="Sobre Nós" />
                    <h2>{"Focados em Inovação Disruptiva e Resultados Reais."}</h2>
                    <p>
                        {"Combinamos dados, ciência e tecnologia para impulsionar decisões inteligentes e \
                        transformar desafios complexos em oportunidades mensuráveis. Somos movidos pela \
                        busca constante da melhoria e da eficiência."}
                    </p>
                    <div class="about-signature">
                        <img src="/assets/img/about/signature.png" width="154" height="38" alt="Assinatura" />
                        <p>{"CEO - EsferaDataSci"}</p>
                    </div>
                    <Button text="Contate-nos" href={whatsapp_quote_url()} />
                </div>
                <div class="about-image">
                    <img src="/assets/img/about/img.jpg" alt="Sobre" />
                </div>
            </div>
            <style>
                {r#"
                .about-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .about-copy {
                    flex: 1;
                    max-width: 500px;
                }
                .about-copy > p {
                    margin-bottom: 2.75rem;
                }
                .about-signature {
                    margin-bottom: 2rem;
                }
                .about-signature p {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .about-image {
                    display: none;
                    width: 444px;
                    height: 493px;
                    background: #ffc221;
                }
                .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                @media (min-width: 1280px) {
                    .about-inner {
                        flex-direction: row;
                    }
                    .about-image {
                        display: block;
                    }
                }
                "#}
            </style>
        </div>
    }
}
