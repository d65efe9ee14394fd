use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, faq::Faq, footer::Footer, header::Header, hero::Hero,
    pricing::Pricing, services::Services, stats::Stats, topbar::Topbar, work::Work,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <Topbar />
            <Header />
            <Hero />
            <About />
            <Stats />
            <Services />
            <Work />
            <Faq />
            <Pricing />
            <Contact />
            <Footer />
            <style>
                {r#"
                :root {
                    --primary: #0f1a2a;
                    --accent: #ffc221;
                }
                body {
                    margin: 0;
                    font-family: 'DM Sans', sans-serif;
                    color: #1f2937;
                }
                h1, h2, h3, h4, h5 {
                    font-family: 'Barlow', sans-serif;
                    color: inherit;
                }
                h1 {
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    line-height: 1.1;
                    margin: 0 0 1rem;
                }
                h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    line-height: 1.15;
                    margin: 0 0 1rem;
                }
                .accent {
                    color: var(--accent);
                }
                .container {
                    width: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                .section {
                    padding-top: 4rem;
                }
                .section-head {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .section-head.narrow {
                    max-width: 540px;
                }
                .pretitle {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    text-transform: uppercase;
                    font-weight: 600;
                    letter-spacing: 1.2px;
                    font-size: 0.875rem;
                }
                .pretitle.center {
                    justify-content: center;
                }
                .pretitle p {
                    margin: 0;
                }
                .pretitle-square {
                    width: 6px;
                    height: 6px;
                    background: var(--accent);
                }
                .btn-accent {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    height: 54px;
                    padding: 0 5px 0 1.5rem;
                    background: var(--accent);
                    color: var(--primary);
                    border: none;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 1.2px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .btn-accent-icon {
                    width: 44px;
                    height: 44px;
                    background: var(--primary);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    transition: transform 0.2s;
                }
                .btn-accent:hover .btn-accent-icon {
                    transform: rotate(45deg);
                }
                .socials {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .socials a {
                    color: var(--primary);
                    font-size: 1.25rem;
                }
                @media (min-width: 1280px) {
                    .section {
                        padding-top: 8rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
