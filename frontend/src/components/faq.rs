use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::common::Pretitle;
use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: usize,
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let answer_id = format!("faq-answer-{}", props.id);

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
                aria-controls={answer_id.clone()}
                data-testid={format!("faq-question-{}", props.id)}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" id={answer_id}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq section">
            <div class="container">
                <div class="section-head narrow">
                    <Pretitle text="Faq" center={true} />
                    <h2>{"Tem dúvidas? A gente te ajuda."}</h2>
                    <p>
                        {"Dúvidas práticas do EsferaNR6: setup, usuários e permissões, check-out de EPIs, \
                        CA/alertas, dashboards, API e cobrança."}
                    </p>
                </div>
                <ul class="faq-list">
                    { for FAQ.iter().enumerate().map(|(id, entry)| html! {
                        <li key={entry.title}>
                            <FaqItem {id} question={entry.title} answer={entry.description} />
                        </li>
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                .faq-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #0f1a2a;
                    cursor: pointer;
                }
                .toggle-icon {
                    flex-shrink: 0;
                    width: 2.75rem;
                    height: 2.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffc221;
                    font-size: 1.5rem;
                }
                .faq-item.open .toggle-icon {
                    background: #0f1a2a;
                    color: #fff;
                }
                .faq-item:not(.open) .faq-answer {
                    display: none;
                }
                .faq-answer {
                    padding-bottom: 1.5rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
