use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::common::Pretitle;
use crate::components::icons;
use crate::projects::{self, Project};

const AUTOPLAY_MS: u32 = 3500;

pub fn next_slide(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

pub fn previous_slide(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

fn slides_for(category: Option<&str>, term: &str) -> Vec<&'static Project> {
    let slides = match category {
        Some(category) => projects::by_category(category),
        None => projects::featured_first(),
    };
    let term = term.trim();
    if term.is_empty() {
        return slides;
    }
    let matches = projects::search(term);
    slides.into_iter().filter(|p| matches.contains(p)).collect()
}

#[derive(Properties, PartialEq)]
struct SlideProps {
    project: &'static Project,
    position: usize,
}

#[function_component(Slide)]
fn slide(props: &SlideProps) -> Html {
    let project = props.project;
    html! {
        <article class="work-slide" role="group" aria-label={format!("Projeto {}: {}", props.position + 1, project.name)}>
            <img src={project.img} alt={format!("Screenshot do projeto {} - {}", project.name, project.description)} />
            <div class="work-slide-shade" aria-hidden="true"></div>
            if project.featured {
                <span class="work-featured">{"Destaque"}</span>
            }
            <div class="work-slide-body">
                <h3>{project.name}</h3>
                <p>{project.description}</p>
                <div class="work-meta">
                    <span class="work-category">{project.category}</span>
                    <span>{project.year.to_string()}</span>
                    <span>{project.client}</span>
                </div>
                <ul class="work-tech">
                    { for project.technologies.iter().map(|tech| html! { <li>{*tech}</li> }) }
                </ul>
                if project.has_link() {
                    <a
                        class="work-open"
                        href={project.href}
                        target={if project.external { "_blank" } else { "_self" }}
                        rel="noopener noreferrer"
                        aria-label={format!("Ver detalhes do projeto {}", project.name)}
                    >
                        {icons::arrow_up_right()}
                    </a>
                } else {
                    <span class="work-open disabled" aria-label="Projeto em desenvolvimento">
                        {icons::arrow_up_right()}
                    </span>
                }
            </div>
        </article>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let category = use_state_eq(|| None::<&'static str>);
    let index = use_state_eq(|| 0usize);
    let paused = use_state_eq(|| false);
    let term = use_state(String::new);

    let slides = slides_for(*category, &term);
    let len = slides.len();
    let current = (*index).min(len.saturating_sub(1));

    {
        let index = index.clone();
        let autoplay = if *paused || len < 2 { 0 } else { AUTOPLAY_MS };
        use_interval(move || index.set(next_slide(*index, len)), autoplay);
    }

    let go_to = |target: usize| {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(target))
    };

    let pick_category = |value: Option<&'static str>| {
        let category = category.clone();
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            category.set(value);
            index.set(0);
        })
    };

    let on_search = {
        let term = term.clone();
        let index = index.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            term.set(input.value());
            index.set(0);
        })
    };

    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    html! {
        <section class="work section" id="projects">
            <div class="container">
                <div class="section-head">
                    <Pretitle text="EsferaDataSCI" center={true} />
                    <h2>{"Nossos Projetos"}</h2>
                    <p>{"Conheça os nossos projetos em diversas áreas."}</p>
                </div>

                <div class="work-filter">
                    <button
                        class={classes!("work-filter-btn", category.is_none().then(|| "selected"))}
                        onclick={pick_category(None)}
                    >
                        {"Todos"}
                    </button>
                    { for projects::categories().into_iter().map(|name| html! {
                        <button
                            key={name}
                            class={classes!("work-filter-btn", (*category == Some(name)).then(|| "selected"))}
                            onclick={pick_category(Some(name))}
                        >
                            {name}
                        </button>
                    }) }
                    <input
                        class="work-search"
                        type="search"
                        placeholder="Buscar por nome ou tecnologia"
                        list="work-technologies"
                        value={(*term).clone()}
                        oninput={on_search}
                    />
                    <datalist id="work-technologies">
                        { for projects::technologies().into_iter().map(|tech| html! { <option value={tech} /> }) }
                    </datalist>
                </div>

                if len == 0 {
                    <p class="work-empty">{"Nenhum projeto encontrado."}</p>
                }

                <div
                    class="work-carousel"
                    aria-roledescription="carousel"
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    <button
                        class="work-nav prev"
                        aria-label="Projeto anterior"
                        onclick={go_to(previous_slide(current, len))}
                    >
                        {"‹"}
                    </button>
                    <div class="work-viewport">
                        <div class="work-track" style={format!("transform: translateX(-{}%)", current * 100)}>
                            { for slides.iter().enumerate().map(|(position, project)| html! {
                                <div class="work-cell" key={project.name}>
                                    <Slide project={*project} {position} />
                                </div>
                            }) }
                        </div>
                    </div>
                    <button
                        class="work-nav next"
                        aria-label="Próximo projeto"
                        onclick={go_to(next_slide(current, len))}
                    >
                        {"›"}
                    </button>
                </div>

                <div class="work-dots">
                    { for (0..len).map(|dot| html! {
                        <button
                            class={classes!("work-dot", (dot == current).then(|| "active"))}
                            aria-label={format!("Ir para o projeto {}", dot + 1)}
                            onclick={go_to(dot)}
                        ></button>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .work-filter {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .work-filter-btn {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 2px solid #e5e7eb;
                    background: #fff;
                    cursor: pointer;
                    font-weight: 600;
                }
                .work-filter-btn.selected {
                    background: #ffc221;
                    border-color: #ffc221;
                }
                .work-search {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 2px solid #e5e7eb;
                    font: inherit;
                    min-width: 16rem;
                }
                .work-empty {
                    text-align: center;
                    color: #6b7280;
                }
                .work-carousel {
                    position: relative;
                    max-width: 420px;
                    margin: 0 auto;
                }
                .work-viewport {
                    overflow: hidden;
                    border-radius: 16px;
                }
                .work-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .work-cell {
                    flex: 0 0 100%;
                }
                .work-slide {
                    position: relative;
                    height: 500px;
                    overflow: hidden;
                }
                .work-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    background: #1f2937;
                }
                .work-slide-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0,0,0,0.5), transparent);
                    opacity: 0.8;
                }
                .work-featured {
                    position: absolute;
                    top: 1.5rem;
                    left: 1.5rem;
                    background: #ffc221;
                    color: #0f1a2a;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .work-slide-body {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    color: #fff;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(12px);
                }
                .work-slide-body h3 {
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    margin: 0 0 0.5rem;
                }
                .work-meta {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: rgba(255, 194, 33, 0.8);
                }
                .work-tech {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    list-style: none;
                    padding: 0;
                    margin: 0.75rem 0 0;
                    font-size: 0.75rem;
                }
                .work-tech li {
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 999px;
                    padding: 0.125rem 0.5rem;
                }
                .work-open {
                    position: absolute;
                    top: -25px;
                    right: 1.5rem;
                    width: 50px;
                    height: 50px;
                    border-radius: 50%;
                    background: #ffc221;
                    color: #0f1a2a;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s;
                }
                .work-open:hover {
                    transform: scale(1.1) rotate(45deg);
                }
                .work-open.disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .work-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 2;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .work-nav.prev {
                    left: -22px;
                }
                .work-nav.next {
                    right: -22px;
                }
                .work-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .work-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                }
                .work-dot.active {
                    background: #ffc221;
                    width: 24px;
                    border-radius: 5px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::PROJECTS;

    #[test]
    fn navigation_loops_both_ways() {
        assert_eq!(next_slide(3, 4), 0);
        assert_eq!(next_slide(1, 4), 2);
        assert_eq!(previous_slide(0, 4), 3);
        assert_eq!(previous_slide(2, 4), 1);
    }

    #[test]
    fn empty_and_single_carousels_stay_put() {
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(previous_slide(0, 0), 0);
        assert_eq!(next_slide(0, 1), 0);
        assert_eq!(previous_slide(0, 1), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let len = PROJECTS.len();
        let index = (0..len).fold(0, |i, _| next_slide(i, len));
        assert_eq!(index, 0);
    }

    #[test]
    fn category_filter_narrows_slides() {
        assert_eq!(slides_for(None, "").len(), PROJECTS.len());
        assert!(slides_for(Some("Marketing"), "")
            .iter()
            .all(|p| p.category == "Marketing"));
    }

    #[test]
    fn search_combines_with_category() {
        let names: Vec<_> = slides_for(Some("Sistema Web"), " postgresql ")
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Blindagem Trabalhista"]);
        assert!(slides_for(Some("Website"), "mongodb").is_empty());
    }
}
