use yew::prelude::*;

use crate::components::icons;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub text: AttrValue,
    /// When set, renders a link opening in a new tab instead of a plain button.
    #[prop_or_default]
    pub href: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Accent call-to-action with the arrow tile on the right.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let inner = html! {
        <>
            <span class="btn-accent-text">{&props.text}</span>
            <span class="btn-accent-icon">{icons::arrow_up_right()}</span>
        </>
    };

    if props.href.is_empty() {
        html! {
            <button class="btn-accent" type="button" onclick={props.onclick.clone()}>
                {inner}
            </button>
        }
    } else {
        html! {
            <a class="btn-accent" href={props.href.clone()} target="_blank" rel="noopener noreferrer"
                onclick={props.onclick.clone()}>
                {inner}
            </a>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PretitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub center: bool,
}

#[function_component(Pretitle)]
pub fn pretitle(props: &PretitleProps) -> Html {
    html! {
        <div class={classes!("pretitle", props.center.then(|| "center"))}>
            <span class="pretitle-square"></span>
            <p>{&props.text}</p>
            <span class="pretitle-square"></span>
        </div>
    }
}
