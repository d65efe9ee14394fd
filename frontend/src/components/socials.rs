use yew::prelude::*;

use crate::components::icons;
use crate::content::{mailto_url, whatsapp_quote_url, PHONE_HREF};

#[derive(Properties, PartialEq)]
pub struct SocialsProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Socials)]
pub fn socials(props: &SocialsProps) -> Html {
    html! {
        <ul class={classes!("socials", props.class.clone())}>
            <li>
                <a href={whatsapp_quote_url()} target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                    {icons::whatsapp()}
                </a>
            </li>
            <li>
                <a href={mailto_url()} aria-label="E-mail">{icons::mail()}</a>
            </li>
            <li>
                <a href={PHONE_HREF} aria-label="Telefone">{icons::phone()}</a>
            </li>
        </ul>
    }
}
