use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Página não encontrada."}</p>
            <Link<Route> to={Route::Home} classes="btn-accent">
                {"Voltar para o início"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: 'DM Sans', sans-serif;
                    background: #0f1a2a;
                    color: #fff;
                }
                .not-found h1 {
                    font-size: 6rem;
                    color: #ffc221;
                    margin: 0;
                }
                .not-found .btn-accent {
                    background: #ffc221;
                    color: #0f1a2a;
                    padding: 1rem 1.5rem;
                    text-decoration: none;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                "#}
            </style>
        </div>
    }
}
