use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The hackathon is still on though."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the event"}
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
                        color: #1a1a1a;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .not-found h1 { font-size: 6rem; margin: 0; }
                    .not-found-link {
                        background: #1a1a1a;
                        color: #ffffff;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
