//! Loading placeholder component.

use yew::prelude::*;

/// Spinner shown while the project feed is in flight.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            <span class="visually-hidden">{"Loading projects"}</span>
        </div>
    }
}
