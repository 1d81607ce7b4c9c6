//! Footer component.

use yew::prelude::*;

/// Footer with the copyright line.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="section-inner">
                <p>{"© 2026 Avery Collins. All rights reserved."}</p>
            </div>
        </footer>
    }
}
