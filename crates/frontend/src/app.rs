//! Top-level page component.

use yew::prelude::*;

use crate::components::{About, Contact, Footer, Hero, ProjectFeed, Skills};

/// The whole single-page site, sections in display order.
///
/// Navigation is by in-page anchors only; there are no routes.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="page">
            <Hero />
            <About />
            <section id="work" class="section section-alt">
                <div class="section-inner">
                    <h2 class="section-heading">{"Selected Work"}</h2>
                    <ProjectFeed />
                </div>
            </section>
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}
