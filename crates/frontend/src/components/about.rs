//! About section component.

use yew::prelude::*;

/// About section: two introduction paragraphs plus quick facts.
#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="section-inner">
                <h2 class="section-heading">{"About"}</h2>
                <div class="about-grid">
                    <div>
                        <p class="about-lead">
                            {"I'm a software developer focused on building secure, \
                              reliable, and scalable applications. I enjoy \
                              understanding how systems work end-to-end, from \
                              architecture to user experience."}
                        </p>
                        <p class="about-body">
                            {"Currently I work across the stack, continuously \
                              learning, experimenting with new tools, and building \
                              things that solve meaningful problems."}
                        </p>
                    </div>
                    <div class="about-facts">
                        <div>
                            <h3 class="fact-label">{"Location"}</h3>
                            <p class="fact-value">{"New York City, NY"}</p>
                        </div>
                        <div>
                            <h3 class="fact-label">{"Experience"}</h3>
                            <p class="fact-value">{"1 year"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
