//! Contact section component.

use yew::prelude::*;

/// Contact section: lead line plus external profile links.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section section-alt">
            <div class="section-inner">
                <h2 class="section-heading">{"Get In Touch"}</h2>
                <p class="contact-lead">
                    {"I'm always interested in hearing about new projects and \
                      opportunities."}
                </p>
                <div class="contact-links">
                    <a href="mailto:hello@averycollins.dev">
                        <span class="contact-label">{"Email"}</span>
                    </a>
                    <a
                        href="https://github.com/averycollins"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class="contact-label">{"GitHub"}</span>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/avery-collins/"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class="contact-label">{"LinkedIn"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
