//! Skills section component.

use yew::prelude::*;

/// One labelled column of skills.
fn skill_column(label: &str, items: &[&str]) -> Html {
    html! {
        <div>
            <h3 class="fact-label">{ label }</h3>
            <ul class="skill-list">
                { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
        </div>
    }
}

/// Skills section: three static columns.
#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section">
            <div class="section-inner">
                <h2 class="section-heading">{"Skills & Technologies"}</h2>
                <div class="skills-grid">
                    { skill_column("Frontend", &["Rust / Yew", "TypeScript", "Tailwind CSS", "WebAssembly"]) }
                    { skill_column("Backend", &["Rust", "Python", "PostgreSQL", "REST APIs"]) }
                    { skill_column("Tools", &["Git / GitHub", "Docker", "AWS", "Figma"]) }
                </div>
            </div>
        </section>
    }
}
