//! Project card component.

use portfolio_types::Project;
use yew::prelude::*;

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

/// One entry in the project feed.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let year = project
        .updated_year()
        .map(|y| y.to_string())
        .unwrap_or_default();

    html! {
        <article class="project-card">
            <div class="project-card-header">
                <h3 class="project-name">
                    <a
                        href={project.html_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { project.display_name() }
                    </a>
                </h3>
                <span class="project-year">{ year }</span>
            </div>
            <p class="project-description">{ project.display_description() }</p>
            <div class="project-badges">
                { for project.badges().into_iter().map(|label| html! {
                    <span class="badge">{ label }</span>
                })}
            </div>
        </article>
    }
}
