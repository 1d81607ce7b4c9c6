//! Project feed component.
//!
//! Fetches the static `projects.json` snapshot once per mount and
//! settles into a terminal state: a list of project cards, or the
//! "no projects found" placeholder. A failed fetch collapses into the
//! same placeholder as a genuinely empty feed.

use gloo_net::http::Request;
use portfolio_types::{decode_projects, FeedState};
use yew::prelude::*;

use crate::components::{Loading, ProjectCard};
use crate::config::base_path;

/// Fetch and decode the feed, collapsing every failure into `Failed`.
async fn fetch_feed() -> FeedState {
    let url = format!("{}/projects.json", base_path());

    match Request::get(&url).send().await {
        Ok(resp) if resp.ok() => match resp.text().await {
            Ok(body) => match decode_projects(&body) {
                Some(projects) => FeedState::Loaded(projects),
                None => {
                    log_feed_error(format!("project feed at {} is not a project array", url));
                    FeedState::Failed
                }
            },
            Err(e) => {
                log_feed_error(format!("failed to read project feed body: {}", e));
                FeedState::Failed
            }
        },
        Ok(resp) => {
            log_feed_error(format!("project feed returned status {}", resp.status()));
            FeedState::Failed
        }
        Err(e) => {
            log_feed_error(format!("failed to fetch project feed: {}", e));
            FeedState::Failed
        }
    }
}

fn log_feed_error(message: String) {
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}

/// Project feed component.
#[function_component(ProjectFeed)]
pub fn project_feed() -> Html {
    let state = use_state(|| FeedState::Idle);

    // One fetch per mount; Loaded/Failed are terminal for the page view.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set(FeedState::Loading);
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.set(fetch_feed().await);
            });
        });
    }

    match &*state {
        FeedState::Loaded(projects) if !projects.is_empty() => html! {
            <div class="project-list">
                { for projects.iter().map(|project| html! {
                    <ProjectCard key={project.id.to_string()} project={project.clone()} />
                })}
            </div>
        },
        state if state.shows_placeholder() => html! {
            <p class="feed-placeholder">{"No projects found."}</p>
        },
        _ => html! { <Loading /> },
    }
}
