//! Page section and project feed components.

mod about;
mod contact;
mod footer;
mod hero;
mod loading;
mod project_card;
mod project_feed;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::Loading;
pub use project_card::ProjectCard;
pub use project_feed::ProjectFeed;
pub use skills::Skills;
