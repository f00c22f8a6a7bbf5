//! UI Components
//!
//! Leptos components for the portfolio pages.

mod about;
mod apps;
mod contact;
mod footer;
mod home;
mod portfolio;
mod project_view;
mod resource_view;
mod skills;
mod toast;

pub use about::About;
pub use apps::Apps;
pub use contact::Contact;
pub use footer::Footer;
pub use home::Home;
pub use portfolio::Portfolio;
pub use project_view::ProjectView;
pub use resource_view::ResourceView;
pub use skills::Skills;
pub use toast::ToastContainer;
