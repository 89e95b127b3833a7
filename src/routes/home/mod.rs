mod get;
mod post;

pub use get::home;
pub use post::{submit_contact, subscribe_newsletter};
