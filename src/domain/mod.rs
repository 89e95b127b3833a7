mod records;
mod required_text;
mod submissions;
mod subscriber_email;

pub use records::{Client, Contact, Project, Subscriber};
pub use required_text::RequiredText;
pub use submissions::{ClientSubmission, NewContact, NewSubscriber, ProjectSubmission};
pub use subscriber_email::SubscriberEmail;
