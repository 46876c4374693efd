pub mod admin;
pub mod captions;
pub mod content;
