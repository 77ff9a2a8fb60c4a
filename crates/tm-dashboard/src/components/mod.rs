//! Reusable components

mod application_card;
mod nav;
mod progress;

pub use application_card::ApplicationCard;
pub use nav::Nav;
pub use progress::ProgressBar;
