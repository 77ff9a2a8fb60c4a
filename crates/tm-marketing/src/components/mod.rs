//! Marketing site components

mod cards;
mod footer;
mod nav;

pub use cards::*;
pub use footer::Footer;
pub use nav::MarketingNav;
