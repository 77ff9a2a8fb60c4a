//! Marketing site pages

mod contact;
mod home;
mod pricing;
mod services;

pub use contact::ContactPage;
pub use home::HomePage;
pub use pricing::PricingPage;
pub use services::ServicesPage;
