pub mod dashboard;
pub mod register;

pub use dashboard::DashboardPage;
pub use register::RegisterPage;
