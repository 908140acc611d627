pub mod components;
pub mod layout;
pub mod panel;
pub mod utils;

pub use panel::DashboardPage;
