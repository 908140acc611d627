pub mod action;
pub mod status;

pub use action::ActionCard;
pub use status::StatusCard;
