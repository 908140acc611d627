pub mod details;

pub use details::ProfileDetails;
