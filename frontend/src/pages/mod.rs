pub mod attendance;
pub mod attendance_summary;
pub mod dashboard;
pub mod login;
pub mod profile;

pub use attendance::AttendancePage;
pub use attendance_summary::AttendanceSummaryPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
