pub mod admin_dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;

pub use admin_dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
