pub mod card;
pub mod dashboard;
pub mod station;
pub mod transaction;
pub mod user;

pub use dashboard::{DashboardDetails, DashboardMetrics};
pub use user::CurrentUser;
