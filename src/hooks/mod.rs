// ============================================================================
// HOOKS - stateful view logic shared by the page components
// ============================================================================

pub mod use_active_station;
pub mod use_current_user;
pub mod use_dashboard_details;
pub mod use_dashboard_metrics;
pub mod use_stations;
pub mod use_transactions;

pub use use_active_station::use_active_station;
pub use use_current_user::use_current_user;
pub use use_dashboard_details::use_dashboard_details;
pub use use_dashboard_metrics::use_dashboard_metrics;
pub use use_stations::use_stations;
pub use use_transactions::use_transactions;
