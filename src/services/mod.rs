// ============================================================================
// SERVICES - HTTP clients for the dashboard backend
// ============================================================================

pub mod api;
pub mod auth_service;
pub mod card_service;
pub mod dashboard_service;
pub mod station_service;
pub mod transaction_service;
