// ============================================================================
// COMPONENTS - pages and shared UI
// ============================================================================

pub mod account;
pub mod app;
pub mod checkout;
pub mod customers;
pub mod dashboard;
pub mod login_screen;
pub mod loyalty_cards;
pub mod pass_download;
pub mod scanner;
pub mod sidebar;
pub mod signup_form;
pub mod stations;

pub use app::App;
