// ============================================================================
// STORES - persisted client-side state
// ============================================================================

pub mod active_station;
pub mod theme;
