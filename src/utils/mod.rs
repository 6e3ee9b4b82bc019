// Shared utilities

pub mod constants;
pub mod format;
pub mod scanner_ffi;
pub mod storage;

pub use constants::*;
pub use storage::{get_local_storage, load_from_storage, remove_from_storage, save_to_storage};
