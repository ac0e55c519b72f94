//! Filesystem module.
//!
//! Provides:
//! - Destination name generation
//! - Day folder paths and file relocation

pub mod naming;
pub mod paths;

pub use naming::{
    day_folder_name, destination_name, is_metadata_sentinel, DISCARDED_NAME_EXTENSION,
    METADATA_SENTINEL,
};
pub use paths::{day_folder_path, ensure_dir, list_entries, planned_destination, relocate};
