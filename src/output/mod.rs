//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Run summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_format_catalog, print_info,
    print_success, print_warning,
};
pub use progress::create_item_bar;
pub use stats::{print_json_report, print_run_stats};
