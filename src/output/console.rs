//! Console output utilities.

use console::style;

use crate::config::{RunConfig, TimestampFormat};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Timestamp Renamer                                 ║
║     Rename media files by their creation time         ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the run configuration summary.
pub fn print_config_summary(config: &RunConfig) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Directory:   {}", config.directory.display());
    println!("  Format:      {}", config.format);
    println!("  Keep name:   {}", yes_no(config.keep_original_name));
    println!("  Day folders: {}", yes_no(config.create_day_folders));
    if config.dry_run {
        println!("  {}", style("Dry run: no files will be changed").yellow());
    }
    println!();
}

/// Print the format catalog.
pub fn print_format_catalog() {
    println!("{}", style("Available timestamp formats:").bold());
    for format in TimestampFormat::ALL {
        println!("  {:<22} {}", format.label(), style(format.pattern()).dim());
    }
}
