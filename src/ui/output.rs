//! Styled status lines in the format makepkg and pacman users expect

use console::Style;

/// Print `:: <message>` with a bold blue marker
pub fn action(message: &str) {
    println!(
        "{} {}",
        Style::new().blue().bold().apply_to("::"),
        Style::new().bold().apply_to(message)
    );
}

/// Print `==> WARNING: <message>` with a bold yellow marker
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("==> WARNING:"),
        Style::new().bold().apply_to(message)
    );
}

/// Format a byte count as a human-readable string
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}
