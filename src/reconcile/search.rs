//! Search result ordering and display
//!
//! Results are sorted by ascending popularity, then ascending votes, so the
//! most relevant ones end up last, next to the prompt.

use console::Style;

use crate::registry::RemotePackage;

/// Stable sort by (popularity, votes), both ascending
pub fn sort_search_results(results: &mut [RemotePackage]) {
    results.sort_by(|a, b| {
        a.popularity
            .total_cmp(&b.popularity)
            .then(a.num_votes.cmp(&b.num_votes))
    });
}

/// `aur/<name> <version> [<votes> <popularity>] [<flag date>]` and an indented description
pub fn format_search_result(pkg: &RemotePackage) -> String {
    let mut line = format!(
        "{}{} {} {}",
        Style::new().magenta().bold().apply_to("aur/"),
        Style::new().bold().apply_to(&pkg.name),
        Style::new().green().bold().apply_to(&pkg.version),
        Style::new()
            .cyan()
            .apply_to(format!("[{} {:.2}]", pkg.num_votes, pkg.popularity)),
    );
    if let Some(date) = pkg.flagged_date() {
        line.push(' ');
        line.push_str(&Style::new().red().apply_to(format!("(Out-of-date: {date})")).to_string());
    }
    line.push_str("\n    ");
    line.push_str(pkg.description.as_deref().unwrap_or_default());
    line
}
