//! Outdated package table
//!
//! ```text
//! Package (2)  Old Version  New Version
//!
//! bar          1.0-1        1.1-1
//! foo-git      r5.bbb-1     r9.ccc-1
//! ```
//!
//! The old version column is left out when no package is in the local
//! repository yet.

use console::Style;

use super::ReconciledPackage;

/// Shortest old version column, the width of its heading
const OLD_VERSION_MIN: usize = "Old Version".len();

/// Length of `Package ()` without the count digits
const PACKAGE_LABEL_LEN: usize = "Package ()".len();

struct Widths {
    name: usize,
    /// Zero when the old version column is omitted
    old_version: usize,
}

fn widths(packages: &[ReconciledPackage]) -> Widths {
    let count_len = packages.len().to_string().len();
    let name = packages
        .iter()
        .map(|pkg| pkg.name().len())
        .max()
        .unwrap_or(0)
        .max(PACKAGE_LABEL_LEN + count_len);

    let old_version = packages
        .iter()
        .filter_map(|pkg| pkg.local_version.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(0);
    let old_version = if old_version == 0 {
        0
    } else {
        old_version.max(OLD_VERSION_MIN)
    };

    Widths { name, old_version }
}

fn header(packages: &[ReconciledPackage], widths: &Widths) -> String {
    let label = format!("Package ({})", packages.len());
    if widths.old_version == 0 {
        format!("{label:<name$}  New Version", name = widths.name)
    } else {
        format!(
            "{label:<name$}  {:<old$}  New Version",
            "Old Version",
            name = widths.name,
            old = widths.old_version
        )
    }
}

fn row(pkg: &ReconciledPackage, widths: &Widths) -> String {
    if widths.old_version == 0 {
        format!("{:<name$}  {}", pkg.name(), pkg.version(), name = widths.name)
    } else {
        format!(
            "{:<name$}  {:<old$}  {}",
            pkg.name(),
            pkg.local_version.as_deref().unwrap_or_default(),
            pkg.version(),
            name = widths.name,
            old = widths.old_version
        )
    }
}

/// Header line followed by one line per package, in the given order
pub fn render_table(packages: &[ReconciledPackage]) -> Vec<String> {
    let widths = widths(packages);
    std::iter::once(header(packages, &widths))
        .chain(packages.iter().map(|pkg| row(pkg, &widths)))
        .collect()
}

/// Print the table with a bold header
pub fn print_table(packages: &[ReconciledPackage]) {
    let mut lines = render_table(packages).into_iter();
    if let Some(header) = lines.next() {
        println!();
        println!("{}", Style::new().bold().apply_to(header));
        println!();
    }
    for line in lines {
        println!("{line}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::remote;

    fn reconciled(name: &str, new: &str, old: Option<&str>) -> ReconciledPackage {
        ReconciledPackage {
            remote: remote(name, name, new),
            local_version: old.map(ToString::to_string),
        }
    }

    #[test]
    fn test_new_installs_show_only_new_version() {
        let lines = render_table(&[reconciled("foo", "1.0-1", None)]);
        assert_eq!(lines, vec!["Package (1)  New Version", "foo          1.0-1"]);
    }

    #[test]
    fn test_old_version_column_when_any_package_is_installed() {
        let lines = render_table(&[
            reconciled("bar", "1.1-1", Some("1.0-1")),
            reconciled("foo", "2-1", None),
        ]);
        assert_eq!(
            lines,
            vec![
                "Package (2)  Old Version  New Version",
                "bar          1.0-1        1.1-1",
                "foo                       2-1",
            ]
        );
    }

    #[test]
    fn test_columns_grow_with_content() {
        let lines = render_table(&[reconciled(
            "a-very-long-package-name",
            "2-1",
            Some("1.2.3.r100.g0123456-1"),
        )]);
        assert_eq!(
            lines,
            vec![
                "Package (1)               Old Version            New Version",
                "a-very-long-package-name  1.2.3.r100.g0123456-1  2-1",
            ]
        );
    }

    #[test]
    fn test_name_column_fits_count_label() {
        let packages: Vec<_> = (0..10)
            .map(|i| reconciled(&format!("p{i}"), "1-1", None))
            .collect();
        let lines = render_table(&packages);
        assert_eq!(lines[0], "Package (10)  New Version");
        assert_eq!(lines[1], "p0            1-1");
    }
}
