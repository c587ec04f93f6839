//! Grouping of outdated packages into build units

use std::collections::BTreeMap;

use super::ReconciledPackage;

/// One recipe to fetch, review and build, with the outdated packages it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUnit {
    pub base: String,
    pub packages: Vec<String>,
}

/// Group packages by base; each base appears once, in name order.
///
/// No dependency ordering between units is attempted.
pub fn group_by_base(packages: &[ReconciledPackage]) -> Vec<BuildUnit> {
    let mut bases: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for pkg in packages {
        bases
            .entry(pkg.base())
            .or_default()
            .push(pkg.name().to_string());
    }
    bases
        .into_iter()
        .map(|(base, packages)| BuildUnit {
            base: base.to_string(),
            packages,
        })
        .collect()
}
