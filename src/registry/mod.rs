//! AUR package metadata
//!
//! This module handles:
//! - The record type the RPC interface returns for each package
//! - The [`Registry`] seam the reconciliation engine fetches through
//!
//! The HTTP implementation lives in [`client`].

pub mod client;

use chrono::DateTime;
use serde::Deserialize;

use crate::error::Result;

pub use client::AurClient;

/// One package as published on the AUR
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemotePackage {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent when the package is orphaned upstream
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub num_votes: u64,
    #[serde(default)]
    pub popularity: f64,
    /// Unix seconds; absent or zero when not flagged
    #[serde(default)]
    pub out_of_date: Option<i64>,
    /// Build unit the package is produced by
    pub package_base: String,
    pub version: String,
}

impl RemotePackage {
    /// Timestamp the package was flagged out of date, if it is
    pub fn flagged_since(&self) -> Option<i64> {
        self.out_of_date.filter(|&ts| ts > 0)
    }

    /// Flag date as `YYYY-MM-DD`
    pub fn flagged_date(&self) -> Option<String> {
        self.flagged_since()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|date| date.format("%Y-%m-%d").to_string())
    }

    pub fn is_orphan(&self) -> bool {
        self.maintainer.as_deref().is_none_or(str::is_empty)
    }
}

/// Source of remote package metadata
pub trait Registry {
    /// Fetch the records for `names`. Unknown names are silently missing from the result.
    fn info(&self, names: &[String]) -> Result<Vec<RemotePackage>>;

    /// Search names and descriptions; results come back in no particular order.
    fn search(&self, term: &str) -> Result<Vec<RemotePackage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> RemotePackage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_full_record() {
        let pkg = record(
            r#"{
                "ID": 1,
                "Name": "paru-bin",
                "PackageBaseID": 2,
                "PackageBase": "paru-bin",
                "Version": "2.0.4-1",
                "Description": "Feature packed AUR helper",
                "URL": "https://github.com/morganamilo/paru",
                "NumVotes": 120,
                "Popularity": 3.25,
                "OutOfDate": null,
                "Maintainer": "Morganamilo",
                "FirstSubmitted": 1600000000,
                "LastModified": 1700000000
            }"#,
        );
        assert_eq!(pkg.name, "paru-bin");
        assert_eq!(pkg.package_base, "paru-bin");
        assert_eq!(pkg.version, "2.0.4-1");
        assert_eq!(pkg.num_votes, 120);
        assert!((pkg.popularity - 3.25).abs() < f64::EPSILON);
        assert_eq!(pkg.flagged_since(), None);
        assert!(!pkg.is_orphan());
    }

    #[test]
    fn test_orphan_and_flagged() {
        let pkg = record(
            r#"{
                "Name": "old-thing",
                "PackageBase": "old-thing",
                "Version": "1-1",
                "Maintainer": null,
                "OutOfDate": 1704067200
            }"#,
        );
        assert!(pkg.is_orphan());
        assert_eq!(pkg.flagged_since(), Some(1_704_067_200));
        assert_eq!(pkg.flagged_date().as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_zero_out_of_date_is_not_flagged() {
        let pkg = record(
            r#"{"Name": "a", "PackageBase": "a", "Version": "1-1", "OutOfDate": 0}"#,
        );
        assert_eq!(pkg.flagged_since(), None);
        assert_eq!(pkg.flagged_date(), None);
    }
}
