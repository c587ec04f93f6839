//! Repository database read through libalpm

use ::alpm::{Alpm, Db, SigLevel};

use super::{InstalledArtifact, PackageDb};
use crate::error::{AurError, Result};

const ROOT: &str = "/";
const DB_PATH: &str = "/var/lib/pacman/";

fn db_error(err: impl std::fmt::Display) -> AurError {
    AurError::PackageDb {
        message: err.to_string(),
    }
}

/// Package database backed by libalpm
pub struct AlpmDb {
    handle: Alpm,
    db_name: String,
}

impl AlpmDb {
    /// Register the sync database `db_name` with a fresh libalpm handle
    pub fn open(db_name: &str) -> Result<Self> {
        let mut handle = Alpm::new(ROOT, DB_PATH).map_err(db_error)?;
        handle
            .register_syncdb(db_name, SigLevel::NONE)
            .map_err(db_error)?;
        Ok(Self {
            handle,
            db_name: db_name.to_string(),
        })
    }

    fn db(&self) -> Result<&Db> {
        self.handle
            .syncdbs()
            .iter()
            .find(|db| db.name() == self.db_name)
            .ok_or_else(|| db_error(format!("database '{}' is not registered", self.db_name)))
    }
}

impl PackageDb for AlpmDb {
    fn version(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .db()?
            .pkg(name)
            .ok()
            .map(|pkg| pkg.version().as_str().to_string()))
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .db()?
            .pkgs()
            .iter()
            .map(|pkg| pkg.name().to_string())
            .collect())
    }

    fn artifacts(&self) -> Result<Vec<InstalledArtifact>> {
        Ok(self
            .db()?
            .pkgs()
            .iter()
            .map(|pkg| InstalledArtifact {
                name: pkg.name().to_string(),
                base: pkg.base().unwrap_or(pkg.name()).to_string(),
                filename: pkg.filename().unwrap_or_default().to_string(),
            })
            .collect())
    }
}
