//! # Secret Cache
//!
//! In-memory copy of the secrets seen by the last successful listing.

use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Secret;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// What a refresh does with cached secrets missing from the new listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// The cache becomes exactly the latest listing; deleted secrets disappear
    #[default]
    Replace,
    /// Merge the listing into the cache; deleted secrets are kept forever
    Retain,
}

impl StalePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StalePolicy::Replace => "replace",
            StalePolicy::Retain => "retain",
        }
    }
}

impl fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(StalePolicy::Replace),
            "retain" => Ok(StalePolicy::Retain),
            other => Err(format!(
                "unknown stale policy '{other}' (expected 'replace' or 'retain')"
            )),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SecretCache {
    secrets: HashMap<String, Secret>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl SecretCache {
    /// Apply a listing according to `policy`
    ///
    /// Secrets without `metadata.name` cannot be looked up and are dropped.
    /// Returns how many were dropped.
    pub(crate) fn apply(&mut self, listing: Vec<Secret>, policy: StalePolicy) -> usize {
        let total = listing.len();
        let fresh: HashMap<String, Secret> = listing
            .into_iter()
            .filter_map(|secret| Some((secret.metadata.name.clone()?, secret)))
            .collect();
        let skipped = total - fresh.len();

        match policy {
            StalePolicy::Replace => self.secrets = fresh,
            StalePolicy::Retain => self.secrets.extend(fresh),
        }
        self.refreshed_at = Some(Utc::now());
        skipped
    }

    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.secrets.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.secrets.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Secret> {
        self.secrets.get(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.secrets.len()
    }

    pub(crate) fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }
}
