//! Provenance and schema descriptors attached to emitted reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance block tying a report to the scenario that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Schema of the enclosing report.
    pub schema_version: SchemaVersion,
    /// Canonical hash of the scenario that was evaluated.
    pub scenario_hash: String,
    /// Master seed, present only for sampled reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Version map for the tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Creates provenance for `scenario_hash`, recording this crate's version.
    pub fn new(scenario_hash: impl Into<String>) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            "breach-core".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Self {
            schema_version: SchemaVersion::default(),
            scenario_hash: scenario_hash.into(),
            seed: None,
            tool_versions,
        }
    }

    /// Records the master seed of a sampled run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
