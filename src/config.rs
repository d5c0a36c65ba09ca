//! Boundary configuration.
//!
//! A [`BoundaryConfig`] names the physical kind of every face, optional
//! per-variable refinements, inflow constants and open-boundary tuning.
//! It is read from JSON at setup and turned into an immutable
//! [`BcTable`] and a [`BoundaryFiller`].
//!
//! ```json
//! {
//!   "faces": { "south": "no_slip_wall", "east": "orlanski_rad_nudge",
//!              "north": "no_slip_wall", "west": "inflow" },
//!   "overrides": [ { "var": "zeta", "face": "east", "kind": "chapman" } ],
//!   "inflow": [ { "var": "xvel", "face": "west", "value": 0.2 } ],
//!   "params": { "nudge_in": 0.05 }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::boundary::{BcTable, BcType, BcVar, BoundaryFiller, OpenBoundaryParams, PhysicalBc};
use crate::error::ConfigError;
use crate::mesh::Domain;
use crate::types::{Face, LevelIndex, SideBoundaries};

/// Replacement of the translated fill rule of one variable on one face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BcOverride {
    pub var: BcVar,
    pub face: Face,
    pub kind: BcType,
}

/// Dirichlet value used by `ext_dir` for one variable on one face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InflowValue {
    pub var: BcVar,
    pub face: Face,
    pub value: f64,
}

/// Boundary configuration of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryConfig {
    /// Physical kind per face
    pub faces: SideBoundaries<PhysicalBc>,
    /// Per-variable refinements, applied in order
    #[serde(default)]
    pub overrides: Vec<BcOverride>,
    /// Inflow constants
    #[serde(default)]
    pub inflow: Vec<InflowValue>,
    /// Open-boundary tuning
    #[serde(default)]
    pub params: OpenBoundaryParams,
}

impl BoundaryConfig {
    /// Configuration with the given face kinds and default tuning.
    pub fn new(faces: SideBoundaries<PhysicalBc>) -> Self {
        Self {
            faces,
            overrides: Vec::new(),
            inflow: Vec::new(),
            params: OpenBoundaryParams::default(),
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the boundary-condition table.
    pub fn build_table(&self) -> Result<BcTable, ConfigError> {
        let mut table = BcTable::from_physical(&self.faces)?;
        for o in &self.overrides {
            table = table.with_override(o.var, o.face, o.kind)?;
        }
        for v in &self.inflow {
            table = table.with_ext_dir(v.var, v.face, v.value);
        }
        info!(
            faces = %self.faces,
            overrides = self.overrides.len(),
            inflow = self.inflow.len(),
            "boundary table built"
        );
        Ok(table)
    }

    /// Build a filler for one level.
    pub fn build_filler(&self, level: LevelIndex, domain: Domain) -> Result<BoundaryFiller, ConfigError> {
        let table = Arc::new(self.build_table()?);
        BoundaryFiller::new(level, domain, table, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, IndexBox};

    const EXAMPLE: &str = r#"{
        "faces": { "south": "no_slip_wall", "east": "orlanski_rad_nudge",
                   "north": "no_slip_wall", "west": "inflow" },
        "overrides": [ { "var": "zeta", "face": "east", "kind": "chapman" } ],
        "inflow": [ { "var": "xvel", "face": "west", "value": 0.2 } ],
        "params": { "nudge_in": 0.05 }
    }"#;

    #[test]
    fn test_parse_and_build() {
        let config = BoundaryConfig::from_json(EXAMPLE).unwrap();
        assert_eq!(config.params.nudge_in, 0.05);
        assert_eq!(config.params.nudge_out, OpenBoundaryParams::default().nudge_out);

        let table = config.build_table().unwrap();
        assert_eq!(table.kind(BcVar::Zeta, Face::East), BcType::Chapman);
        assert_eq!(table.kind(BcVar::Temp, Face::East), BcType::OrlanskiRadNudge);
        assert_eq!(table.kind(BcVar::Xvel, Face::West), BcType::ExtDir);
        assert_eq!(table.ext_dir_value(BcVar::Xvel, Face::West), 0.2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = BoundaryConfig::from_json(EXAMPLE).unwrap();
        let again = BoundaryConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let bad_kind = EXAMPLE.replace("orlanski_rad_nudge", "sponge");
        assert!(matches!(
            BoundaryConfig::from_json(&bad_kind),
            Err(ConfigError::Parse(_))
        ));
        let bad_var = EXAMPLE.replace("\"xvel\"", "\"uvel\"");
        assert!(matches!(
            BoundaryConfig::from_json(&bad_var),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unsupported_override() {
        let json = EXAMPLE.replace(
            r#""var": "zeta", "face": "east", "kind": "chapman""#,
            r#""var": "temp", "face": "east", "kind": "flather""#,
        );
        let config = BoundaryConfig::from_json(&json).unwrap();
        assert!(matches!(
            config.build_table(),
            Err(ConfigError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn test_build_filler_checks_periodicity() {
        let config = BoundaryConfig::new(SideBoundaries::new(
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
        ));
        let cells = IndexBox::from_size(8, 8, 1);
        let domain = Domain::new(cells, [1.0, 1.0]).unwrap();
        assert!(config.build_filler(LevelIndex::ZERO, domain.clone()).is_err());

        let filler = config
            .build_filler(LevelIndex::ZERO, domain.with_periodic_y(true))
            .unwrap();
        assert!(filler.table().is_periodic(Direction::Y));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            BoundaryConfig::load("/nonexistent/boundary.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
