//! Board generation parameters.
//!
//! [`BoardConfig`] carries the construction inputs and the static layout
//! tables. Every field has a default, so a JSON config only needs to name
//! what it changes.

use crate::dock::SeaRoute;
use crate::environment::EnvironmentTemplate;
use crate::error::Result;
use crate::geometry::{GridSize, Resolution};
use crate::objects::Terrain;
use crate::terrain::{standard_token_counts, TerrainRandomizer, STANDARD_TERRAIN_COUNTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static layout data: which hexes are land, where ships dock, and what
/// gets dealt onto the land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub environments: EnvironmentTemplate,
    pub sea_routes: Vec<SeaRoute>,
    pub terrain_counts: BTreeMap<Terrain, usize>,
    pub token_counts: BTreeMap<u8, usize>,
    pub robber_start: Terrain,
}

impl BoardLayout {
    /// The 19-hex island with six sea routes
    pub fn standard() -> Self {
        Self {
            environments: EnvironmentTemplate::standard(),
            sea_routes: SeaRoute::standard_routes(),
            terrain_counts: STANDARD_TERRAIN_COUNTS.into_iter().collect(),
            token_counts: standard_token_counts(),
            robber_start: Terrain::Desert,
        }
    }

    /// Validated randomizer for this layout's terrain and token piles
    pub fn terrain_randomizer(&self) -> Result<TerrainRandomizer> {
        TerrainRandomizer::new(
            self.terrain_counts.clone(),
            self.token_counts.clone(),
            self.robber_start,
        )
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything needed to generate one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub resolution: Resolution,
    pub grid: GridSize,
    /// Percentage of each dimension kept clear, 0 to 50
    pub margin: u32,
    pub layout: BoardLayout,
}

impl BoardConfig {
    /// Parse a config, filling missing fields from [`Default`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            grid: GridSize::default(),
            margin: 5,
            layout: BoardLayout::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_standard_board() {
        let config = BoardConfig::default();
        assert_eq!(config.resolution, Resolution::new(1920, 1080));
        assert_eq!(config.grid, GridSize::new(7, 7));
        assert_eq!(config.margin, 5);
        assert_eq!(config.layout.sea_routes.len(), 6);
        assert_eq!(config.layout.environments.land_count(), 19);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            BoardConfig::from_json(r#"{"margin": 10, "grid": {"rows": 3, "columns": 4}}"#)
                .unwrap();
        assert_eq!(config.margin, 10);
        assert_eq!(config.grid, GridSize::new(3, 4));
        assert_eq!(config.resolution, Resolution::default());
        assert_eq!(config.layout, BoardLayout::standard());
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "layout": {
                "environments": [["Land", "Sea"], ["Land", "Land"]],
                "sea_routes": [],
                "terrain_counts": {"Hill": 1, "Forest": 1, "Desert": 1},
                "token_counts": {"6": 1, "8": 1}
            }
        }"#;
        let config = BoardConfig::from_json(json).unwrap();
        let layout = &config.layout;
        assert_eq!(layout.environments.rows()[0], vec![Environment::Land, Environment::Sea]);
        assert!(layout.sea_routes.is_empty());
        assert_eq!(layout.terrain_counts.get(&Terrain::Forest), Some(&1));
        assert_eq!(layout.token_counts.get(&8), Some(&1));
        assert_eq!(layout.robber_start, Terrain::Desert);
        assert_eq!(layout.terrain_randomizer().unwrap().tile_count(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let config = BoardConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(BoardConfig::from_json(r#"{"margin": "wide"}"#).is_err());
    }

    #[test]
    fn test_standard_randomizer_matches() {
        let randomizer = BoardLayout::standard().terrain_randomizer().unwrap();
        assert_eq!(randomizer, TerrainRandomizer::standard());
    }
}
