//! Terrain and number token randomization.
//!
//! Terrains and tokens are shuffled as two independent piles. The "no token"
//! sentinel is then inserted into the token pile at the position the robber's
//! starting terrain landed in the terrain pile, so exactly that hex ends up
//! without a number.

use crate::cell::{ConvertedCell, Space};
use crate::environment::Environment;
use crate::error::{BoardError, Result};
use crate::objects::Terrain;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Token value meaning "no token"
pub const NO_TOKEN: u8 = 0;

/// Standard terrain distribution for 19 land hexes
pub const STANDARD_TERRAIN_COUNTS: [(Terrain, usize); 6] = [
    (Terrain::Hill, 3),
    (Terrain::Forest, 4),
    (Terrain::Pasture, 4),
    (Terrain::Field, 4),
    (Terrain::Mountain, 3),
    (Terrain::Desert, 1),
];

/// Standard number tokens: one 2 and one 12, two of everything else but 7
pub fn standard_token_counts() -> BTreeMap<u8, usize> {
    (2..=12u8)
        .filter(|v| *v != 7)
        .map(|v| (v, if v == 2 || v == 12 { 1 } else { 2 }))
        .collect()
}

/// Terrain and token dealt to one land hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexTerrain {
    pub terrain: Terrain,
    pub token: u8,
}

/// Shuffles terrain and token piles for the land hexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRandomizer {
    terrain_counts: BTreeMap<Terrain, usize>,
    token_counts: BTreeMap<u8, usize>,
    robber_start: Terrain,
}

impl TerrainRandomizer {
    /// Checks that the two piles fit together:
    /// - the robber's terrain appears exactly once
    /// - there is one token fewer than terrains
    /// - no terrain is `NoTerrain` and no token is 0
    pub fn new(
        terrain_counts: BTreeMap<Terrain, usize>,
        token_counts: BTreeMap<u8, usize>,
        robber_start: Terrain,
    ) -> Result<Self> {
        if terrain_counts.get(&Terrain::NoTerrain).copied().unwrap_or(0) > 0 {
            return Err(BoardError::InvalidTerrainCounts(
                "NoTerrain cannot be dealt to a land hex".into(),
            ));
        }
        if token_counts.get(&NO_TOKEN).copied().unwrap_or(0) > 0 {
            return Err(BoardError::InvalidTerrainCounts(
                "token value 0 is reserved for the robber's hex".into(),
            ));
        }
        let robber_count = terrain_counts.get(&robber_start).copied().unwrap_or(0);
        if robber_count != 1 {
            return Err(BoardError::InvalidTerrainCounts(format!(
                "robber start {:?} must appear once, found {}",
                robber_start, robber_count
            )));
        }
        let terrains: usize = terrain_counts.values().sum();
        let tokens: usize = token_counts.values().sum();
        if tokens + 1 != terrains {
            return Err(BoardError::InvalidTerrainCounts(format!(
                "{} tokens for {} terrains, expected {}",
                tokens,
                terrains,
                terrains - 1
            )));
        }

        Ok(Self {
            terrain_counts,
            token_counts,
            robber_start,
        })
    }

    /// The 19-hex base game distribution with the robber on the desert
    pub fn standard() -> Self {
        Self {
            terrain_counts: STANDARD_TERRAIN_COUNTS.into_iter().collect(),
            token_counts: standard_token_counts(),
            robber_start: Terrain::Desert,
        }
    }

    /// Number of land hexes this distribution covers
    pub fn tile_count(&self) -> usize {
        self.terrain_counts.values().sum()
    }

    pub fn robber_start(&self) -> Terrain {
        self.robber_start
    }

    /// Unshuffled terrain pile
    pub fn terrain_pile(&self) -> Vec<Terrain> {
        self.terrain_counts
            .iter()
            .flat_map(|(terrain, count)| std::iter::repeat(*terrain).take(*count))
            .collect()
    }

    /// Unshuffled token pile, without the sentinel
    pub fn token_pile(&self) -> Vec<u8> {
        self.token_counts
            .iter()
            .flat_map(|(value, count)| std::iter::repeat(*value).take(*count))
            .collect()
    }

    /// Shuffle both piles and pair them up
    pub fn randomize<R: Rng>(&self, rng: &mut R) -> Vec<HexTerrain> {
        let mut terrains = self.terrain_pile();
        let mut tokens = self.token_pile();
        terrains.shuffle(rng);
        tokens.shuffle(rng);
        self.deal(terrains, tokens)
    }

    /// Insert the sentinel where the robber's terrain is and zip the piles.
    ///
    /// Both piles come from this randomizer, whose counts were validated on
    /// construction, so the robber's terrain is present and the lengths match.
    fn deal(&self, terrains: Vec<Terrain>, mut tokens: Vec<u8>) -> Vec<HexTerrain> {
        let position = terrains.iter().position(|t| *t == self.robber_start);
        debug_assert!(position.is_some(), "robber terrain missing from pile");
        if let Some(position) = position {
            tokens.insert(position, NO_TOKEN);
        }
        debug_assert_eq!(terrains.len(), tokens.len(), "terrain and token piles differ");
        terrains
            .into_iter()
            .zip(tokens)
            .map(|(terrain, token)| HexTerrain { terrain, token })
            .collect()
    }

    /// Deal a fresh shuffle onto the land hexes in index order.
    ///
    /// Returns the index of the hex that received the robber's terrain.
    pub fn apply<R: Rng>(&self, cells: &mut [ConvertedCell], rng: &mut R) -> Result<usize> {
        let land: Vec<usize> = cells
            .iter()
            .filter(|c| c.space() == Space::Hex && c.environment == Environment::Land)
            .map(|c| c.index)
            .collect();
        if land.len() != self.tile_count() {
            return Err(BoardError::LandHexMismatch {
                expected: self.tile_count(),
                found: land.len(),
            });
        }

        let mut robber = land[0];
        for (index, dealt) in land.into_iter().zip(self.randomize(rng)) {
            let cell = &mut cells[index];
            cell.place(dealt.terrain.into())?;
            cell.token = dealt.token;
            if dealt.terrain == self.robber_start {
                robber = index;
            }
        }
        Ok(robber)
    }
}

impl Default for TerrainRandomizer {
    fn default() -> Self {
        Self::standard()
    }
}
