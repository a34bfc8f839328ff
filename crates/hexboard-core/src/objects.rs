//! Objects that can occupy a board cell.
//!
//! Each family is numbered from 0, starting with its "none" member. These
//! codes are what [`BoardData`](crate::board::BoardData) stores; the cell's
//! space kind tells a consumer which family a code belongs to.

use crate::cell::Space;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};

/// Player identifier
pub type PlayerId = u8;

/// Owner value for cells nobody owns
pub const UNOWNED: PlayerId = u8::MAX;

/// Terrain of a land hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Terrain {
    NoTerrain,
    /// Produces brick
    Hill,
    /// Produces lumber
    Forest,
    /// Produces wool
    Pasture,
    /// Produces grain
    Field,
    /// Produces ore
    Mountain,
    /// Produces nothing; the robber starts here
    Desert,
}

/// Trade ship standing on a sea hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TradeShip {
    NoTradeShip,
    BrickShip,
    LumberShip,
    WoolShip,
    GrainShip,
    OreShip,
    /// 3:1 for any resource
    AllShip,
}

/// Player building on a vertex or edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Building {
    NoBuilding,
    Settlement,
    City,
    Road,
}

/// Anything that can occupy a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardObject {
    Terrain(Terrain),
    TradeShip(TradeShip),
    Building(Building),
}

impl BoardObject {
    /// Code stored in the board's object array
    pub fn code(&self) -> u8 {
        match self {
            BoardObject::Terrain(t) => *t as u8,
            BoardObject::TradeShip(s) => *s as u8,
            BoardObject::Building(b) => *b as u8,
        }
    }

    /// Default occupant of a freshly built cell
    pub fn default_for(space: Space) -> Self {
        match space {
            Space::Hex => BoardObject::Terrain(Terrain::NoTerrain),
            Space::Vertex | Space::Edge => BoardObject::Building(Building::NoBuilding),
        }
    }

    /// Whether this object may stand on a cell of the given kind and environment
    pub fn allowed_on(&self, space: Space, environment: Environment) -> bool {
        match (self, space) {
            (BoardObject::Terrain(Terrain::NoTerrain), Space::Hex) => true,
            (BoardObject::Terrain(_), Space::Hex) => environment == Environment::Land,
            (BoardObject::TradeShip(TradeShip::NoTradeShip), Space::Hex) => true,
            (BoardObject::TradeShip(_), Space::Hex) => environment == Environment::Sea,
            (BoardObject::Building(Building::NoBuilding), Space::Vertex | Space::Edge) => true,
            (BoardObject::Building(Building::Settlement | Building::City), Space::Vertex)
            | (BoardObject::Building(Building::Road), Space::Edge) => {
                environment != Environment::Sea
            }
            _ => false,
        }
    }
}

impl From<Terrain> for BoardObject {
    fn from(terrain: Terrain) -> Self {
        BoardObject::Terrain(terrain)
    }
}

impl From<TradeShip> for BoardObject {
    fn from(ship: TradeShip) -> Self {
        BoardObject::TradeShip(ship)
    }
}

impl From<Building> for BoardObject {
    fn from(building: Building) -> Self {
        BoardObject::Building(building)
    }
}
