//! Semantic view of a graph cell: environment, occupant, and token.

use crate::environment::Environment;
use crate::error::{BoardError, Result};
use crate::graph::{Cell, CellKind};
use crate::hex::Location;
use crate::objects::BoardObject;
use serde::{Deserialize, Serialize};

/// Coarse kind of a cell as stored in the board arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Space {
    Hex,
    Vertex,
    Edge,
}

impl Space {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A graph cell with its land/sea environment, occupant, and number token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedCell {
    pub index: usize,
    pub kind: CellKind,
    pub location: Location,
    /// Connected cell indices, ascending
    pub connections: Vec<usize>,
    pub environment: Environment,
    object: BoardObject,
    /// Number token, 0 for none
    pub token: u8,
}

impl ConvertedCell {
    /// Start from a graph cell with the default occupant for its kind.
    ///
    /// The environment starts as Land until resolution overwrites it.
    pub fn from_cell(cell: &Cell) -> Self {
        let mut connections = cell.neighbors.clone();
        connections.sort_unstable();
        Self {
            index: cell.index,
            kind: cell.kind,
            location: cell.location,
            connections,
            environment: Environment::Land,
            object: BoardObject::default_for(cell.kind.space()),
            token: 0,
        }
    }

    pub fn space(&self) -> Space {
        self.kind.space()
    }

    pub fn object(&self) -> BoardObject {
        self.object
    }

    /// Place an object, checking that it suits this cell's kind and environment
    pub fn place(&mut self, object: BoardObject) -> Result<()> {
        if !object.allowed_on(self.space(), self.environment) {
            return Err(BoardError::ObjectNotAllowed {
                index: self.index,
                object,
                space: self.space(),
                environment: self.environment,
            });
        }
        self.object = object;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::EdgeShape;
    use crate::objects::{Building, Terrain};

    fn hex_cell() -> Cell {
        Cell {
            index: 3,
            kind: CellKind::Hex,
            location: Location::new(108, 336),
            neighbors: vec![74, 51, 66, 58, 67, 59],
        }
    }

    #[test]
    fn test_from_cell_defaults() {
        let converted = ConvertedCell::from_cell(&hex_cell());
        assert_eq!(converted.index, 3);
        assert_eq!(converted.space(), Space::Hex);
        assert_eq!(converted.connections, vec![51, 58, 59, 66, 67, 74]);
        assert_eq!(converted.environment, Environment::Land);
        assert_eq!(converted.object(), BoardObject::Terrain(Terrain::NoTerrain));
        assert_eq!(converted.token, 0);
    }

    #[test]
    fn test_edge_defaults_to_no_building() {
        let edge = Cell {
            index: 200,
            kind: CellKind::Edge(EdgeShape::Vertical),
            location: Location::new(12, 48),
            neighbors: vec![60, 61],
        };
        let converted = ConvertedCell::from_cell(&edge);
        assert_eq!(converted.space(), Space::Edge);
        assert_eq!(converted.object(), BoardObject::Building(Building::NoBuilding));
    }

    #[test]
    fn test_place_rejects_terrain_on_sea() {
        let mut cell = ConvertedCell::from_cell(&hex_cell());
        cell.environment = Environment::Sea;

        let result = cell.place(Terrain::Forest.into());
        assert!(matches!(result, Err(BoardError::ObjectNotAllowed { index: 3, .. })));
        assert_eq!(cell.object(), BoardObject::Terrain(Terrain::NoTerrain));
    }

    #[test]
    fn test_place_accepts_valid_object() {
        let mut cell = ConvertedCell::from_cell(&hex_cell());
        cell.place(Terrain::Mountain.into()).unwrap();
        assert_eq!(cell.object(), BoardObject::Terrain(Terrain::Mountain));
    }

    #[test]
    fn test_space_codes() {
        assert_eq!(Space::Hex.code(), 0);
        assert_eq!(Space::Vertex.code(), 1);
        assert_eq!(Space::Edge.code(), 2);
    }
}
