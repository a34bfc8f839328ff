//! Dock orientations and sea trade routes.
//!
//! A trade ship sits on a sea hex and docks on two of that hex's vertices.
//! Sea routes rewrite the connections of their hexes down to those two
//! vertices, so a rule engine following a ship's connections reaches exactly
//! the settlements that may use it.

use crate::cell::{ConvertedCell, Space};
use crate::error::{BoardError, Result};
use crate::hex::VertexSlot;
use crate::objects::TradeShip;
use serde::{Deserialize, Serialize};

/// Two of a hex's six vertex connection slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DockConnections {
    first: VertexSlot,
    second: VertexSlot,
}

impl DockConnections {
    /// Both indices must be in `0..6`, in [`VertexSlot`] reading order
    pub fn new(first: usize, second: usize) -> Result<Self> {
        match (VertexSlot::from_index(first), VertexSlot::from_index(second)) {
            (Some(first), Some(second)) => Ok(Self { first, second }),
            _ => Err(BoardError::InvalidDockConnections(first, second)),
        }
    }

    const fn from_slots(first: VertexSlot, second: VertexSlot) -> Self {
        Self { first, second }
    }

    pub fn slots(&self) -> [VertexSlot; 2] {
        [self.first, self.second]
    }

    pub fn indices(&self) -> [usize; 2] {
        [self.first.index(), self.second.index()]
    }
}

/// Side of a sea hex a trade ship docks on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockOrientation {
    NW,
    NE,
    W,
    E,
    SW,
    SE,
}

impl DockOrientation {
    pub const ALL: [DockOrientation; 6] = [
        DockOrientation::NW,
        DockOrientation::NE,
        DockOrientation::W,
        DockOrientation::E,
        DockOrientation::SW,
        DockOrientation::SE,
    ];

    pub fn connections(self) -> DockConnections {
        use VertexSlot::*;
        match self {
            DockOrientation::NW => DockConnections::from_slots(North, NorthWest),
            DockOrientation::NE => DockConnections::from_slots(North, NorthEast),
            DockOrientation::W => DockConnections::from_slots(NorthWest, SouthWest),
            DockOrientation::E => DockConnections::from_slots(NorthEast, SouthEast),
            DockOrientation::SW => DockConnections::from_slots(South, SouthWest),
            DockOrientation::SE => DockConnections::from_slots(South, SouthEast),
        }
    }

    /// Orientation docking on exactly these two slots, in either order
    pub fn from_connections(connections: DockConnections) -> Option<Self> {
        let mut wanted = connections.indices();
        wanted.sort_unstable();
        Self::ALL.into_iter().find(|o| {
            let mut own = o.connections().indices();
            own.sort_unstable();
            own == wanted
        })
    }

    /// Two-line sketch of the dock's position on the hex
    pub fn glyph(self) -> &'static str {
        match self {
            DockOrientation::NW => "\\|.\n...",
            DockOrientation::NE => ".|/\n...",
            DockOrientation::W => "\\..\n/..",
            DockOrientation::E => "../\n..\\",
            DockOrientation::SW => "...\n/|.",
            DockOrientation::SE => "...\n.|\\",
        }
    }
}

/// Three neighboring sea hexes sharing a dock orientation, with their ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaRoute {
    pub hexes: [usize; 3],
    pub orientation: DockOrientation,
    pub ships: [TradeShip; 3],
}

impl SeaRoute {
    /// The six routes around the standard 7x7 island
    pub fn standard_routes() -> Vec<SeaRoute> {
        use TradeShip::*;
        vec![
            SeaRoute {
                hexes: [2, 3, 8],
                orientation: DockOrientation::SE,
                ships: [AllShip, NoTradeShip, GrainShip],
            },
            SeaRoute {
                hexes: [4, 5, 12],
                orientation: DockOrientation::SW,
                ships: [NoTradeShip, OreShip, NoTradeShip],
            },
            SeaRoute {
                hexes: [20, 27, 34],
                orientation: DockOrientation::W,
                ships: [AllShip, NoTradeShip, WoolShip],
            },
            SeaRoute {
                hexes: [40, 46, 47],
                orientation: DockOrientation::NW,
                ships: [NoTradeShip, AllShip, NoTradeShip],
            },
            SeaRoute {
                hexes: [36, 44, 45],
                orientation: DockOrientation::NE,
                ships: [AllShip, NoTradeShip, BrickShip],
            },
            SeaRoute {
                hexes: [15, 21, 29],
                orientation: DockOrientation::E,
                ships: [NoTradeShip, LumberShip, NoTradeShip],
            },
        ]
    }
}

/// Rewrite each route hex's connections to its two dock vertices and place its ship.
///
/// Vertices keep listing the hex, so adjacency is one-way for these cells.
pub fn apply_sea_routes(cells: &mut [ConvertedCell], routes: &[SeaRoute]) -> Result<()> {
    for route in routes {
        let [a, b] = route.orientation.connections().indices();
        for (&index, &ship) in route.hexes.iter().zip(route.ships.iter()) {
            let cell = cells
                .get_mut(index)
                .filter(|c| c.space() == Space::Hex && c.connections.len() == 6)
                .ok_or(BoardError::InvalidSeaRoute(index))?;

            cell.place(ship.into())?;
            let mut docked = [cell.connections[a], cell.connections[b]];
            docked.sort_unstable();
            cell.connections = docked.to_vec();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Environment, EnvironmentResolver, EnvironmentTemplate};
    use crate::geometry::{GridSize, HexLayout, Resolution};
    use crate::graph::HexGraph;
    use crate::objects::BoardObject;

    fn standard_cells() -> Vec<ConvertedCell> {
        let layout =
            HexLayout::compute(Resolution::new(1920, 1080), GridSize::new(7, 7), 5).unwrap();
        let graph = HexGraph::build(&layout);
        let mut cells: Vec<ConvertedCell> =
            graph.cells().iter().map(ConvertedCell::from_cell).collect();
        EnvironmentResolver::new(&EnvironmentTemplate::standard())
            .resolve(&mut cells, GridSize::new(7, 7))
            .unwrap();
        cells
    }

    #[test]
    fn test_dock_connections_validation() {
        assert_eq!(
            DockConnections::new(6, 1),
            Err(BoardError::InvalidDockConnections(6, 1))
        );
        let ok = DockConnections::new(0, 5).unwrap();
        assert_eq!(ok.slots(), [VertexSlot::North, VertexSlot::South]);
    }

    #[test]
    fn test_orientations_use_valid_slots() {
        for orientation in DockOrientation::ALL {
            let [a, b] = orientation.connections().indices();
            assert!(a < 6 && b < 6 && a != b);
            assert!(DockConnections::new(a, b).is_ok());
        }
    }

    #[test]
    fn test_from_connections() {
        let conns = DockConnections::new(4, 5).unwrap();
        assert_eq!(DockOrientation::from_connections(conns), Some(DockOrientation::SE));
        let conns = DockConnections::new(1, 3).unwrap();
        assert_eq!(DockOrientation::from_connections(conns), Some(DockOrientation::W));
        // North and South are not adjacent
        let conns = DockConnections::new(0, 5).unwrap();
        assert_eq!(DockOrientation::from_connections(conns), None);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<_> =
            DockOrientation::ALL.iter().map(|o| o.glyph()).collect();
        assert_eq!(glyphs.len(), 6);
    }

    #[test]
    fn test_standard_routes_place_nine_ships() {
        let ships: Vec<TradeShip> = SeaRoute::standard_routes()
            .iter()
            .flat_map(|r| r.ships)
            .filter(|s| *s != TradeShip::NoTradeShip)
            .collect();
        assert_eq!(ships.len(), 9);
        assert_eq!(ships.iter().filter(|s| **s == TradeShip::AllShip).count(), 4);
    }

    #[test]
    fn test_apply_rewrites_connections() {
        let mut cells = standard_cells();
        let before = cells[2].connections.clone();
        assert_eq!(before, vec![51, 58, 59, 66, 67, 74]);

        apply_sea_routes(&mut cells, &SeaRoute::standard_routes()).unwrap();

        // South-east and south vertices
        assert_eq!(cells[2].connections, vec![67, 74]);
        assert_eq!(cells[2].object(), BoardObject::TradeShip(TradeShip::AllShip));
        assert_eq!(cells[8].object(), BoardObject::TradeShip(TradeShip::GrainShip));
        for route in SeaRoute::standard_routes() {
            for hex in route.hexes {
                assert_eq!(cells[hex].connections.len(), 2);
            }
        }
    }

    #[test]
    fn test_docks_touch_coast() {
        let mut cells = standard_cells();
        apply_sea_routes(&mut cells, &SeaRoute::standard_routes()).unwrap();
        for route in SeaRoute::standard_routes() {
            for hex in route.hexes {
                for &v in &cells[hex].connections {
                    assert_eq!(cells[v].environment, Environment::Coast);
                }
            }
        }
    }

    #[test]
    fn test_route_on_land_hex_fails() {
        let mut cells = standard_cells();
        // Hex 24 is the center of the island
        let route = SeaRoute {
            hexes: [24, 2, 3],
            orientation: DockOrientation::NW,
            ships: [TradeShip::OreShip, TradeShip::NoTradeShip, TradeShip::NoTradeShip],
        };
        let result = apply_sea_routes(&mut cells, &[route]);
        assert!(matches!(result, Err(BoardError::ObjectNotAllowed { index: 24, .. })));
    }

    #[test]
    fn test_route_on_vertex_fails() {
        let mut cells = standard_cells();
        let route = SeaRoute {
            hexes: [60, 2, 3],
            orientation: DockOrientation::NW,
            ships: [TradeShip::NoTradeShip; 3],
        };
        assert_eq!(
            apply_sea_routes(&mut cells, &[route]),
            Err(BoardError::InvalidSeaRoute(60))
        );
    }
}
