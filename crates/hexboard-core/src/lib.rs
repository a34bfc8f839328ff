//! Hexboard - board generation for hex-grid settlement games
//!
//! This crate builds the static topology of a hex board and packs it into a
//! compact struct-of-arrays form for a rule engine or observation encoder:
//! - Pixel layout of the grid and exact integer hex geometry
//! - A deduplicated graph of hexes, vertices, and edges with stable indices
//! - Land/sea/coast environments derived from adjacency
//! - Randomized terrain and number tokens with the robber's hex left bare
//!
//! # Pipeline
//!
//! Data flows one way through the modules:
//! [`geometry`] → [`graph`] → [`environment`] → [`dock`] → [`terrain`] → [`board`].
//! [`generator`] runs the whole pipeline from a [`config::BoardConfig`].
//!
//! ```no_run
//! use hexboard_core::BoardGenerator;
//!
//! let board = BoardGenerator::standard().generate_random().unwrap();
//! let snapshot = board.data.export_snapshot(0);
//! assert_eq!(snapshot.board_objects.len(), board.data.n_tiles());
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod dock;
pub mod environment;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod graph;
pub mod hex;
pub mod objects;
pub mod terrain;

// Re-export commonly used types
pub use board::{BoardData, BoardSnapshot};
pub use cell::{ConvertedCell, Space};
pub use config::{BoardConfig, BoardLayout};
pub use dock::{DockConnections, DockOrientation, SeaRoute};
pub use environment::{Environment, EnvironmentResolver, EnvironmentTemplate};
pub use error::{BoardError, Result};
pub use generator::{BoardGenerator, GeneratedBoard};
pub use geometry::{GridSize, HexLayout, Resolution};
pub use graph::{Cell, CellKind, HexGraph};
pub use hex::{EdgeShape, Location, VertexSlot};
pub use objects::{Building, BoardObject, PlayerId, Terrain, TradeShip, UNOWNED};
pub use terrain::{HexTerrain, TerrainRandomizer, NO_TOKEN};
