//! Errors raised while building a board.
//!
//! Every variant is a construction or configuration failure: no partial board
//! is ever returned. Mutating a finished [`BoardData`](crate::board::BoardData)
//! with a bad index is a programming defect and panics instead.

use crate::cell::Space;
use crate::environment::Environment;
use crate::objects::BoardObject;
use thiserror::Error;

/// Errors that can occur while generating a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Resolution {width}x{height} must be positive and a multiple of 8")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Resolution {width}x{height} exceeds the {max} pixel limit")]
    ResolutionTooLarge { width: u32, height: u32, max: u32 },

    #[error("Margin {0} must be between 0 and 50")]
    InvalidMargin(u32),

    #[error("Grid dimensions {rows}x{columns} must both be positive")]
    InvalidGridDimensions { rows: u32, columns: u32 },

    #[error("Resolution {width}x{height} is too small for a {rows}x{columns} grid")]
    ResolutionTooSmall {
        width: u32,
        height: u32,
        rows: u32,
        columns: u32,
    },

    #[error("Dock connections ({0}, {1}) must both be between 0 and 5")]
    InvalidDockConnections(usize, usize),

    #[error("Environment template is {found_rows}x{found_columns}, grid is {rows}x{columns}")]
    TemplateMismatch {
        rows: u32,
        columns: u32,
        found_rows: usize,
        found_columns: usize,
    },

    #[error("Invalid terrain counts: {0}")]
    InvalidTerrainCounts(String),

    #[error("Template has {found} land hexes but {expected} terrain tiles are configured")]
    LandHexMismatch { expected: usize, found: usize },

    #[error("Sea route references cell {0}, which is not a hex with six connections")]
    InvalidSeaRoute(usize),

    #[error("{object:?} cannot be placed on {space:?} cell {index} ({environment:?})")]
    ObjectNotAllowed {
        index: usize,
        object: BoardObject,
        space: Space,
        environment: Environment,
    },

    #[error("Board has {0} cells, more than a u16 connection table can index")]
    TooManyCells(usize),

    #[error("Robber start {index} is outside the board's {n_tiles} cells")]
    RobberOutOfRange { index: usize, n_tiles: usize },

    #[error("Cell {0} has no connections")]
    IsolatedCell(usize),
}

/// Result alias for board generation
pub type Result<T> = std::result::Result<T, BoardError>;
