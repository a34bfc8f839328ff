//! Pixel coordinates for hexes, vertices, and edges.
//!
//! The grid uses pointy-top hexes in offset rows: odd rows are shifted right
//! by half a hex. Each hex is laid out on a lattice of 9 row positions (steps
//! of `size / 8`) and 5 column positions (steps of `size / 4`):
//! - vertices sit on rows 0, 2, 6, 8
//! - edge midpoints sit on rows 1, 4, 7
//! - the center sits on row 4, column 2
//!
//! Because hex sizes are multiples of 8, all of these are exact integers, and
//! two hexes sharing a corner compute the same [`Location`] for it.

use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
///
/// Ordered by `y` first, then `x`, which is the reading order used to index cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Location {
    pub y: i32,
    pub x: i32,
}

impl Location {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

/// A hex's vertex connection slots in reading order (top to bottom, left to right).
///
/// A hex's connections are sorted by index, and vertex indices follow reading
/// order, so slot `i` of a hex's connection list is always this vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexSlot {
    North,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    South,
}

impl VertexSlot {
    pub const ALL: [VertexSlot; 6] = [
        VertexSlot::North,
        VertexSlot::NorthWest,
        VertexSlot::NorthEast,
        VertexSlot::SouthWest,
        VertexSlot::SouthEast,
        VertexSlot::South,
    ];

    /// Position in a hex's sorted connection list
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Geometric sub-type of an edge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeShape {
    /// `|`
    Vertical,
    SlopedRight,
    SlopedLeft,
}

impl EdgeShape {
    /// Classify an edge from its two endpoint vertices.
    ///
    /// Equal x is vertical. Otherwise the edge is sloped-right when
    /// `y1 - y2` and `x1 - x2` have the same sign, sloped-left when they differ.
    /// The result does not depend on endpoint order.
    pub fn classify(a: Location, b: Location) -> Self {
        if a.x == b.x {
            EdgeShape::Vertical
        } else if (a.y - b.y).signum() == (a.x - b.x).signum() {
            EdgeShape::SlopedRight
        } else {
            EdgeShape::SlopedLeft
        }
    }
}

/// The six vertices and six edge midpoints of one hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexFootprint {
    pub center: Location,
    /// Clockwise from the top: N, NE, SE, S, SW, NW
    pub vertices: [Location; 6],
    /// `edges[i]` joins `vertices[i - 1]` and `vertices[i]`
    pub edges: [Location; 6],
}

// (row step, column step) lattice positions
const VERTEX_STEPS: [(usize, usize); 6] = [(0, 2), (2, 4), (6, 4), (8, 2), (6, 0), (2, 0)];
const EDGE_STEPS: [(usize, usize); 6] = [(1, 1), (1, 3), (4, 4), (7, 3), (7, 1), (4, 0)];

impl HexFootprint {
    /// Footprint of a hex centered at `center` with the given size
    pub fn new(center: Location, hex_size: i32) -> Self {
        let ys: [i32; 9] = std::array::from_fn(|step| {
            center.y - hex_size / 2 + step as i32 * hex_size / 8
        });
        let xs: [i32; 5] = std::array::from_fn(|step| {
            center.x - hex_size / 2 + step as i32 * hex_size / 4
        });
        let at = |(iy, ix): (usize, usize)| Location::new(ys[iy], xs[ix]);

        Self {
            center,
            vertices: VERTEX_STEPS.map(at),
            edges: EDGE_STEPS.map(at),
        }
    }

    /// The two vertices joined by `edges[i]`
    pub fn edge_endpoints(&self, i: usize) -> [Location; 2] {
        [self.vertices[(i + 5) % 6], self.vertices[i]]
    }
}

/// Center of the hex at `(row, column)`
pub fn hex_center(
    hex_size: i32,
    top_buffer: i32,
    left_buffer: i32,
    row: u32,
    column: u32,
) -> Location {
    let row_shift = (row % 2) as i32 * hex_size / 2;
    Location::new(
        top_buffer + hex_size / 2 + row as i32 * hex_size * 3 / 4,
        left_buffer + hex_size / 2 + row_shift + column as i32 * hex_size,
    )
}
