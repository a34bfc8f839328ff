//! Struct-of-arrays board storage.
//!
//! [`BoardData`] keeps one array per cell attribute, all indexed by cell
//! index, plus a connection table padded to a uniform row width. This is the
//! only part of the board a rule engine touches once a game is running.
//!
//! The design assumes a single writer: mutations are plain slot writes with
//! "last write wins" semantics and no internal locking. Passing an index
//! outside the board is a programming error and panics.

use crate::cell::{ConvertedCell, Space};
use crate::environment::Environment;
use crate::error::{BoardError, Result};
use crate::objects::{BoardObject, PlayerId, UNOWNED};
use serde::{Deserialize, Serialize};

/// Read-only bundle of the board's dynamic arrays for an observation encoder.
///
/// Field names and order are stable; array lengths always equal the board's
/// cell count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board_objects: Vec<u8>,
    pub board_owners: Vec<u8>,
    pub board_tokens: Vec<u8>,
    pub board_robber: u16,
    pub board_last: u16,
}

/// Packed board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    n_tiles: usize,
    space: Vec<Space>,
    environment: Vec<Environment>,
    objects: Vec<u8>,
    owner: Vec<PlayerId>,
    tokens: Vec<u8>,
    /// Row-major, `n_tiles * connection_width` entries
    connections: Vec<u16>,
    connection_width: usize,
    robber: u16,
    last_placement: u16,
}

/// Pad every row to the longest row's width by repeating its last entry
pub fn fill_connections(rows: &[Vec<usize>]) -> Result<(Vec<usize>, usize)> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut table = Vec::with_capacity(rows.len() * width);
    for (index, row) in rows.iter().enumerate() {
        let last = *row.last().ok_or(BoardError::IsolatedCell(index))?;
        table.extend_from_slice(row);
        table.extend(std::iter::repeat(last).take(width - row.len()));
    }
    Ok((table, width))
}

impl BoardData {
    /// Pack finalized cells, given in index order.
    ///
    /// `robber` is the hex the robber starts on.
    pub fn new(cells: &[ConvertedCell], robber: usize) -> Result<Self> {
        let n_tiles = cells.len();
        if n_tiles > u16::MAX as usize {
            return Err(BoardError::TooManyCells(n_tiles));
        }
        if robber >= n_tiles {
            return Err(BoardError::RobberOutOfRange {
                index: robber,
                n_tiles,
            });
        }

        let rows: Vec<Vec<usize>> = cells.iter().map(|c| c.connections.clone()).collect();
        let (table, connection_width) = fill_connections(&rows)?;

        Ok(Self {
            n_tiles,
            space: cells.iter().map(|c| c.space()).collect(),
            environment: cells.iter().map(|c| c.environment).collect(),
            objects: cells.iter().map(|c| c.object().code()).collect(),
            owner: vec![UNOWNED; n_tiles],
            tokens: cells.iter().map(|c| c.token).collect(),
            connections: table.into_iter().map(|c| c as u16).collect(),
            connection_width,
            robber: robber as u16,
            last_placement: 0,
        })
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.n_tiles,
            "cell index {} out of range for board with {} cells",
            index,
            self.n_tiles
        );
    }

    // ==================== Query Methods ====================

    /// Number of cells
    pub fn n_tiles(&self) -> usize {
        self.n_tiles
    }

    /// Width of every connection row
    pub fn connection_width(&self) -> usize {
        self.connection_width
    }

    pub fn space(&self, index: usize) -> Space {
        self.space[index]
    }

    pub fn environment(&self, index: usize) -> Environment {
        self.environment[index]
    }

    pub fn object(&self, index: usize) -> u8 {
        self.objects[index]
    }

    pub fn owner(&self, index: usize) -> Option<PlayerId> {
        Some(self.owner[index]).filter(|o| *o != UNOWNED)
    }

    pub fn token(&self, index: usize) -> u8 {
        self.tokens[index]
    }

    /// Static per-cell kinds
    pub fn spaces(&self) -> &[Space] {
        &self.space
    }

    /// Static per-cell environments
    pub fn environments(&self) -> &[Environment] {
        &self.environment
    }

    /// Padded connection row of a cell
    pub fn connections(&self, index: usize) -> &[u16] {
        self.check_index(index);
        let start = index * self.connection_width;
        &self.connections[start..start + self.connection_width]
    }

    /// Real neighbors of a cell, with row padding stripped
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self
            .connections(index)
            .iter()
            .map(|&c| c as usize)
            .collect();
        neighbors.dedup();
        neighbors
    }

    pub fn robber(&self) -> usize {
        self.robber as usize
    }

    pub fn last_placement(&self) -> usize {
        self.last_placement as usize
    }

    // ==================== Mutation Methods ====================

    /// Write an object and its owner; legality is the caller's concern
    pub fn place_object(&mut self, index: usize, object: BoardObject, owner: PlayerId) {
        self.check_index(index);
        self.objects[index] = object.code();
        self.owner[index] = owner;
    }

    pub fn move_robber(&mut self, index: usize) {
        self.check_index(index);
        self.robber = index as u16;
    }

    pub fn record_last_placement(&mut self, index: usize) {
        self.check_index(index);
        self.last_placement = index as u16;
    }

    /// Export the dynamic arrays for an observation encoder.
    ///
    /// Every board field is public information, so the view is the same for
    /// every player. The static space and environment arrays are left out;
    /// consumers read them once through [`spaces`](Self::spaces) and
    /// [`environments`](Self::environments).
    pub fn export_snapshot(&self, _for_player: PlayerId) -> BoardSnapshot {
        BoardSnapshot {
            board_objects: self.objects.clone(),
            board_owners: self.owner.clone(),
            board_tokens: self.tokens.clone(),
            board_robber: self.robber,
            board_last: self.last_placement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Cell, CellKind};
    use crate::hex::{EdgeShape, Location};
    use crate::objects::{Building, Terrain};

    /// One hex, two of its vertices, and the edge between them
    fn tiny_cells() -> Vec<ConvertedCell> {
        let cells = [
            Cell {
                index: 0,
                kind: CellKind::Hex,
                location: Location::new(24, 24),
                neighbors: vec![1, 2],
            },
            Cell {
                index: 1,
                kind: CellKind::Vertex,
                location: Location::new(0, 24),
                neighbors: vec![0, 3],
            },
            Cell {
                index: 2,
                kind: CellKind::Vertex,
                location: Location::new(12, 48),
                neighbors: vec![0, 3],
            },
            Cell {
                index: 3,
                kind: CellKind::Edge(EdgeShape::SlopedLeft),
                location: Location::new(6, 36),
                neighbors: vec![1, 2],
            },
        ];
        let mut converted: Vec<ConvertedCell> =
            cells.iter().map(ConvertedCell::from_cell).collect();
        converted[0].place(Terrain::Field.into()).unwrap();
        converted[0].token = 9;
        converted
    }

    #[test]
    fn test_fill_connections_repeats_last() {
        let rows = vec![vec![1, 2, 3, 4, 5, 6], vec![0, 7, 8], vec![2, 9]];
        let (table, width) = fill_connections(&rows).unwrap();
        assert_eq!(width, 6);
        assert_eq!(&table[6..12], &[0, 7, 8, 8, 8, 8]);
        assert_eq!(&table[12..18], &[2, 9, 9, 9, 9, 9]);
    }

    #[test]
    fn test_fill_connections_rejects_empty_row() {
        let rows = vec![vec![1], vec![]];
        assert_eq!(fill_connections(&rows), Err(BoardError::IsolatedCell(1)));
    }

    #[test]
    fn test_robber_out_of_range_is_an_error() {
        assert_eq!(
            BoardData::new(&tiny_cells(), 4),
            Err(BoardError::RobberOutOfRange {
                index: 4,
                n_tiles: 4
            })
        );
    }

    #[test]
    fn test_arrays_match_cells() {
        let board = BoardData::new(&tiny_cells(), 0).unwrap();
        assert_eq!(board.n_tiles(), 4);
        assert_eq!(
            board.spaces(),
            &[Space::Hex, Space::Vertex, Space::Vertex, Space::Edge]
        );
        assert_eq!(board.environments().len(), 4);
        assert_eq!(board.object(0), Terrain::Field as u8);
        assert_eq!(board.token(0), 9);
        assert_eq!(board.owner(1), None);
        assert_eq!(board.connection_width(), 2);
        assert_eq!(board.neighbors(3), vec![1, 2]);
    }

    #[test]
    fn test_place_object_sets_owner() {
        let mut board = BoardData::new(&tiny_cells(), 0).unwrap();
        board.place_object(1, Building::Settlement.into(), 2);
        assert_eq!(board.object(1), Building::Settlement as u8);
        assert_eq!(board.owner(1), Some(2));
    }

    #[test]
    fn test_scalars() {
        let mut board = BoardData::new(&tiny_cells(), 0).unwrap();
        assert_eq!(board.robber(), 0);
        assert_eq!(board.last_placement(), 0);

        board.move_robber(3);
        board.record_last_placement(2);
        board.record_last_placement(1);
        assert_eq!(board.robber(), 3);
        assert_eq!(board.last_placement(), 1);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut board = BoardData::new(&tiny_cells(), 0).unwrap();
        board.place_object(3, Building::Road.into(), 0);
        board.record_last_placement(3);

        let snapshot = board.export_snapshot(0);
        assert_eq!(snapshot.board_objects, vec![4, 0, 0, 3]);
        assert_eq!(snapshot.board_owners, vec![UNOWNED, UNOWNED, UNOWNED, 0]);
        assert_eq!(snapshot.board_tokens, vec![9, 0, 0, 0]);
        assert_eq!(snapshot.board_robber, 0);
        assert_eq!(snapshot.board_last, 3);
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let board = BoardData::new(&tiny_cells(), 0).unwrap();
        let json = serde_json::to_value(board.export_snapshot(1)).unwrap();
        for field in [
            "board_objects",
            "board_owners",
            "board_tokens",
            "board_robber",
            "board_last",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_move_robber_out_of_range_panics() {
        let mut board = BoardData::new(&tiny_cells(), 0).unwrap();
        board.move_robber(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_place_object_out_of_range_panics() {
        let mut board = BoardData::new(&tiny_cells(), 0).unwrap();
        board.place_object(10, Building::Road.into(), 0);
    }
}
