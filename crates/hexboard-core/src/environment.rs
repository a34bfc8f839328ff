//! Land, sea, and coast resolution.
//!
//! Hexes get their environment from a fixed template. Vertices and edges are
//! then derived from adjacency in two passes:
//! 1. a vertex is Land when none of its hexes is Sea, Sea when none is Land,
//!    and Coast otherwise
//! 2. an edge is Land when either endpoint vertex is Land, else Sea when
//!    either is Sea, else Coast
//!
//! Each pass only reads cells resolved by the previous step, so results do
//! not depend on iteration order within a pass.

use crate::cell::{ConvertedCell, Space};
use crate::error::{BoardError, Result};
use crate::geometry::GridSize;
use serde::{Deserialize, Serialize};

/// Environment of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Environment {
    Land,
    Sea,
    Coast,
}

impl Environment {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Vertex rule over the environments of its adjacent hexes
pub fn resolve_vertex(hexes: &[Environment]) -> Environment {
    if !hexes.contains(&Environment::Sea) {
        Environment::Land
    } else if !hexes.contains(&Environment::Land) {
        Environment::Sea
    } else {
        Environment::Coast
    }
}

/// Edge rule over the environments of its endpoint vertices; land wins
pub fn resolve_edge(vertices: &[Environment]) -> Environment {
    if vertices.contains(&Environment::Land) {
        Environment::Land
    } else if vertices.contains(&Environment::Sea) {
        Environment::Sea
    } else {
        Environment::Coast
    }
}

const S: Environment = Environment::Sea;
const L: Environment = Environment::Land;

/// Land/sea pattern per hex row and column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentTemplate {
    rows: Vec<Vec<Environment>>,
}

impl EnvironmentTemplate {
    pub fn new(rows: Vec<Vec<Environment>>) -> Self {
        Self { rows }
    }

    /// The 19-hex island in a ring of sea on a 7x7 grid
    pub fn standard() -> Self {
        Self::new(vec![
            vec![S, S, S, S, S, S, S],
            vec![S, S, L, L, L, S, S],
            vec![S, S, L, L, L, L, S],
            vec![S, L, L, L, L, L, S],
            vec![S, S, L, L, L, L, S],
            vec![S, S, L, L, L, S, S],
            vec![S, S, S, S, S, S, S],
        ])
    }

    pub fn rows(&self) -> &[Vec<Environment>] {
        &self.rows
    }

    /// Number of land hexes in the pattern
    pub fn land_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|e| **e == Environment::Land)
            .count()
    }

    /// Check the pattern has exactly one entry per hex of the grid
    pub fn check_shape(&self, grid: GridSize) -> Result<()> {
        let found_rows = self.rows.len();
        let found_columns = self.rows.first().map_or(0, Vec::len);
        let uniform = self.rows.iter().all(|r| r.len() == found_columns);
        if !uniform || found_rows != grid.rows as usize || found_columns != grid.columns as usize {
            return Err(BoardError::TemplateMismatch {
                rows: grid.rows,
                columns: grid.columns,
                found_rows,
                found_columns,
            });
        }
        Ok(())
    }
}

impl Default for EnvironmentTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assigns environments to converted cells from a hex template
pub struct EnvironmentResolver<'a> {
    template: &'a EnvironmentTemplate,
}

impl<'a> EnvironmentResolver<'a> {
    pub fn new(template: &'a EnvironmentTemplate) -> Self {
        Self { template }
    }

    /// Hexes from the template, then the vertex pass, then the edge pass.
    ///
    /// `cells` must be in index order with hexes first in row-major order,
    /// as produced by [`HexGraph`](crate::graph::HexGraph).
    pub fn resolve(&self, cells: &mut [ConvertedCell], grid: GridSize) -> Result<()> {
        self.template.check_shape(grid)?;
        self.assign_hexes(cells);
        self.resolve_pass(cells, Space::Vertex, Space::Hex, resolve_vertex);
        self.resolve_pass(cells, Space::Edge, Space::Vertex, resolve_edge);
        Ok(())
    }

    fn assign_hexes(&self, cells: &mut [ConvertedCell]) {
        let hexes = cells.iter_mut().filter(|c| c.space() == Space::Hex);
        for (cell, env) in hexes.zip(self.template.rows.iter().flatten()) {
            cell.environment = *env;
        }
    }

    /// Resolve every `target` cell from its `source` neighbors.
    ///
    /// Results are collected before any are written back.
    fn resolve_pass(
        &self,
        cells: &mut [ConvertedCell],
        target: Space,
        source: Space,
        rule: fn(&[Environment]) -> Environment,
    ) {
        let resolved: Vec<(usize, Environment)> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.space() == target)
            .map(|(i, c)| {
                let envs: Vec<Environment> = c
                    .connections
                    .iter()
                    .map(|&n| &cells[n])
                    .filter(|n| n.space() == source)
                    .map(|n| n.environment)
                    .collect();
                (i, rule(&envs))
            })
            .collect();

        for (i, env) in resolved {
            cells[i].environment = env;
        }
    }
}
