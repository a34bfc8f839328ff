//! Board graph construction.
//!
//! Walks the grid once, registering every hex, vertex, and edge location in
//! a per-kind coordinate table. Neighboring hexes compute identical locations
//! for the corners and sides they share, so the tables deduplicate them.
//!
//! Once the walk is done, cells are indexed densely: hexes first, then
//! vertices, then edges, each group in ascending [`Location`] order.
//!
//! Connections:
//! - a hex connects to its 6 vertices
//! - a vertex connects to its 2-3 edges and 1-3 hexes
//! - an edge connects to exactly its 2 endpoint vertices

use crate::cell::Space;
use crate::geometry::HexLayout;
use crate::hex::{hex_center, EdgeShape, HexFootprint, Location};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Kind of a cell, with the geometric sub-type of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Hex,
    Vertex,
    Edge(EdgeShape),
}

impl CellKind {
    pub fn space(&self) -> Space {
        match self {
            CellKind::Hex => Space::Hex,
            CellKind::Vertex => Space::Vertex,
            CellKind::Edge(_) => Space::Edge,
        }
    }
}

/// A node of the board graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub index: usize,
    pub kind: CellKind,
    pub location: Location,
    /// Neighbor indices, ascending
    pub neighbors: Vec<usize>,
}

/// Location to provisional id map for one cell kind, with outgoing links
#[derive(Debug, Default)]
struct CoordinateTable {
    ids: HashMap<Location, usize>,
    locations: Vec<Location>,
    links: Vec<BTreeSet<(Space, Location)>>,
}

impl CoordinateTable {
    fn register(&mut self, location: Location) -> usize {
        if let Some(&id) = self.ids.get(&location) {
            return id;
        }
        let id = self.locations.len();
        self.ids.insert(location, id);
        self.locations.push(location);
        self.links.push(BTreeSet::new());
        id
    }

    fn link(&mut self, location: Location, space: Space, target: Location) {
        let id = self.register(location);
        self.links[id].insert((space, target));
    }

    fn links_of(&self, location: &Location) -> &BTreeSet<(Space, Location)> {
        &self.links[self.ids[location]]
    }

    fn sorted_locations(&self) -> Vec<Location> {
        let mut locations = self.locations.clone();
        locations.sort_unstable();
        locations
    }
}

/// The complete, deduplicated board graph
#[derive(Debug, Clone)]
pub struct HexGraph {
    layout: HexLayout,
    cells: Vec<Cell>,
    hex_count: usize,
    vertex_count: usize,
    edge_count: usize,
    lookup: HashMap<(Space, Location), usize>,
}

impl HexGraph {
    /// Build the graph for every hex of the layout's grid
    pub fn build(layout: &HexLayout) -> Self {
        let mut hexes = CoordinateTable::default();
        let mut vertices = CoordinateTable::default();
        let mut edges = CoordinateTable::default();

        for row in 0..layout.grid.rows {
            for column in 0..layout.grid.columns {
                let center = hex_center(
                    layout.hex_size,
                    layout.top_buffer,
                    layout.left_buffer,
                    row,
                    column,
                );
                let footprint = HexFootprint::new(center, layout.hex_size);

                hexes.register(center);
                for i in 0..6 {
                    let vertex = footprint.vertices[i];
                    hexes.link(center, Space::Vertex, vertex);
                    vertices.link(vertex, Space::Hex, center);
                    vertices.link(vertex, Space::Edge, footprint.edges[i]);
                    vertices.link(vertex, Space::Edge, footprint.edges[(i + 1) % 6]);
                    for endpoint in footprint.edge_endpoints(i) {
                        edges.link(footprint.edges[i], Space::Vertex, endpoint);
                    }
                }
            }
        }

        let hex_locations = hexes.sorted_locations();
        let vertex_locations = vertices.sorted_locations();
        let edge_locations = edges.sorted_locations();

        let ordered: Vec<(Space, Location)> = hex_locations
            .iter()
            .map(|l| (Space::Hex, *l))
            .chain(vertex_locations.iter().map(|l| (Space::Vertex, *l)))
            .chain(edge_locations.iter().map(|l| (Space::Edge, *l)))
            .collect();
        let lookup: HashMap<(Space, Location), usize> = ordered
            .iter()
            .enumerate()
            .map(|(index, key)| (*key, index))
            .collect();

        let cells = ordered
            .iter()
            .enumerate()
            .map(|(index, (space, location))| {
                let links = match space {
                    Space::Hex => hexes.links_of(location),
                    Space::Vertex => vertices.links_of(location),
                    Space::Edge => edges.links_of(location),
                };
                let mut neighbors: Vec<usize> = links.iter().map(|key| lookup[key]).collect();
                neighbors.sort_unstable();

                let kind = match space {
                    Space::Hex => CellKind::Hex,
                    Space::Vertex => CellKind::Vertex,
                    Space::Edge => {
                        let ends: Vec<Location> = links.iter().map(|(_, l)| *l).collect();
                        CellKind::Edge(EdgeShape::classify(ends[0], ends[1]))
                    }
                };

                Cell {
                    index,
                    kind,
                    location: *location,
                    neighbors,
                }
            })
            .collect();

        Self {
            layout: *layout,
            cells,
            hex_count: hex_locations.len(),
            vertex_count: vertex_locations.len(),
            edge_count: edge_locations.len(),
            lookup,
        }
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// All cells in index order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn hex_count(&self) -> usize {
        self.hex_count
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn hexes(&self) -> impl Iterator<Item = &Cell> {
        self.cells[..self.hex_count].iter()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Cell> {
        self.cells[self.hex_count..self.hex_count + self.vertex_count].iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Cell> {
        self.cells[self.hex_count + self.vertex_count..].iter()
    }

    /// Index of the cell of the given kind at a location
    pub fn index_of(&self, space: Space, location: Location) -> Option<usize> {
        self.lookup.get(&(space, location)).copied()
    }
}
