//! End-to-end board generation.
//!
//! Runs each stage once, in order, on the previous stage's output:
//! layout, graph, environments, sea routes, terrain, then packing into
//! [`BoardData`]. Any failure aborts generation; no partial board escapes.

use crate::board::BoardData;
use crate::cell::{ConvertedCell, Space};
use crate::config::BoardConfig;
use crate::dock::apply_sea_routes;
use crate::environment::{Environment, EnvironmentResolver};
use crate::error::Result;
use crate::geometry::HexLayout;
use crate::graph::HexGraph;
use rand::Rng;
use tracing::{debug, info};

/// A generated board with the intermediate structures kept for inspection
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub layout: HexLayout,
    pub graph: HexGraph,
    /// Final semantic cells, in index order
    pub cells: Vec<ConvertedCell>,
    pub data: BoardData,
}

impl GeneratedBoard {
    /// Number of cells of a kind in an environment
    pub fn count(&self, space: Space, environment: Environment) -> usize {
        self.cells
            .iter()
            .filter(|c| c.space() == space && c.environment == environment)
            .count()
    }
}

/// Builds boards from a [`BoardConfig`]
#[derive(Debug, Clone, Default)]
pub struct BoardGenerator {
    config: BoardConfig,
}

impl BoardGenerator {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Generator for the standard 7x7 board
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Generate a board, drawing terrain and tokens from `rng`
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedBoard> {
        let config = &self.config;
        let randomizer = config.layout.terrain_randomizer()?;

        let layout = HexLayout::compute(config.resolution, config.grid, config.margin)?;
        debug!(
            hex_size = layout.hex_size,
            top_buffer = layout.top_buffer,
            left_buffer = layout.left_buffer,
            "Computed layout"
        );

        let graph = HexGraph::build(&layout);
        debug!(
            hexes = graph.hex_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built board graph"
        );

        let mut cells: Vec<ConvertedCell> =
            graph.cells().iter().map(ConvertedCell::from_cell).collect();
        EnvironmentResolver::new(&config.layout.environments).resolve(&mut cells, config.grid)?;

        apply_sea_routes(&mut cells, &config.layout.sea_routes)?;
        debug!("Applied {} sea routes", config.layout.sea_routes.len());

        let robber = randomizer.apply(&mut cells, rng)?;
        debug!(robber, terrain = ?randomizer.robber_start(), "Dealt terrain");

        let data = BoardData::new(&cells, robber)?;
        let board = GeneratedBoard {
            layout,
            graph,
            cells,
            data,
        };

        for space in [Space::Vertex, Space::Edge] {
            debug!(
                ?space,
                land = board.count(space, Environment::Land),
                coast = board.count(space, Environment::Coast),
                sea = board.count(space, Environment::Sea),
                "Resolved environments"
            );
        }
        info!(
            "Generated {}x{} board with {} cells",
            config.grid.rows,
            config.grid.columns,
            board.data.n_tiles()
        );
        Ok(board)
    }

    /// Generate a board from the thread-local RNG
    pub fn generate_random(&self) -> Result<GeneratedBoard> {
        self.generate(&mut rand::thread_rng())
    }
}
