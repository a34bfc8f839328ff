//! Human readable board summary.

use hexboard_core::{BoardObject, Environment, GeneratedBoard, Space};
use std::fmt;

/// Layout, environment tallies, and the dealt land hexes
pub struct Summary<'a>(pub &'a GeneratedBoard);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let layout = &board.layout;
        let (display_width, display_height) = layout.display_area();

        writeln!(
            f,
            "Board {}x{} at {}x{} (hex size {}, display area {}x{})",
            layout.grid.rows,
            layout.grid.columns,
            layout.resolution.width,
            layout.resolution.height,
            layout.hex_size,
            display_width,
            display_height,
        )?;
        writeln!(
            f,
            "Cells: {} hexes, {} vertices, {} edges",
            board.graph.hex_count(),
            board.graph.vertex_count(),
            board.graph.edge_count(),
        )?;

        let kinds = [
            ("Hexes", Space::Hex),
            ("Vertices", Space::Vertex),
            ("Edges", Space::Edge),
        ];
        for (name, space) in kinds {
            writeln!(
                f,
                "{:<9} land {:>3}  coast {:>3}  sea {:>3}",
                name,
                board.count(space, Environment::Land),
                board.count(space, Environment::Coast),
                board.count(space, Environment::Sea),
            )?;
        }

        writeln!(f, "Land hexes:")?;
        let land = board
            .cells
            .iter()
            .filter(|c| c.space() == Space::Hex && c.environment == Environment::Land);
        for cell in land {
            if let BoardObject::Terrain(terrain) = cell.object() {
                let name = format!("{:?}", terrain);
                writeln!(f, "  {:>3} {:<9} {:>2}", cell.index, name, cell.token)?;
            }
        }
        write!(f, "Robber on hex {}", board.data.robber())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexboard_core::BoardGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_summary_lists_standard_board() {
        let board = BoardGenerator::standard()
            .generate(&mut StdRng::seed_from_u64(0))
            .unwrap();
        let text = Summary(&board).to_string();

        assert!(text.starts_with("Board 7x7 at 1920x1080 (hex size 192"));
        assert!(text.contains("Cells: 49 hexes, 126 vertices, 174 edges"));
        assert!(text.contains("Desert"));
        assert!(text.ends_with(&format!("Robber on hex {}", board.data.robber())));
        // Header, cell counts, three tallies, land header, 19 hexes, robber
        assert_eq!(text.lines().count(), 1 + 1 + 3 + 1 + 19 + 1);
    }
}
