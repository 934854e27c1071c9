//! Synthetic map generation.
//!
//! Produces a fully connected `width × height` mesh.  City `City_<x>_<y>`
//! sits at column `x` (growing east) and row `y` (growing south), both
//! 1-based, and has a road to each orthogonal neighbor inside the grid.

use crate::{Graph, MapResult, load_lines};

pub const CITY_PREFIX: &str = "City_";

/// Name of the city at column `x`, row `y`.
pub fn city_name(x: u32, y: u32) -> String {
    format!("{CITY_PREFIX}{x}_{y}")
}

/// Map-file lines for a `width × height` grid, column by column.
pub fn grid_lines(width: u32, height: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity((width as usize) * (height as usize));
    for x in 1..=width {
        for y in 1..=height {
            let mut fields = vec![city_name(x, y)];
            if y > 1 {
                fields.push(format!("north={}", city_name(x, y - 1)));
            }
            if x < width {
                fields.push(format!("east={}", city_name(x + 1, y)));
            }
            if y < height {
                fields.push(format!("south={}", city_name(x, y + 1)));
            }
            if x > 1 {
                fields.push(format!("west={}", city_name(x - 1, y)));
            }
            lines.push(fields.join(" "));
        }
    }
    lines
}

/// A validated grid [`Graph`].
pub fn grid(width: u32, height: u32) -> MapResult<Graph> {
    load_lines(grid_lines(width, height))
}
