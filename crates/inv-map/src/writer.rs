//! Write a graph back out in map-file format.

use std::io::{self, Write};

use crate::Graph;

/// Write every city of `graph` as one record, in name order, roads in
/// canonical direction order.
pub fn write_map<W: Write>(graph: &Graph, mut out: W) -> io::Result<()> {
    out.write_all(render(graph).as_bytes())?;
    out.flush()
}

/// The map-file text of `graph`.
pub fn render(graph: &Graph) -> String {
    let mut text = String::new();
    for city in graph.cities() {
        text.push_str(&city.name);
        for (direction, to) in city.roads() {
            text.push(' ');
            text.push_str(direction.name());
            text.push('=');
            text.push_str(to);
        }
        text.push('\n');
    }
    text
}
