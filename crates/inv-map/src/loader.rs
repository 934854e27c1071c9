//! Map-file loader and validator.
//!
//! # Record format
//!
//! ```text
//! <CityName> [<direction>=<NeighborName>]*
//! ```
//!
//! - Blank lines and lines starting with `#` are skipped.
//! - `direction` is one of `north`, `east`, `south`, `west`.
//! - Names may not contain spaces or `=`; there is no escaping.
//!
//! Loading is all-or-nothing: the first malformed record, redefined city, or
//! asymmetric road aborts with a [`MapError`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use inv_core::{CoreError, Direction};

use crate::{City, Graph, MapError, MapResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map from a file path.
pub fn load_file(path: &Path) -> MapResult<Graph> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Load a map from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R) -> MapResult<Graph> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    load_lines(lines)
}

/// Build and validate a [`Graph`] from raw text lines.
pub fn load_lines<I, S>(lines: I) -> MapResult<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = Graph::new();

    for (i, raw) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let Some(city) = parse_record(raw.as_ref(), line_no)? else {
            continue;
        };
        graph.add_city(city).map_err(|city| MapError::DuplicateCity {
            line: line_no,
            name: city.name,
        })?;
    }

    graph.validate()?;
    Ok(graph)
}

// ── Record parsing ────────────────────────────────────────────────────────────

/// Parse one line.  Returns `Ok(None)` for blank and comment lines.
fn parse_record(raw: &str, line: usize) -> MapResult<Option<City>> {
    let text = raw.trim_end_matches('\r').trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut fields = text.split_whitespace();
    let Some(name) = fields.next() else {
        return Ok(None);
    };
    if name.contains('=') {
        return Err(MapError::Parse {
            line,
            message: format!("city name '{name}' may not contain '='"),
        });
    }

    let mut city = City::new(name);
    for field in fields {
        let (direction, neighbor) = parse_road(field, line)?;
        let slot = &mut city.roads[direction.index()];
        if slot.is_some() {
            return Err(MapError::DuplicateRoad { line, city: city.name, direction });
        }
        *slot = Some(neighbor.to_owned());
    }

    Ok(Some(city))
}

/// Parse a `<direction>=<neighbor>` field.
fn parse_road(field: &str, line: usize) -> MapResult<(Direction, &str)> {
    let Some((dir, neighbor)) = field.split_once('=') else {
        return Err(MapError::Parse {
            line,
            message: format!("expected <direction>=<city>, got '{field}'"),
        });
    };
    if neighbor.is_empty() || neighbor.contains('=') {
        return Err(MapError::Parse {
            line,
            message: format!("invalid neighbor name in '{field}'"),
        });
    }
    let direction = dir.parse::<Direction>().map_err(|e| match e {
        CoreError::UnknownDirection(value) => MapError::UnknownDirection { line, value },
        other => MapError::Parse { line, message: other.to_string() },
    })?;
    Ok((direction, neighbor))
}
