//! Text point-list loader.
//!
//! # Format
//!
//! Space-separated, one point per line after a count line.  Point ids are
//! implicit: the first point line is point 0.
//!
//! ```text
//! 3
//! 12 1 5
//! 0 0 5 2 3
//! 8 1 3
//! ```
//!
//! Each point line is `<waste_m3> [<neighbor_id> <cost>]...`.  A road only
//! needs to be listed from one end; listing it from both ends with the same
//! cost is accepted.  Lines starting with `#` are comments; blank lines are
//! ignored.
//!
//! Parsing is done with the `csv` crate configured for a space delimiter and
//! variable-length records, so runs of spaces are tolerated.

use std::io::Read;
use std::path::Path;

use wc_core::PointId;

use crate::network::{CollectionGraph, GraphBuilder};
use crate::{GraphError, GraphResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a collection graph from a point-list file.
pub fn load_graph_path(path: &Path) -> GraphResult<CollectionGraph> {
    let file = std::fs::File::open(path)?;
    load_graph_reader(file)
}

/// Like [`load_graph_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded inputs.
pub fn load_graph_reader<R: Read>(reader: R) -> GraphResult<CollectionGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut expected: Option<usize> = None;
    let mut builder = GraphBuilder::new();
    let mut last_line = 0;

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(last_line + 1);
        last_line = line;

        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        match expected {
            None => {
                if fields.len() != 1 {
                    return Err(parse_err(line, "first line must hold only the point count"));
                }
                let n = fields[0]
                    .parse::<usize>()
                    .map_err(|_| parse_err(line, format!("invalid point count {:?}", fields[0])))?;
                expected = Some(n);
                builder = GraphBuilder::with_capacity(n, n * 2);
            }
            Some(n) => {
                if builder.point_count() == n {
                    return Err(parse_err(line, format!("more than {n} point lines")));
                }
                parse_point_line(&mut builder, line, &fields)?;
            }
        }
    }

    let Some(n) = expected else {
        return Err(parse_err(last_line, "empty input: missing point count"));
    };
    if builder.point_count() != n {
        return Err(parse_err(
            last_line,
            format!("expected {n} point lines, found {}", builder.point_count()),
        ));
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_point_line(builder: &mut GraphBuilder, line: u64, fields: &[&str]) -> GraphResult<()> {
    let waste = fields[0]
        .parse::<f64>()
        .map_err(|_| parse_err(line, format!("invalid waste volume {:?}", fields[0])))?;
    let pairs = &fields[1..];
    if pairs.len() % 2 != 0 {
        return Err(parse_err(line, "neighbor list must be <id> <cost> pairs"));
    }

    let point = builder.add_point(waste);
    for pair in pairs.chunks_exact(2) {
        let neighbor = pair[0]
            .parse::<u32>()
            .map_err(|_| parse_err(line, format!("invalid neighbor id {:?}", pair[0])))?;
        let cost = pair[1]
            .parse::<i64>()
            .map_err(|_| parse_err(line, format!("invalid travel cost {:?}", pair[1])))?;
        builder.add_road(point, PointId(neighbor), cost);
    }
    Ok(())
}

fn parse_err(line: u64, message: impl Into<String>) -> GraphError {
    GraphError::Parse { line, message: message.into() }
}
