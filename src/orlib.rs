use std::fs;

use crate::error::InstanceError;
use crate::graph::{Graph, MAX_VERTICES};

/** parses an OR-library coloring instance.

First line: `n m k` (the third integer is read and discarded), then
n lines of whitespace-separated neighbor lists, 1-indexed. Only pairs
with `i < x-1` contribute an edge, so listing both directions does
not duplicate edges.
*/
pub fn parse_instance(content: &str, filename: &str) -> Result<Graph, InstanceError> {
    let mut lines = content.lines().enumerate();
    let (_, first) = lines.next().ok_or_else(|| {
        InstanceError::format(filename, "empty file".to_string())
    })?;
    let mut fields = first.split_whitespace();
    let mut next_int = |name: &str| -> Result<usize, InstanceError> {
        fields.next().and_then(|f| f.parse().ok()).ok_or_else(|| {
            InstanceError::at_line(filename, 1, format!("invalid header field '{}'", name))
        })
    };
    let n = next_int("n")?;
    let _m = next_int("m")?;
    let _k = next_int("k")?;
    if n > MAX_VERTICES {
        return Err(InstanceError::oversize(
            filename, format!("{} vertices (maximum {})", n, MAX_VERTICES),
        ));
    }
    let mut g = Graph::new(n);
    for i in 0..n {
        let (idx, line) = lines.next().ok_or_else(|| {
            InstanceError::format(filename, format!("expected {} adjacency lines, found {}", n, i))
        })?;
        for field in line.split_whitespace() {
            let x: usize = field.parse().map_err(|_| {
                InstanceError::at_line(filename, idx + 1, format!("invalid vertex '{}'", field))
            })?;
            if x < 1 || x > n {
                return Err(InstanceError::at_line(
                    filename, idx + 1, format!("vertex {} out of range 1..={}", x, n),
                ));
            }
            if i < x - 1 {
                g.add_edge(i, x - 1);
            }
        }
    }
    Ok(g)
}

/// reads an instance from an OR-library file
pub fn read_from_file(filename: &str) -> Result<Graph, InstanceError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| InstanceError::io(filename, e))?;
    parse_instance(&content, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instance() {
        // triangle plus an isolated vertex, neighbor lists in both directions
        let s = "4 3 3\n2 3\n1 3\n1 2\n\n";
        let g = parse_instance(s, "test").unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.nb_edges(), 3);
        assert!(g.are_adjacent(0, 1));
        assert!(g.are_adjacent(1, 2));
        assert!(g.are_adjacent(0, 2));
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn test_missing_lines() {
        let e = parse_instance("3 1 0\n2\n", "test").unwrap_err();
        assert!(format!("{}", e).contains("expected 3 adjacency lines, found 1"));
    }

    #[test]
    fn test_bad_header() {
        let e = parse_instance("3 1\n", "test").unwrap_err();
        assert!(format!("{}", e).contains("invalid header field 'k'"));
    }

    #[test]
    fn test_out_of_range_vertex() {
        let e = parse_instance("2 1 0\n3\n1\n", "test").unwrap_err();
        assert!(format!("{}", e).contains("out of range"));
    }
}
