use std::fs;
use std::io;
use std::io::Write;

use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{alphanumeric1, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::tuple;

use crate::error::InstanceError;
use crate::graph::{Graph, MAX_EDGES, MAX_VERTICES};

/// reads a decimal integer field
fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |d: &str| d.parse::<usize>())(s)
}

/// reads two integers separated by spaces, with optional trailing blanks
fn two_integers(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, (a, _, b, _)) = tuple((integer, space1, integer, space0))(s)?;
    Ok((rest, (a, b)))
}

/// reads a problem line `p <type> <n> <m>`; the type tag is free-form
pub fn problem_line(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, _) = tuple((tag("p"), space1, alphanumeric1, space1))(s)?;
    two_integers(rest)
}

/// reads an edge line `e <u> <v>` (endpoints start at 1 in DIMACS)
pub fn edge_line(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, _) = tuple((tag("e"), space1))(s)?;
    two_integers(rest)
}

/// reads a node annotation line `n <i> <k>`
fn node_line(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, _) = tuple((tag("n"), space1))(s)?;
    two_integers(rest)
}

/** parses a DIMACS ASCII coloring instance.

Line grammar: `c` comments are ignored, exactly one `p <type> n m`
line must precede every `e` line, `n` lines are validated and
discarded, edges are 1-indexed. Blank lines and lines shorter than
2 bytes are skipped. The number of `e` lines must equal the `m`
announced on the problem line.
*/
pub fn parse_instance(content: &str, filename: &str) -> Result<Graph, InstanceError> {
    let mut graph: Option<Graph> = None;
    let mut nb_edges_expected = 0;
    let mut nb_edge_lines = 0;
    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.len() < 2 {
            continue;
        }
        match line.as_bytes()[0] {
            b'c' => {}
            b'p' => {
                if graph.is_some() {
                    return Err(InstanceError::at_line(
                        filename, line_no, "duplicate problem line".to_string(),
                    ));
                }
                let (_, (n, m)) = all_consuming(problem_line)(line).map_err(|_| {
                    InstanceError::at_line(filename, line_no, "invalid problem line".to_string())
                })?;
                if n > MAX_VERTICES {
                    return Err(InstanceError::oversize(
                        filename, format!("{} vertices (maximum {})", n, MAX_VERTICES),
                    ));
                }
                if m > MAX_EDGES {
                    return Err(InstanceError::oversize(
                        filename, format!("{} edges (maximum {})", m, MAX_EDGES),
                    ));
                }
                graph = Some(Graph::new(n));
                nb_edges_expected = m;
            }
            b'n' => {
                all_consuming(node_line)(line).map_err(|_| {
                    InstanceError::at_line(filename, line_no, "invalid node line".to_string())
                })?;
            }
            b'e' => {
                let g = graph.as_mut().ok_or_else(|| {
                    InstanceError::at_line(
                        filename, line_no, "edge line before problem line".to_string(),
                    )
                })?;
                let (_, (u, v)) = all_consuming(edge_line)(line).map_err(|_| {
                    InstanceError::at_line(filename, line_no, "invalid edge line".to_string())
                })?;
                let n = g.nb_vertices();
                if u < 1 || u > n || v < 1 || v > n {
                    return Err(InstanceError::at_line(
                        filename, line_no,
                        format!("edge endpoint out of range 1..={}", n),
                    ));
                }
                g.add_edge(u - 1, v - 1);
                nb_edge_lines += 1;
            }
            tag => {
                return Err(InstanceError::at_line(
                    filename, line_no,
                    format!("unknown line tag '{}'", tag as char),
                ));
            }
        }
    }
    let g = graph.ok_or_else(|| {
        InstanceError::format(filename, "no problem line".to_string())
    })?;
    if nb_edge_lines != nb_edges_expected {
        return Err(InstanceError::format(
            filename,
            format!("expected {} edge lines, found {}", nb_edges_expected, nb_edge_lines),
        ));
    }
    Ok(g)
}

/// reads an instance from a DIMACS ASCII file
pub fn read_from_file(filename: &str) -> Result<Graph, InstanceError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| InstanceError::io(filename, e))?;
    parse_instance(&content, filename)
}

/** writes an instance in DIMACS ASCII format (`p col`, 1-indexed edges) */
pub fn write_instance<W: Write>(w: &mut W, inst: &Graph, comment: Option<&str>) -> io::Result<()> {
    if let Some(c) = comment {
        writeln!(w, "c {}", c)?;
    }
    writeln!(w, "p col {} {}", inst.nb_vertices(), inst.nb_edges())?;
    for &(u, v) in inst.edges() {
        writeln!(w, "e {} {}", u + 1, v + 1)?;
    }
    Ok(())
}
