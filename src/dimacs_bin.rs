use std::fs;
use std::io;

use nom::combinator::all_consuming;

use crate::dimacs::problem_line;
use crate::error::InstanceError;
use crate::graph::{Graph, MAX_EDGES, MAX_VERTICES};

/** byte offset of the lower-triangle bitmap row of vertex i.

The stride looks unusual but existing corpus files depend on it
byte-for-byte; do not simplify. The bit for edge (i,j), i > j, lives
at `bitmap_offset(i) + (j >> 3)` under mask `1 << (7 - (j & 7))`.
*/
pub fn bitmap_offset(i: usize) -> usize {
    ((i >> 3) + 1) * ((i >> 3) * 4 + (i & 7))
}

/// tests the bit of edge (i,j) with i > j
fn get_bit(bitmap: &[u8], i: usize, j: usize) -> bool {
    bitmap[bitmap_offset(i) + (j >> 3)] & (1 << (7 - (j & 7))) != 0
}

fn premature_eof(filename: &str, what: &str) -> InstanceError {
    InstanceError::io(
        filename,
        io::Error::new(io::ErrorKind::UnexpectedEof, format!("premature end of file in {}", what)),
    )
}

/** decodes a DIMACS binary instance: an ASCII preamble length, the
preamble itself (holding the `p` line), then the lower-triangle
bitmap. */
pub fn decode(bytes: &[u8], filename: &str) -> Result<Graph, InstanceError> {
    // ASCII decimal preamble length, newline-terminated
    let newline = bytes.iter().position(|&b| b == b'\n')
        .ok_or_else(|| premature_eof(filename, "preamble length"))?;
    let pr_len: usize = std::str::from_utf8(&bytes[..newline]).ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| InstanceError::format(filename, "corrupted preamble length".to_string()))?;
    let header_start = newline + 1;
    if bytes.len() < header_start + pr_len {
        return Err(premature_eof(filename, "preamble"));
    }
    let header = std::str::from_utf8(&bytes[header_start..header_start + pr_len])
        .map_err(|_| InstanceError::format(filename, "preamble is not ASCII".to_string()))?;
    // locate the problem line among the preamble lines
    let mut params = None;
    for raw in header.lines() {
        let line = raw.trim_end_matches('\r');
        if line.starts_with('p') {
            let (_, (n, m)) = all_consuming(problem_line)(line).map_err(|_| {
                InstanceError::format(filename, "invalid problem line in preamble".to_string())
            })?;
            params = Some((n, m));
            break;
        }
    }
    let (n, m) = params.ok_or_else(|| {
        InstanceError::format(filename, "no problem line in preamble".to_string())
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
    let bitmap = &bytes[header_start + pr_len..];
    if bitmap.len() < bitmap_offset(n) {
        return Err(premature_eof(filename, "bitmap"));
    }
    let mut g = Graph::new(n);
    for i in 1..n {
        for j in 0..i {
            if get_bit(bitmap, i, j) {
                g.add_edge(j, i);
            }
        }
    }
    Ok(g)
}

/** encodes an instance in DIMACS binary format */
pub fn encode(inst: &Graph) -> Vec<u8> {
    let n = inst.nb_vertices();
    let header = format!("p edge {} {}\n", n, inst.nb_edges());
    let mut out = Vec::with_capacity(header.len() + 8 + bitmap_offset(n));
    out.extend_from_slice(format!("{}\n", header.len()).as_bytes());
    out.extend_from_slice(header.as_bytes());
    for i in 0..n {
        let mut row = vec![0u8; (i >> 3) + 1];
        for j in 0..i {
            if inst.are_adjacent(i, j) {
                row[j >> 3] |= 1 << (7 - (j & 7));
            }
        }
        out.extend_from_slice(&row);
    }
    out
}

/// reads an instance from a DIMACS binary file
pub fn read_from_file(filename: &str) -> Result<Graph, InstanceError> {
    let bytes = fs::read(filename).map_err(|e| InstanceError::io(filename, e))?;
    decode(&bytes, filename)
}

/// writes an instance into a DIMACS binary file
pub fn write_to_file(filename: &str, inst: &Graph) -> Result<(), InstanceError> {
    fs::write(filename, encode(inst)).map_err(|e| InstanceError::io(filename, e))
}
