use std::fs;

use bit_set::BitSet;

use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition into color classes).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** outcome of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper; carries the number of colors
    Ok(usize),
    /// a vertex appears in no color class
    VertexNotColored(VertexId),
    /// a vertex appears in more than one color class
    VertexColoredTwice(VertexId),
    /// two adjacent vertices share a color class
    ConflictingVertices(VertexId, VertexId),
}

/**
checks that a solution is a proper coloring of the instance:
every vertex in exactly one class, no two adjacent vertices in the
same class. Returns the number of colors if the solution is feasible.
*/
pub fn checker(inst: &Graph, sol: &[Vec<VertexId>]) -> CheckerResult {
    // check that all vertices are colored exactly once
    let mut visited: BitSet = BitSet::default();
    for class in sol {
        for &v in class {
            if visited.contains(v) {
                return CheckerResult::VertexColoredTwice(v);
            }
            visited.insert(v);
        }
    }
    for v in 0..inst.nb_vertices() {
        if !visited.contains(v) {
            return CheckerResult::VertexNotColored(v);
        }
    }
    // check conflicts
    for class in sol {
        for (i, &v1) in class.iter().enumerate() {
            for &v2 in &class[i + 1..] {
                if inst.are_adjacent(v1, v2) {
                    return CheckerResult::ConflictingVertices(v1, v2);
                }
            }
        }
    }
    CheckerResult::Ok(sol.len())
}

/** writes a string encoding the solution (one color class per line) */
pub fn solution_to_string(solution: &[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for class in solution {
        for v in class {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/** writes a solution into a file. each line corresponds to a color. */
pub fn write_solution(filename: &str, solution: &[Vec<VertexId>]) -> std::io::Result<()> {
    fs::write(filename, solution_to_string(solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        g
    }

    #[test]
    fn test_checker_ok() {
        let g = triangle();
        let sol = vec![vec![0], vec![1], vec![2]];
        assert_eq!(checker(&g, &sol), CheckerResult::Ok(3));
    }

    #[test]
    fn test_checker_conflict() {
        let g = triangle();
        let sol = vec![vec![0, 1], vec![2]];
        assert_eq!(checker(&g, &sol), CheckerResult::ConflictingVertices(0, 1));
    }

    #[test]
    fn test_checker_missing_vertex() {
        let g = triangle();
        let sol = vec![vec![0], vec![1]];
        assert_eq!(checker(&g, &sol), CheckerResult::VertexNotColored(2));
    }

    #[test]
    fn test_checker_duplicated_vertex() {
        let g = triangle();
        let sol = vec![vec![0], vec![1, 0], vec![2]];
        assert_eq!(checker(&g, &sol), CheckerResult::VertexColoredTwice(0));
    }

    #[test]
    fn test_solution_to_string() {
        let sol = vec![vec![0, 2], vec![1]];
        assert_eq!(solution_to_string(&sol), "0 2 \n1 \n");
    }
}
