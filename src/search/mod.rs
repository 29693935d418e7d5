//! RLF color-assignment loops for the graph coloring problem.

/// classic edge-array RLF with two parallel degree counters
pub mod rlf_flat;

/// linked-partition RLF with eager degree-into-U maintenance
pub mod rlf_plus;

/// RLF with a density-triggered lazy degree-into-U fallback
pub mod rlf_adaptive;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::graph::Graph;

    /// complete graph on n vertices
    pub fn complete(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for i in 0..n {
            for j in i + 1..n {
                g.add_edge(i, j);
            }
        }
        g
    }

    /// cycle 0-1-...-(n-1)-0
    pub fn cycle(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_edge(i, (i + 1) % n);
        }
        g
    }

    /// complete bipartite graph with shores 0..a and a..a+b
    pub fn complete_bipartite(a: usize, b: usize) -> Graph {
        let mut g = Graph::new(a + b);
        for i in 0..a {
            for j in a..a + b {
                g.add_edge(i, j);
            }
        }
        g
    }

    /// the standard 3-regular Petersen graph on 10 vertices
    pub fn petersen() -> Graph {
        let mut g = Graph::new(10);
        for i in 0..5 {
            g.add_edge(i, (i + 1) % 5); // outer cycle
            g.add_edge(i, i + 5); // spoke
            g.add_edge(i + 5, 5 + (i + 2) % 5); // inner pentagram
        }
        g
    }
}
