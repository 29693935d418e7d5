use bit_set::BitSet;

use crate::color::VertexId;

/// largest supported vertex count (vertex ids must fit 16 bits)
pub const MAX_VERTICES: usize = u16::MAX as usize;

/// largest supported edge count
pub const MAX_EDGES: usize = u32::MAX as usize;

/** an undirected simple graph with vertices labeled `0..n-1`.

Built once from its input and immutable afterwards. Adjacency is kept
twice: per-vertex lists for O(deg) iteration and one bitset row per
vertex for O(1) adjacency queries (and for the silent deduplication in
[`add_edge`](Graph::add_edge)).
*/
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph, stored as (min, max) pairs
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Graph {
    /** creates a graph with n isolated vertices */
    pub fn new(n: usize) -> Self {
        Self {
            n,
            m: 0,
            edges: Vec::new(),
            adj_list: vec![Vec::new(); n],
            adj_matrix: vec![BitSet::default(); n],
        }
    }

    /** constructor using an adjacency list (lists both directions) */
    pub fn from_adj_list(adj_list: Vec<Vec<VertexId>>) -> Self {
        let mut res = Self::new(adj_list.len());
        for (i, l) in adj_list.iter().enumerate() {
            for &j in l {
                res.add_edge(i, j);
            }
        }
        res
    }

    /** adds the undirected edge {u,v}. Self-loops and already present
    edges are silently ignored (the input is assumed clean). */
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if u == v || self.adj_matrix[u].contains(v) {
            return;
        }
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.edges.push((u.min(v), u.max(v)));
        self.m += 1;
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex u
    pub fn neighbors(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of vertex u
    pub fn degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// maximum degree (0 on the empty graph)
    pub fn max_degree(&self) -> usize {
        (0..self.n).map(|u| self.degree(u)).max().unwrap_or(0)
    }

    /// returns true iff u and v are adjacent. O(1)
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    /// edge list, one (min, max) pair per undirected edge
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /** 1-indexed edge-array (CSR) view: neighbors of vertex `i`
    (1-indexed) occupy `cl[ci[i-1]+1 ..= ci[i]]`, themselves 1-indexed.
    Slot 0 of `cl` is a dummy so the windows need no adjustment. */
    pub fn csr(&self) -> (Vec<usize>, Vec<usize>) {
        let mut ci = vec![0; self.n + 1];
        let mut cl = vec![0];
        for i in 0..self.n {
            for &j in &self.adj_list[i] {
                cl.push(j + 1);
            }
            ci[i + 1] = cl.len() - 1;
        }
        (ci, cl)
    }

    /// print statistics of the instance on stderr
    pub fn display_statistics(&self) {
        eprintln!("\t{} \t vertices", self.nb_vertices());
        eprintln!("\t{} \t edges", self.nb_edges());
        if self.n > 0 {
            let degrees: Vec<usize> = (0..self.n).map(|i| self.degree(i)).collect();
            eprintln!("\t{} \t min degree", degrees.iter().min().unwrap());
            eprintln!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}
