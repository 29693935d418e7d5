use fastrand::Rng;

use crate::color::VertexId;
use crate::graph::Graph;

/// end-of-chain marker for arena links
const NIL: usize = usize::MAX;

/** per-class update discipline.

Sparse keeps every degree-into-U counter up to date while neighbors
move (cost proportional to the moved vertices' degrees); Dense skips
the bookkeeping and recomputes degree-into-U lazily at selection time,
pruning candidates against the running maximum.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// eager degU maintenance
    Sparse,
    /// lazy degU recomputation
    Dense,
}

/// one directed half-edge in a vertex's adjacency arena
#[derive(Debug, Clone, Copy)]
struct HalfEdge {
    /// opposite endpoint
    node: VertexId,
    /// slot of the twin half-edge in the arena of `node`
    mate_slot: usize,
    /// previous live slot in this arena
    prev: usize,
    /// next live slot in this arena, NIL at the tail
    next: usize,
}

/// per-vertex record, doubling as a cell of the P or U list
#[derive(Debug, Clone, Copy)]
struct VertexCell {
    /// degree towards the remaining uncolored subgraph
    degree: usize,
    /// degree towards U (eagerly maintained in Sparse mode only)
    deg_u: usize,
    /// true while the vertex sits in P
    in_p: bool,
    /// assigned color class, 0 while uncolored
    color: usize,
    /// previous cell in the membership list (vertex index or anchor)
    prev: usize,
    /// next cell in the membership list, NIL at the tail
    next: usize,
}

/** partitions the vertex set into P (candidates for the current color
class), U (excluded from it) and the colored vertices, which leave the
structure entirely.

Vertex cells live in one arena together with the P and U anchor cells,
so list splices never special-case the ends. Each vertex also owns an
arena of half-edges whose slot 0 is a sentinel; a half-edge records
the slot of its twin in the opposite arena, which makes removing a
colored vertex from every remaining adjacency list O(deg).
*/
#[derive(Debug)]
pub struct VertexPartition {
    /// vertex cells 0..n, then the P anchor at n and the U anchor at n+1
    cells: Vec<VertexCell>,
    /// adj[v]: half-edge arena of v, slot 0 sentinel
    adj: Vec<Vec<HalfEdge>>,
    /// vertices still uncolored (n')
    nb_vertices: usize,
    /// edges of the uncolored subgraph (m')
    nb_edges: usize,
    /// initial vertex count; also the P anchor index
    n: usize,
}

impl VertexPartition {
    /** builds the partition from a graph: every vertex starts in P,
    U is empty. */
    pub fn new(inst: &Graph) -> Self {
        let n = inst.nb_vertices();
        let mut cells = Vec::with_capacity(n + 2);
        for v in 0..n {
            cells.push(VertexCell {
                degree: 0,
                deg_u: 0,
                in_p: true,
                color: 0,
                prev: if v == 0 { n } else { v - 1 },
                next: if v + 1 == n { NIL } else { v + 1 },
            });
        }
        // P anchor, then the circularly-anchored U
        cells.push(VertexCell {
            degree: 0, deg_u: 0, in_p: false, color: 0,
            prev: NIL,
            next: if n > 0 { 0 } else { NIL },
        });
        cells.push(VertexCell {
            degree: 0, deg_u: 0, in_p: false, color: 0,
            prev: n + 1,
            next: NIL,
        });
        let sentinel = HalfEdge { node: NIL, mate_slot: NIL, prev: NIL, next: NIL };
        let mut adj: Vec<Vec<HalfEdge>> = (0..n)
            .map(|v| {
                let mut arena = Vec::with_capacity(inst.degree(v) + 1);
                arena.push(sentinel);
                arena
            })
            .collect();
        for &(u, v) in inst.edges() {
            let su = adj[u].len();
            let sv = adj[v].len();
            adj[u].push(HalfEdge { node: v, mate_slot: sv, prev: su - 1, next: NIL });
            adj[u][su - 1].next = su;
            adj[v].push(HalfEdge { node: u, mate_slot: su, prev: sv - 1, next: NIL });
            adj[v][sv - 1].next = sv;
            cells[u].degree += 1;
            cells[v].degree += 1;
        }
        Self { cells, adj, nb_vertices: n, nb_edges: inst.nb_edges(), n }
    }

    fn p_anchor(&self) -> usize { self.n }

    fn u_anchor(&self) -> usize { self.n + 1 }

    /// true iff P holds no candidate
    pub fn is_empty(&self) -> bool { self.cells[self.p_anchor()].next == NIL }

    /// uncolored vertices remaining
    pub fn nb_vertices(&self) -> usize { self.nb_vertices }

    /// edges of the uncolored subgraph
    pub fn nb_edges(&self) -> usize { self.nb_edges }

    /// records the color of v
    pub fn set_color(&mut self, v: VertexId, color: usize) { self.cells[v].color = color; }

    /// colors by vertex (0 where uncolored)
    pub fn colors(&self) -> Vec<usize> {
        self.cells[..self.n].iter().map(|c| c.color).collect()
    }

    /** vertex of maximum degree in P; equal-degree candidates are
    decided by a fair coin flip from the tie-break PRNG. O(|P|).
    P must be non-empty. */
    pub fn max_degree_vertex(&self, rng: &mut Rng) -> VertexId {
        let mut v = self.cells[self.p_anchor()].next;
        debug_assert!(v != NIL);
        let mut w = self.cells[v].next;
        while w != NIL {
            if self.cells[w].degree > self.cells[v].degree
                || (self.cells[w].degree == self.cells[v].degree && rng.bool())
            {
                v = w;
            }
            w = self.cells[w].next;
        }
        v
    }

    /// candidate selection for the current mode. P must be non-empty
    pub fn select_vertex(&self, mode: Mode, rng: &mut Rng) -> VertexId {
        match mode {
            Mode::Sparse => self.select_vertex_sparse(),
            Mode::Dense => self.select_vertex_dense(rng),
        }
    }

    /** vertex of P maximizing (degU desc, degree asc), reading the
    eagerly maintained counters. O(|P|). */
    fn select_vertex_sparse(&self) -> VertexId {
        let mut v = self.cells[self.p_anchor()].next;
        debug_assert!(v != NIL);
        let mut du_max = self.cells[v].deg_u;
        let mut w = self.cells[v].next;
        while w != NIL {
            let du = self.cells[w].deg_u;
            if du > du_max || (du == du_max && self.cells[w].degree < self.cells[v].degree) {
                du_max = du;
                v = w;
            }
            w = self.cells[w].next;
        }
        v
    }

    /** vertex of P maximizing (degU desc, degree asc), recomputing
    degU lazily. The bound opens at the P-degree of a maximum-degree
    vertex; candidates whose recomputation falls under the running
    maximum abort early. */
    fn select_vertex_dense(&self, rng: &mut Rng) -> VertexId {
        let mut v = self.max_degree_vertex(rng);
        let mut du_max = self.count_p_neighbors(v);
        let mut w = self.cells[self.p_anchor()].next;
        while w != NIL {
            let du = self.degree_to_u_bounded(w, du_max);
            if du > du_max || (du == du_max && self.cells[w].degree < self.cells[v].degree) {
                du_max = du;
                v = w;
            }
            w = self.cells[w].next;
        }
        v
    }

    /// number of neighbors of v currently in P
    fn count_p_neighbors(&self, v: VertexId) -> usize {
        let mut du = 0;
        let mut s = self.adj[v][0].next;
        while s != NIL {
            let he = self.adj[v][s];
            du += self.cells[he.node].in_p as usize;
            s = he.next;
        }
        du
    }

    /** degU of w, computed as its remaining degree minus its
    P-neighbors, short-circuiting once the count falls under the
    running maximum. Returns 0 for candidates pruned up front. */
    fn degree_to_u_bounded(&self, w: VertexId, du_max: usize) -> usize {
        let mut du = self.cells[w].degree;
        if du < du_max {
            return 0;
        }
        let mut s = self.adj[w][0].next;
        while s != NIL {
            let he = self.adj[w][s];
            du -= self.cells[he.node].in_p as usize;
            if du < du_max {
                return du;
            }
            s = he.next;
        }
        du
    }

    /** moves every P-neighbor of v into U, then removes v from the
    uncolored subgraph and from P. In Sparse mode the degU counter of
    each vertex adjacent to a moved neighbor is incremented first. */
    pub fn move_neighbors(&mut self, v: VertexId, mode: Mode) {
        let mut s = self.adj[v][0].next;
        while s != NIL {
            let he = self.adj[v][s];
            if self.cells[he.node].in_p {
                let w = he.node;
                if mode == Mode::Sparse {
                    // every vertex that sees w gains a U-neighbor
                    let mut t = self.adj[w][0].next;
                    while t != NIL {
                        let uhe = self.adj[w][t];
                        self.cells[uhe.node].deg_u += 1;
                        t = uhe.next;
                    }
                }
                self.unlink(w);
                self.push_back_u(w);
                self.cells[w].in_p = false;
            }
            s = he.next;
        }
        self.nb_vertices -= 1;
        self.nb_edges -= self.cells[v].degree;
        self.clear_vertex(v);
        self.unlink(v);
    }

    /** replaces P with the contents of U and empties U; the moved
    vertices re-enter P, with their degU counters zeroed in Sparse
    mode. O(|U|). */
    pub fn swap_u_into_p(&mut self, mode: Mode) {
        let pa = self.p_anchor();
        let ua = self.u_anchor();
        let first_u = self.cells[ua].next;
        self.cells[pa].next = first_u;
        if first_u != NIL {
            self.cells[first_u].prev = pa;
        }
        self.cells[ua].next = NIL;
        self.cells[ua].prev = ua;
        let mut w = self.cells[pa].next;
        while w != NIL {
            self.cells[w].in_p = true;
            if mode == Mode::Sparse {
                self.cells[w].deg_u = 0;
            }
            w = self.cells[w].next;
        }
    }

    /// splices a cell out of its membership list
    fn unlink(&mut self, v: VertexId) {
        let VertexCell { prev, next, .. } = self.cells[v];
        self.cells[prev].next = next;
        if next != NIL {
            self.cells[next].prev = prev;
        }
    }

    /// appends a cell at the back of U through the circular anchor
    fn push_back_u(&mut self, w: VertexId) {
        let ua = self.u_anchor();
        let tail = self.cells[ua].prev;
        self.cells[w].next = NIL;
        self.cells[w].prev = tail;
        self.cells[tail].next = w;
        self.cells[ua].prev = w;
    }

    /** removes v from every remaining adjacency list through the
    cross-pointers and decrements the neighbors' degrees. v's own
    arena is left alone: nothing visits it again. O(deg(v)). */
    fn clear_vertex(&mut self, v: VertexId) {
        let mut s = self.adj[v][0].next;
        while s != NIL {
            let he = self.adj[v][s];
            debug_assert!(self.cells[he.node].degree > 0);
            self.cells[he.node].degree -= 1;
            let twin = self.adj[he.node][he.mate_slot];
            self.adj[he.node][twin.prev].next = twin.next;
            if twin.next != NIL {
                self.adj[he.node][twin.next].prev = twin.prev;
            }
            s = he.next;
        }
    }

    #[cfg(test)]
    fn p_members(&self) -> Vec<VertexId> {
        let mut res = Vec::new();
        let mut w = self.cells[self.p_anchor()].next;
        while w != NIL {
            res.push(w);
            w = self.cells[w].next;
        }
        res
    }

    #[cfg(test)]
    fn u_members(&self) -> Vec<VertexId> {
        let mut res = Vec::new();
        let mut w = self.cells[self.u_anchor()].next;
        while w != NIL {
            res.push(w);
            w = self.cells[w].next;
        }
        res
    }
}
