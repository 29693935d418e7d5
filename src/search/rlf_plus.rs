use fastrand::Rng;

use crate::color::Solution;
use crate::graph::Graph;
use crate::partition::{Mode, VertexPartition};

/** grows one color class. The class opens on a maximum-degree
candidate (random fair-bit ties), then repeatedly adds the candidate
with the most excluded neighbors (fewest remaining-degree ties first)
until P drains, and closes by re-opening U as the next P. Returns the
size of the class. */
pub(crate) fn new_color_class(
    part: &mut VertexPartition,
    mode: Mode,
    color: usize,
    rng: &mut Rng,
) -> usize {
    let seed = part.max_degree_vertex(rng);
    part.set_color(seed, color);
    part.move_neighbors(seed, mode);
    let mut size = 1;
    while !part.is_empty() {
        let v = part.select_vertex(mode, rng);
        part.set_color(v, color);
        part.move_neighbors(v, mode);
        size += 1;
    }
    part.swap_u_into_p(mode);
    size
}

/// turns a per-vertex color array (colors start at 1) into a partition
pub(crate) fn build_solution(colors: &[usize], nb_colors: usize) -> Solution {
    let mut res = vec![Vec::new(); nb_colors];
    for (v, &c) in colors.iter().enumerate() {
        res[c - 1].push(v);
    }
    res
}

/** colors the instance with RLF over the linked vertex partition,
maintaining every degree-into-U counter eagerly while neighbors move.
Returns the color classes; their number is the bound on χ(G). */
pub fn rlf_plus(inst: &Graph, rng: &mut Rng) -> Solution {
    let mut part = VertexPartition::new(inst);
    let mut remaining = inst.nb_vertices();
    let mut nb_colors = 0;
    while remaining > 0 {
        nb_colors += 1;
        remaining -= new_color_class(&mut part, Mode::Sparse, nb_colors, rng);
    }
    build_solution(&part.colors(), nb_colors)
}
