use fastrand::Rng;

use crate::color::Solution;
use crate::graph::Graph;
use crate::partition::{Mode, VertexPartition};

use super::rlf_plus::{build_solution, new_color_class};

/** colors the instance with RLF, choosing the update discipline per
color class: when the edge density of the remaining uncolored
subgraph reaches `density_threshold`, the eager degree-into-U
bookkeeping is dropped in favor of lazy recomputation (Dense mode).

With the default threshold 0.0 every class runs Dense; a threshold
above 1.0 never triggers and the run matches `rlf_plus`. On a single
remaining vertex the density is 0/0: the NaN comparison fails and the
class falls back to Sparse.
*/
pub fn rlf_adaptive(inst: &Graph, rng: &mut Rng, density_threshold: f64) -> Solution {
    let mut part = VertexPartition::new(inst);
    let mut remaining = inst.nb_vertices();
    let mut nb_colors = 0;
    while remaining > 0 {
        let n = part.nb_vertices() as f64;
        let m = part.nb_edges() as f64;
        let density = m / (n * (n - 1.0) / 2.0);
        let mode = if density >= density_threshold { Mode::Dense } else { Mode::Sparse };
        nb_colors += 1;
        remaining -= new_color_class(&mut part, mode, nb_colors, rng);
    }
    build_solution(&part.colors(), nb_colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::generator::random_graph;
    use crate::search::fixtures::*;
    use crate::search::rlf_flat::rlf_flat;
    use crate::search::rlf_plus::rlf_plus;

    #[test]
    fn test_single_vertex() {
        let g = Graph::new(1);
        let sol = rlf_adaptive(&g, &mut Rng::with_seed(0), 0.0);
        assert_eq!(sol, vec![vec![0]]);
    }

    #[test]
    fn test_complete_graph_both_modes() {
        let g = complete(4);
        for &dd in &[0.0, 0.5, 2.0] {
            let sol = rlf_adaptive(&g, &mut Rng::with_seed(1), dd);
            assert_eq!(checker(&g, &sol), CheckerResult::Ok(4));
        }
    }

    #[test]
    fn test_cycle5_both_modes() {
        let g = cycle(5);
        for seed in 0..5 {
            for &dd in &[0.0, 0.3, 2.0] {
                let sol = rlf_adaptive(&g, &mut Rng::with_seed(seed), dd);
                assert_eq!(checker(&g, &sol), CheckerResult::Ok(3));
            }
        }
    }

    #[test]
    fn test_bipartite_two_colors() {
        let g = complete_bipartite(3, 3);
        let sol = rlf_adaptive(&g, &mut Rng::with_seed(9), 0.0);
        assert_eq!(checker(&g, &sol), CheckerResult::Ok(2));
    }

    #[test]
    fn test_petersen() {
        let g = petersen();
        let sol = rlf_adaptive(&g, &mut Rng::with_seed(21), 0.0);
        let k = sol.len();
        assert!((3..=4).contains(&k));
        assert_eq!(checker(&g, &sol), CheckerResult::Ok(k));
    }

    #[test]
    fn test_same_seed_same_coloring() {
        let g = petersen();
        let s1 = rlf_adaptive(&g, &mut Rng::with_seed(7), 0.4);
        let s2 = rlf_adaptive(&g, &mut Rng::with_seed(7), 0.4);
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_variants_agree_on_easy_instances() {
        let instances = vec![
            Graph::new(4),
            complete(5),
            complete_bipartite(3, 4),
            complete_bipartite(3, 3),
            cycle(5),
            cycle(7),
        ];
        for g in &instances {
            let k_flat = rlf_flat(g, &mut Rng::with_seed(1)).len();
            let k_plus = rlf_plus(g, &mut Rng::with_seed(1)).len();
            let k_sparse = rlf_adaptive(g, &mut Rng::with_seed(1), 2.0).len();
            let k_dense = rlf_adaptive(g, &mut Rng::with_seed(1), 0.0).len();
            assert_eq!(k_flat, k_plus);
            assert_eq!(k_plus, k_sparse);
            assert_eq!(k_sparse, k_dense);
        }
    }

    #[test]
    fn test_random_graph_proper_and_bounded() {
        let g = random_graph(64, 0.5, &mut Rng::with_seed(42));
        for &dd in &[0.0, 0.5, 2.0] {
            let sol = rlf_adaptive(&g, &mut Rng::with_seed(42), dd);
            let k = sol.len();
            assert_eq!(checker(&g, &sol), CheckerResult::Ok(k));
            assert!(k <= g.max_degree() + 1);
        }
        let sol_flat = rlf_flat(&g, &mut Rng::with_seed(42));
        assert_eq!(checker(&g, &sol_flat), CheckerResult::Ok(sol_flat.len()));
        let sol_plus = rlf_plus(&g, &mut Rng::with_seed(42));
        assert_eq!(checker(&g, &sol_plus), CheckerResult::Ok(sol_plus.len()));
    }
}
