use fastrand::Rng;

use crate::graph::Graph;

/** samples a G(n, d) random graph: every ordered pair i < j carries
an edge with probability d. The caller seeds the PRNG, so the same
(n, d, seed) triple always yields the same graph. */
pub fn random_graph(n: usize, d: f64, rng: &mut Rng) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n {
        for j in i + 1..n {
            if rng.f64() < d {
                g.add_edge(i, j);
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_zero() {
        let mut rng = Rng::with_seed(0);
        let g = random_graph(20, 0.0, &mut rng);
        assert_eq!(g.nb_edges(), 0);
    }

    #[test]
    fn test_density_one() {
        let mut rng = Rng::with_seed(0);
        let g = random_graph(20, 1.0, &mut rng);
        assert_eq!(g.nb_edges(), 20 * 19 / 2);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let g1 = random_graph(64, 0.5, &mut Rng::with_seed(42));
        let g2 = random_graph(64, 0.5, &mut Rng::with_seed(42));
        assert_eq!(g1.nb_edges(), g2.nb_edges());
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn test_different_seed_different_graph() {
        let g1 = random_graph(64, 0.5, &mut Rng::with_seed(42));
        let g2 = random_graph(64, 0.5, &mut Rng::with_seed(43));
        assert_ne!(g1.edges(), g2.edges());
    }
}
