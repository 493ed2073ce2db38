//! The per-edge motif enumerator (Components D, E, F): partitions an edge's
//! 2-neighborhood into Sᵢ, Sⱼ, Tᵢⱼ, emits every 3-node motif directly, and
//! every 4-node motif either by explicit traversal or, in combinatorial
//! mode, by a mix of traversal (orbits 6, 7, 8, 10, 12) and closed-form
//! derivation (orbits 4, 5, 9, 11).

use std::collections::HashSet;

use crate::comb::derive_comb_counts;
use crate::count_store::CountStore;
use crate::graph::TypedGraph;
use crate::hasher::{MotifHasher, NO_FOURTH_NODE};
use crate::Result;

/// Enumerates every 3- and 4-node motif the edge at `edge_id` participates
/// in, recording orbit and motif counts into a fresh [`CountStore`] entry
/// for that edge.
///
/// `comb` selects whether orbits 4, 5, 9, 11 are derived algebraically
/// (faster) or traversed explicitly (the two must agree; this is exercised
/// by the combinatorial-equivalence tests).
pub fn count_edge<G: TypedGraph>(
    graph: &G,
    edge_id: usize,
    hasher: &MotifHasher,
    comb: bool,
    counts: &mut CountStore,
) -> Result<()> {
    let (i, j) = graph.edge(edge_id);
    let t_i = graph.type_of(i);
    let t_j = graph.type_of(j);

    let mut si: HashSet<usize> = graph.neighbors(i).filter(|&k| k != j).collect();
    let mut sj: HashSet<usize> = HashSet::new();
    let mut tij: HashSet<usize> = HashSet::new();

    for k in graph.neighbors(j) {
        if k == i {
            continue;
        }
        let t_k = graph.type_of(k);
        if si.remove(&k) {
            tij.insert(k);
            let hash = hasher.hash_motif(2, t_i, t_j, t_k, NO_FOURTH_NODE)?;
            counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
        } else {
            sj.insert(k);
            let hash = hasher.hash_motif(1, t_i, t_j, t_k, NO_FOURTH_NODE)?;
            counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
        }
    }

    for &k in &si {
        let t_k = graph.type_of(k);
        let hash = hasher.hash_motif(1, t_i, t_j, t_k, NO_FOURTH_NODE)?;
        counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
    }

    count_path_based(graph, edge_id, i, j, t_i, t_j, &si, &sj, hasher, comb, counts)?;
    count_triangle_based(
        graph, edge_id, i, j, t_i, t_j, &si, &sj, &tij, hasher, comb, counts,
    )?;

    if comb {
        derive_comb_counts(graph, edge_id, t_i, t_j, &si, &sj, &tij, hasher, counts)?;
    }

    Ok(())
}

/// Component E: path-based 4-node motifs (orbits 3, 4, 5, 6, 7).
#[allow(clippy::too_many_arguments)]
fn count_path_based<G: TypedGraph>(
    graph: &G,
    edge_id: usize,
    i: usize,
    j: usize,
    t_i: &str,
    t_j: &str,
    si: &HashSet<usize>,
    sj: &HashSet<usize>,
    hasher: &MotifHasher,
    comb: bool,
    counts: &mut CountStore,
) -> Result<()> {
    for &k in si {
        let t_k = graph.type_of(k);
        for r in graph.neighbors(k) {
            if r == i || r == j {
                continue;
            }
            let t_r = graph.type_of(r);
            if !graph.is_connected(r, i) && !graph.is_connected(r, j) {
                let hash = hasher.hash_motif(3, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            } else if si.contains(&r) && r < k {
                let hash = hasher.hash_motif(7, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            }
        }

        if !comb {
            for &r in si {
                if r != j && r < k && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(5, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
            for &r in sj {
                if r != i && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(4, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
        }
    }

    for &k in sj {
        let t_k = graph.type_of(k);
        for r in graph.neighbors(k) {
            if r == i || r == j {
                continue;
            }
            let t_r = graph.type_of(r);
            if !graph.is_connected(r, i) && !graph.is_connected(r, j) {
                let hash = hasher.hash_motif(3, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            } else if sj.contains(&r) && r < k {
                let hash = hasher.hash_motif(7, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            } else if si.contains(&r) {
                // No `r < k` guard: Sᵢ and Sⱼ are disjoint, so only this side
                // of the walk ever visits a given (k, r) 4-cycle pair.
                let hash = hasher.hash_motif(6, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            }
        }

        if !comb {
            for &r in sj {
                if r != i && r < k && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(5, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
        }
    }

    Ok(())
}

/// Component F: triangle-based 4-node motifs (orbits 8, 9, 10, 11, 12).
#[allow(clippy::too_many_arguments)]
fn count_triangle_based<G: TypedGraph>(
    graph: &G,
    edge_id: usize,
    i: usize,
    j: usize,
    t_i: &str,
    t_j: &str,
    si: &HashSet<usize>,
    sj: &HashSet<usize>,
    tij: &HashSet<usize>,
    hasher: &MotifHasher,
    comb: bool,
    counts: &mut CountStore,
) -> Result<()> {
    for &k in tij {
        let t_k = graph.type_of(k);
        for r in graph.neighbors(k) {
            if r == i || r == j {
                continue;
            }
            let t_r = graph.type_of(r);
            if tij.contains(&r) && r < k {
                let hash = hasher.hash_motif(12, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            } else if si.contains(&r) || sj.contains(&r) {
                let hash = hasher.hash_motif(10, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            } else if !tij.contains(&r) {
                let hash = hasher.hash_motif(8, t_i, t_j, t_k, t_r)?;
                counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
            }
        }

        if !comb {
            for &r in tij {
                if r < k && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(11, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
            for &r in si {
                if r != j && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(9, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
            for &r in sj {
                if r != i && !graph.is_connected(r, k) {
                    let t_r = graph.type_of(r);
                    let hash = hasher.hash_motif(9, t_i, t_j, t_k, t_r)?;
                    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), 1);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Hin;

    fn single_type_graph(edges: Vec<(usize, usize)>, num_nodes: usize) -> Hin {
        Hin::new(vec!["A".to_string(); num_nodes], edges).unwrap()
    }

    #[test]
    fn three_path_emits_two_orbit_one_instances() {
        // 0 - 1 - 2, edge (0,1): node 2 is a Sj member attached to 1.
        let hin = single_type_graph(vec![(0, 1), (1, 2)], 3);
        let hasher = MotifHasher::new(&hin);
        let mut counts = CountStore::new();
        count_edge(&hin, 0, &hasher, true, &mut counts).unwrap();
        let three_path = hasher.hash_motif(1, "A", "A", "A", NO_FOURTH_NODE).unwrap();
        assert_eq!(counts.local_count[&0][&three_path.motif_hash], 1);
    }

    #[test]
    fn triangle_emits_orbit_two() {
        let hin = single_type_graph(vec![(0, 1), (1, 2), (0, 2)], 3);
        let hasher = MotifHasher::new(&hin);
        let mut counts = CountStore::new();
        count_edge(&hin, 0, &hasher, true, &mut counts).unwrap();
        let triangle = hasher.hash_motif(2, "A", "A", "A", NO_FOURTH_NODE).unwrap();
        assert_eq!(counts.local_count[&0][&triangle.motif_hash], 1);
    }

    #[test]
    fn four_clique_emits_orbit_twelve_once_per_edge() {
        let hin = single_type_graph(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)], 4);
        let hasher = MotifHasher::new(&hin);
        let clique = hasher.hash_motif(12, "A", "A", "A", "A").unwrap();
        for edge_id in 0..hin.num_edges() {
            let mut counts = CountStore::new();
            count_edge(&hin, edge_id, &hasher, true, &mut counts).unwrap();
            assert_eq!(counts.local_count[&edge_id][&clique.motif_hash], 1);
        }
    }

    #[test]
    fn comb_mode_matches_explicit_mode() {
        // A chordal cycle: 0-1-2-3-0 plus diagonal 0-2.
        let hin = single_type_graph(vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)], 4);
        let hasher = MotifHasher::new(&hin);
        for edge_id in 0..hin.num_edges() {
            let mut explicit = CountStore::new();
            count_edge(&hin, edge_id, &hasher, false, &mut explicit).unwrap();
            let mut combinatorial = CountStore::new();
            count_edge(&hin, edge_id, &hasher, true, &mut combinatorial).unwrap();
            assert_eq!(
                explicit.local_count.get(&edge_id),
                combinatorial.local_count.get(&edge_id)
            );
        }
    }
}
