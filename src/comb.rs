//! Component G: the combinatorial deriver. Computes orbit counts 4, 5, 9,
//! 11 algebraically from the already-traversed counts of orbits 6, 7, 10,
//! 12, following the "Heterogeneous Graphlets" equations 19, 23, 26, 30.

use std::collections::HashSet;

use crate::count_store::CountStore;
use crate::graph::TypedGraph;
use crate::hasher::MotifHasher;
use crate::orbits::{
    binomial_two, heterogeneous_chordal_cycle_center, heterogeneous_four_path_center,
    heterogeneous_four_star, heterogeneous_tailed_triangle_tri_edge,
    homogeneous_chordal_cycle_center, homogeneous_four_path_center, homogeneous_four_star,
    homogeneous_tailed_triangle_tri_edge,
};
use crate::Result;

#[allow(clippy::too_many_arguments)]
pub fn derive_comb_counts<G: TypedGraph>(
    graph: &G,
    edge_id: usize,
    t_i: &str,
    t_j: &str,
    si: &HashSet<usize>,
    sj: &HashSet<usize>,
    tij: &HashSet<usize>,
    hasher: &MotifHasher,
    counts: &mut CountStore,
) -> Result<()> {
    let mut types: Vec<&String> = graph.node_types().iter().collect();
    types.sort();

    for (idx, &t1) in types.iter().enumerate() {
        for &t2 in &types[idx..] {
            let si_t1 = count_with_type(graph, si, t1);
            let si_t2 = count_with_type(graph, si, t2);
            let sj_t1 = count_with_type(graph, sj, t1);
            let sj_t2 = count_with_type(graph, sj, t2);
            let tij_t1 = count_with_type(graph, tij, t1);
            let tij_t2 = count_with_type(graph, tij, t2);

            let h6 = hasher.hash_motif(6, t_i, t_j, t1, t2)?;
            let g6 = counts.orbit_count_for(edge_id, &h6.orbit_hash) as i64;
            let count_4 = if t1 == t2 {
                homogeneous_four_path_center(g6, si_t1, sj_t1)
            } else {
                heterogeneous_four_path_center(g6, si_t1, sj_t1, si_t2, sj_t2)
            };
            emit(counts, edge_id, hasher, 4, t_i, t_j, t1, t2, count_4)?;

            let h7 = hasher.hash_motif(7, t_i, t_j, t1, t2)?;
            let g7 = counts.orbit_count_for(edge_id, &h7.orbit_hash) as i64;
            let count_5 = if t1 == t2 {
                homogeneous_four_star(g7, si_t1, sj_t1)
            } else {
                heterogeneous_four_star(g7, si_t1, si_t2, sj_t1, sj_t2)
            };
            emit(counts, edge_id, hasher, 5, t_i, t_j, t1, t2, count_5)?;

            let h10 = hasher.hash_motif(10, t_i, t_j, t1, t2)?;
            let g10 = counts.orbit_count_for(edge_id, &h10.orbit_hash) as i64;
            let count_9 = if t1 == t2 {
                homogeneous_tailed_triangle_tri_edge(g10, tij_t1, si_t1, sj_t1)
            } else {
                heterogeneous_tailed_triangle_tri_edge(
                    g10, tij_t1, tij_t2, si_t1, sj_t1, si_t2, sj_t2,
                )
            };
            emit(counts, edge_id, hasher, 9, t_i, t_j, t1, t2, count_9)?;

            let h12 = hasher.hash_motif(12, t_i, t_j, t1, t2)?;
            let g12 = counts.orbit_count_for(edge_id, &h12.orbit_hash) as i64;
            let count_11 = if t1 == t2 {
                homogeneous_chordal_cycle_center(g12, tij_t1)
            } else {
                heterogeneous_chordal_cycle_center(g12, tij_t1, tij_t2)
            };
            emit(counts, edge_id, hasher, 11, t_i, t_j, t1, t2, count_11)?;
        }
    }

    Ok(())
}

fn count_with_type<G: TypedGraph>(graph: &G, nodes: &HashSet<usize>, label: &str) -> i64 {
    nodes.iter().filter(|&&n| graph.type_of(n) == label).count() as i64
}

/// Emits `count`, guarded exactly like the reference formulas: a
/// non-positive result means "not present", not an error.
#[allow(clippy::too_many_arguments)]
fn emit(
    counts: &mut CountStore,
    edge_id: usize,
    hasher: &MotifHasher,
    orbit: u8,
    t_i: &str,
    t_j: &str,
    t1: &str,
    t2: &str,
    count: i64,
) -> Result<()> {
    if count <= 0 {
        return Ok(());
    }
    let hash = hasher.hash_motif(orbit, t_i, t_j, t1, t2)?;
    counts.update(edge_id, Some(&hash.motif_hash), Some(&hash.orbit_hash), count as u64);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_two_matches_pair_count() {
        assert_eq!(binomial_two(3), 3);
    }
}
