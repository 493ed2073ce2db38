//! Closed-form orbit-count formulas for the combinatorial deriver (Component
//! G), ported from the "Heterogeneous Graphlets" paper equations 19, 23, 26
//! and 30.
//!
//! All quantities are signed: the formulas subtract an already-traversed
//! count from a product of set sizes, and nothing here proves the
//! intermediate result can't dip negative for a pathological input, so
//! callers treat negative as "zero, don't emit" rather than risk an
//! underflow panic on unsigned arithmetic.

#[inline(always)]
/// `C(x, 2)`, the number of unordered pairs drawable from `x` items.
pub(crate) fn binomial_two(x: i64) -> i64 {
    if x < 2 {
        0
    } else {
        x * (x - 1) / 2
    }
}

#[inline(always)]
/// Orbit 4 (4-path, center orbit), equation 19, same-type case.
pub(crate) fn homogeneous_four_path_center(four_cycle_count: i64, si_count: i64, sj_count: i64) -> i64 {
    si_count * sj_count - four_cycle_count
}

#[inline(always)]
/// Orbit 4 (4-path, center orbit), equation 19, cross-type case.
pub(crate) fn heterogeneous_four_path_center(
    four_cycle_count: i64,
    si_t1: i64,
    sj_t1: i64,
    si_t2: i64,
    sj_t2: i64,
) -> i64 {
    si_t1 * sj_t2 + si_t2 * sj_t1 - four_cycle_count
}

#[inline(always)]
/// Orbit 5 (4-star), equation 23, same-type case.
pub(crate) fn homogeneous_four_star(tailed_triangle_tail_count: i64, si_count: i64, sj_count: i64) -> i64 {
    binomial_two(si_count) + binomial_two(sj_count) - tailed_triangle_tail_count
}

#[inline(always)]
/// Orbit 5 (4-star), equation 23, cross-type case.
pub(crate) fn heterogeneous_four_star(
    tailed_triangle_tail_count: i64,
    si_t1: i64,
    si_t2: i64,
    sj_t1: i64,
    sj_t2: i64,
) -> i64 {
    si_t1 * si_t2 + sj_t1 * sj_t2 - tailed_triangle_tail_count
}

#[inline(always)]
/// Orbit 9 (tailed-triangle, tri-edge orbit), equation 26, same-type case.
pub(crate) fn homogeneous_tailed_triangle_tri_edge(
    chordal_cycle_edge_count: i64,
    tij_count: i64,
    si_count: i64,
    sj_count: i64,
) -> i64 {
    tij_count * (si_count + sj_count) - chordal_cycle_edge_count
}

#[inline(always)]
/// Orbit 9 (tailed-triangle, tri-edge orbit), equation 26, cross-type case.
pub(crate) fn heterogeneous_tailed_triangle_tri_edge(
    chordal_cycle_edge_count: i64,
    tij_t1: i64,
    tij_t2: i64,
    si_t1: i64,
    sj_t1: i64,
    si_t2: i64,
    sj_t2: i64,
) -> i64 {
    tij_t1 * (si_t2 + sj_t2) + tij_t2 * (si_t1 + sj_t1) - chordal_cycle_edge_count
}

#[inline(always)]
/// Orbit 11 (chordal-cycle, center orbit), equation 30, same-type case.
pub(crate) fn homogeneous_chordal_cycle_center(four_clique_count: i64, tij_count: i64) -> i64 {
    binomial_two(tij_count) - four_clique_count
}

#[inline(always)]
/// Orbit 11 (chordal-cycle, center orbit), equation 30, cross-type case.
pub(crate) fn heterogeneous_chordal_cycle_center(
    four_clique_count: i64,
    tij_t1: i64,
    tij_t2: i64,
) -> i64 {
    tij_t1 * tij_t2 - four_clique_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_two_of_small_values() {
        assert_eq!(binomial_two(0), 0);
        assert_eq!(binomial_two(1), 0);
        assert_eq!(binomial_two(2), 1);
        assert_eq!(binomial_two(4), 6);
    }

    #[test]
    fn four_path_center_matches_product_minus_cycles() {
        assert_eq!(homogeneous_four_path_center(2, 5, 3), 13);
        assert_eq!(heterogeneous_four_path_center(1, 2, 3, 4, 5), 2 * 5 + 4 * 3 - 1);
    }

    #[test]
    fn four_star_matches_pair_counts_minus_tails() {
        assert_eq!(homogeneous_four_star(1, 4, 3), 6 + 3 - 1);
    }
}
