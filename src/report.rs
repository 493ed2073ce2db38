//! Human-readable reporting for the `--report` CLI flag: a table of global
//! motif totals, broken down by type tuple.

use std::fmt::Write as _;

use crate::count_store::CountStore;
use crate::hasher::{DecodedMotif, MotifHasher};

/// Motif names by motif id, for the report table only (no counting code
/// depends on these strings).
fn motif_name(motif_id: u8) -> &'static str {
    match motif_id {
        1 => "3-path",
        2 => "triangle",
        3 => "4-path",
        4 => "4-star",
        5 => "4-cycle",
        6 => "tailed triangle",
        7 => "chordal cycle",
        8 => "4-clique",
        _ => "unknown",
    }
}

/// Renders `counts`' global counts as a human-readable table, one row per
/// motif/type-tuple pair, decoded back to motif id and type labels via
/// `hasher.decode` and sorted by `(motif id, type tuple)`.
pub fn render_global_report(counts: &CountStore, hasher: &MotifHasher) -> String {
    let mut rows: Vec<(DecodedMotif, u64)> = counts
        .global_count
        .iter()
        .map(|(hash, count)| (hasher.decode(hash), *count))
        .collect();
    rows.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id).then_with(|| a.types.cmp(&b.types)));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<18} {:<20} {:>12}",
        "id", "motif", "types", "global count"
    );
    for (decoded, count) in rows {
        let _ = writeln!(
            out,
            "{:<4} {:<18} {:<20} {:>12}",
            decoded.id,
            motif_name(decoded.id),
            decoded.types.join(","),
            count
        );
    }
    out
}
