//! The Motif Hasher: a bijective encoding of `(orbit id, sorted type tuple)`
//! into a short canonical decimal-string key.
//!
//! Two sibling keys are produced for every emission: the **orbit hash**
//! (role-specific) and the **motif hash** (role-collapsed, derived from the
//! orbit id). Sorting the type indices before formatting makes the key
//! invariant under any automorphism of the motif that merely permutes nodes
//! occupying the same orbit; the orbit id itself carries the remaining role
//! information, so nothing is lost.

use std::collections::HashMap;

use crate::error::{HeterogeneousMotifError, Result};
use crate::graph::TypedGraph;

/// Sentinel label used for the absent fourth node of a 3-node motif.
pub const NO_FOURTH_NODE: &str = "--";

/// Maps an orbit id (`1..=12`) to the motif id (`1..=8`) it belongs to.
pub fn motif_id_of_orbit(orbit: u8) -> Result<u8> {
    let motif = match orbit {
        1 => 1,
        2 => 2,
        3 | 4 => 3,
        5 => 4,
        6 => 5,
        7 | 8 | 9 => 6,
        10 | 11 => 7,
        12 => 8,
        _ => return Err(HeterogeneousMotifError::InvalidOrbit { orbit }),
    };
    Ok(motif)
}

/// The number of edges a motif of the given id has, used to correct global
/// counts since every motif instance is emitted once per participating edge.
pub fn edges_in_motif(motif_id: u8) -> u64 {
    match motif_id {
        1 => 2,
        2 | 3 | 4 => 3,
        5 | 6 => 4,
        7 => 5,
        8 => 6,
        _ => unreachable!("motif ids are always derived via motif_id_of_orbit, which rejects out-of-range orbits"),
    }
}

/// A motif/orbit hash produced by [`MotifHasher::hash_motif`]. Both strings
/// are fixed-width decimal keys, fit for use as sparse map keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifHash {
    /// Hash that collapses the orbit id to its motif id.
    pub motif_hash: String,
    /// Hash that keeps the specific orbit id.
    pub orbit_hash: String,
}

/// Decoded form of a hash, for reporting and testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMotif {
    /// The orbit or motif id recovered from the first two digits.
    pub id: u8,
    /// The recovered type labels, sorted; `"--"` for the absent fourth slot
    /// of a 3-node motif.
    pub types: [String; 4],
}

/// Assigns a dense integer index to every node type label, with the
/// numeric-label override: a label whose characters are all decimal digits
/// is assigned its own numeric value as index, keeping hashes stable across
/// runs with purely numeric type labels.
pub struct MotifHasher {
    index_of: HashMap<String, i32>,
    label_of: HashMap<i32, String>,
}

impl MotifHasher {
    /// At most 100 distinct node types are supported (two decimal digits per
    /// type field in the key format).
    pub const MAX_TYPES: usize = 100;

    /// Builds a hasher from the distinct type labels observed in a graph.
    pub fn new<G: TypedGraph>(graph: &G) -> Self {
        let mut index_of = HashMap::new();
        index_of.insert(NO_FOURTH_NODE.to_string(), -1);
        let mut label_of = HashMap::new();
        label_of.insert(-1, NO_FOURTH_NODE.to_string());

        for (i, label) in graph.node_types().iter().enumerate() {
            let index = if label.chars().all(|c| c.is_ascii_digit()) && !label.is_empty() {
                label.parse::<i32>().unwrap_or(i as i32)
            } else {
                i as i32
            };
            index_of.insert(label.clone(), index);
            label_of.insert(index, label.clone());
        }

        Self { index_of, label_of }
    }

    fn index(&self, label: &str) -> i32 {
        self.index_of[label]
    }

    /// Computes the `(motif_hash, orbit_hash)` pair for a motif instance.
    ///
    /// `t_r` is `"--"` for 3-node motifs (triad/triangle); any other value
    /// selects the 4-node key format.
    pub fn hash_motif(&self, orbit: u8, t_i: &str, t_j: &str, t_k: &str, t_r: &str) -> Result<MotifHash> {
        let motif = motif_id_of_orbit(orbit)?;

        if t_r == NO_FOURTH_NODE {
            let mut types = [self.index(t_i), self.index(t_j), self.index(t_k)];
            types.sort_unstable();
            let type_sum = types[0] * 10_000 + types[1] * 100 + types[2];
            let orbit_hash = format!("{:08}--", orbit as i32 * 1_000_000 + type_sum);
            let motif_hash = format!("{:08}--", motif as i32 * 1_000_000 + type_sum);
            Ok(MotifHash {
                motif_hash,
                orbit_hash,
            })
        } else {
            let mut types = [
                self.index(t_i),
                self.index(t_j),
                self.index(t_k),
                self.index(t_r),
            ];
            types.sort_unstable();
            let type_sum =
                types[0] * 1_000_000 + types[1] * 10_000 + types[2] * 100 + types[3];
            let orbit_hash = format!("{:010}", orbit as i64 * 100_000_000 + type_sum as i64);
            let motif_hash = format!("{:010}", motif as i64 * 100_000_000 + type_sum as i64);
            Ok(MotifHash {
                motif_hash,
                orbit_hash,
            })
        }
    }

    /// Decodes a hash string produced by [`Self::hash_motif`] back into its
    /// id and type labels.
    pub fn decode(&self, hash: &str) -> DecodedMotif {
        let id = hash[0..2].parse::<u8>().expect("hash prefix is always two decimal digits");
        let field = |s: &str| -> String {
            if s == NO_FOURTH_NODE {
                NO_FOURTH_NODE.to_string()
            } else {
                let idx = s.parse::<i32>().expect("hash type field is always decimal digits");
                self.label_of[&idx].clone()
            }
        };
        if hash.ends_with(NO_FOURTH_NODE) {
            DecodedMotif {
                id,
                types: [
                    field(&hash[2..4]),
                    field(&hash[4..6]),
                    field(&hash[6..8]),
                    NO_FOURTH_NODE.to_string(),
                ],
            }
        } else {
            DecodedMotif {
                id,
                types: [
                    field(&hash[2..4]),
                    field(&hash[4..6]),
                    field(&hash[6..8]),
                    field(&hash[8..10]),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Hin;

    fn hasher_for(labels: &[&str]) -> MotifHasher {
        let node_types_by_id = labels.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let edges = (1..node_types_by_id.len()).map(|i| (0, i)).collect();
        let hin = Hin::new(node_types_by_id, edges).unwrap();
        MotifHasher::new(&hin)
    }

    #[test]
    fn invalid_orbit_is_rejected() {
        let hasher = hasher_for(&["A", "B"]);
        let err = hasher.hash_motif(13, "A", "B", "A", "--").unwrap_err();
        assert!(matches!(
            err,
            HeterogeneousMotifError::InvalidOrbit { orbit: 13 }
        ));
    }

    #[test]
    fn three_node_key_is_canonical_under_role_preserving_permutation() {
        let hasher = hasher_for(&["A", "B"]);
        let a = hasher.hash_motif(1, "A", "B", "A", "--").unwrap();
        let b = hasher.hash_motif(1, "B", "A", "A", "--").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn four_node_key_is_canonical_under_role_preserving_permutation() {
        let hasher = hasher_for(&["A", "B"]);
        let a = hasher.hash_motif(3, "A", "B", "A", "B").unwrap();
        let b = hasher.hash_motif(3, "B", "A", "B", "A").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn numeric_labels_use_themselves_as_index() {
        let hasher = hasher_for(&["7", "3"]);
        let hash = hasher.hash_motif(2, "7", "3", "7", "--").unwrap();
        // sorted indices are [3, 3, 7] -> type_sum = 3*10000 + 3*100 + 7 = 30307
        assert_eq!(hash.orbit_hash, "02030307--");
    }

    #[test]
    fn decode_round_trips_orbit_and_types() {
        let hasher = hasher_for(&["A", "B"]);
        let hash = hasher.hash_motif(2, "A", "B", "A", "--").unwrap();
        let decoded = hasher.decode(&hash.orbit_hash);
        assert_eq!(decoded.id, 2);
        assert_eq!(decoded.types[3], NO_FOURTH_NODE);
    }

    #[test]
    fn motif_id_table_covers_all_orbits() {
        assert_eq!(motif_id_of_orbit(1).unwrap(), 1);
        assert_eq!(motif_id_of_orbit(2).unwrap(), 2);
        assert_eq!(motif_id_of_orbit(3).unwrap(), 3);
        assert_eq!(motif_id_of_orbit(4).unwrap(), 3);
        assert_eq!(motif_id_of_orbit(5).unwrap(), 4);
        assert_eq!(motif_id_of_orbit(6).unwrap(), 5);
        assert_eq!(motif_id_of_orbit(7).unwrap(), 6);
        assert_eq!(motif_id_of_orbit(8).unwrap(), 6);
        assert_eq!(motif_id_of_orbit(9).unwrap(), 6);
        assert_eq!(motif_id_of_orbit(10).unwrap(), 7);
        assert_eq!(motif_id_of_orbit(11).unwrap(), 7);
        assert_eq!(motif_id_of_orbit(12).unwrap(), 8);
    }
}
