//! The Count Store (Component C): sparse per-edge orbit/motif counts plus
//! the graph-wide global motif totals, with JSON round-tripping.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeterogeneousMotifError, Result};
use crate::hasher::edges_in_motif;

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|source| HeterogeneousMotifError::IOFailure {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer(BufWriter::new(file), value).map_err(|e| {
        HeterogeneousMotifError::IOFailure {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e),
        }
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| HeterogeneousMotifError::IOFailure {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(file).map_err(|e| HeterogeneousMotifError::IOFailure {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Other, e),
    })
}

/// Sparse counts keyed by orbit/motif hash, collected while enumerating a
/// heterogeneous information network.
///
/// `orbit_count` and `local_count` are indexed first by edge id, then by
/// hash string; only hashes actually observed for that edge are present.
/// `global_count` sums `local_count` over every edge, before the
/// once-per-motif correction applied by [`Self::correct_global_counts`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountStore {
    pub orbit_count: HashMap<usize, HashMap<String, u64>>,
    pub local_count: HashMap<usize, HashMap<String, u64>>,
    pub global_count: HashMap<String, u64>,
}

impl CountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one orbit/motif observation for the given edge.
    ///
    /// Either hash may be omitted: the combinatorial deriver's lookups of
    /// already-populated orbit counts pass only `orbit_hash` when they need
    /// to read `g_6`/`g_7`/`g_10`/`g_12` without mutating `local_count`, but
    /// every *emission* in this crate passes both.
    pub fn update(&mut self, edge_id: usize, motif_hash: Option<&str>, orbit_hash: Option<&str>, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(orbit_hash) = orbit_hash {
            *self
                .orbit_count
                .entry(edge_id)
                .or_default()
                .entry(orbit_hash.to_string())
                .or_insert(0) += count;
        }
        if let Some(motif_hash) = motif_hash {
            *self
                .local_count
                .entry(edge_id)
                .or_default()
                .entry(motif_hash.to_string())
                .or_insert(0) += count;
            *self.global_count.entry(motif_hash.to_string()).or_insert(0) += count;
        }
    }

    /// Returns the orbit count already recorded for `edge_id` under
    /// `orbit_hash`, or 0. Used by the combinatorial deriver to read back
    /// `g_6`, `g_7`, `g_10`, `g_12` without double-emitting them.
    pub fn orbit_count_for(&self, edge_id: usize, orbit_hash: &str) -> u64 {
        self.orbit_count
            .get(&edge_id)
            .and_then(|m| m.get(orbit_hash))
            .copied()
            .unwrap_or(0)
    }

    /// Merges another store's counts into this one. Used to combine
    /// thread-local accumulators after a parallel edge sweep.
    pub fn merge(&mut self, other: CountStore) {
        for (edge_id, hashes) in other.orbit_count {
            let entry = self.orbit_count.entry(edge_id).or_default();
            for (hash, count) in hashes {
                *entry.entry(hash).or_insert(0) += count;
            }
        }
        for (edge_id, hashes) in other.local_count {
            let entry = self.local_count.entry(edge_id).or_default();
            for (hash, count) in hashes {
                *entry.entry(hash).or_insert(0) += count;
            }
        }
        for (hash, count) in other.global_count {
            *self.global_count.entry(hash).or_insert(0) += count;
        }
    }

    /// Divides every global count by the number of edges its motif has,
    /// since full enumeration emits a motif instance once per participating
    /// edge. Must be called exactly once, after enumeration is complete.
    pub fn correct_global_counts(&mut self) -> Result<()> {
        for (motif_hash, count) in self.global_count.iter_mut() {
            let motif_id: u8 = motif_hash[0..2]
                .parse()
                .expect("motif hash prefix is always two decimal digits");
            let edges = edges_in_motif(motif_id);
            if *count % edges != 0 {
                return Err(HeterogeneousMotifError::InvariantViolation {
                    motif_hash: motif_hash.clone(),
                    count: *count,
                    edges_in_motif: edges,
                });
            }
            *count /= edges;
        }
        Ok(())
    }

    /// Returns the total motif count, either global (`edge_id: None`) or
    /// local to a single edge.
    pub fn get_total_count(&self, edge_id: Option<usize>) -> u64 {
        match edge_id {
            None => self.global_count.values().sum(),
            Some(edge_id) => self
                .local_count
                .get(&edge_id)
                .map(|m| m.values().sum())
                .unwrap_or(0),
        }
    }

    /// Collapses every hash to its first two characters (the orbit or
    /// motif id, discarding the type tuple), aggregating counts across
    /// types.
    pub fn derive_untyped_dict(&self) -> CountStore {
        let mut untyped = CountStore::new();
        for (edge_id, hashes) in &self.orbit_count {
            let entry = untyped.orbit_count.entry(*edge_id).or_default();
            for (hash, count) in hashes {
                *entry.entry(hash[0..2].to_string()).or_insert(0) += count;
            }
        }
        for (edge_id, hashes) in &self.local_count {
            let entry = untyped.local_count.entry(*edge_id).or_default();
            for (hash, count) in hashes {
                *entry.entry(hash[0..2].to_string()).or_insert(0) += count;
            }
        }
        for (hash, count) in &self.global_count {
            *untyped
                .global_count
                .entry(hash[0..2].to_string())
                .or_insert(0) += count;
        }
        untyped
    }

    /// Writes the three conventional JSON files (`orbit_counts.json`,
    /// `local_counts.json`, `global_counts.json`) into `directory`.
    pub fn dump_to_json(&self, directory: &Path) -> Result<()> {
        write_json(&directory.join("orbit_counts.json"), &self.orbit_count)?;
        write_json(&directory.join("local_counts.json"), &self.local_count)?;
        write_json(&directory.join("global_counts.json"), &self.global_count)?;
        Ok(())
    }

    /// Loads a store previously written by [`Self::dump_to_json`].
    pub fn load_from_json(directory: &Path) -> Result<CountStore> {
        Ok(CountStore {
            orbit_count: read_json(&directory.join("orbit_counts.json"))?,
            local_count: read_json(&directory.join("local_counts.json"))?,
            global_count: read_json(&directory.join("global_counts.json"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_accumulates_local_and_global() {
        let mut store = CountStore::new();
        store.update(0, Some("01000102--"), Some("01000102--"), 1);
        store.update(0, Some("01000102--"), Some("01000102--"), 2);
        assert_eq!(store.local_count[&0]["01000102--"], 3);
        assert_eq!(store.global_count["01000102--"], 3);
    }

    #[test]
    fn zero_count_is_a_no_op() {
        let mut store = CountStore::new();
        store.update(0, Some("01000102--"), Some("01000102--"), 0);
        assert!(store.global_count.is_empty());
    }

    #[test]
    fn correct_global_counts_divides_by_edge_count() {
        let mut store = CountStore::new();
        store.update(0, Some("01000102--"), None, 4);
        store.correct_global_counts().unwrap();
        assert_eq!(store.global_count["01000102--"], 2);
    }

    #[test]
    fn correct_global_counts_rejects_uneven_division() {
        let mut store = CountStore::new();
        store.update(0, Some("01000102--"), None, 3);
        let err = store.correct_global_counts().unwrap_err();
        assert!(matches!(
            err,
            HeterogeneousMotifError::InvariantViolation { .. }
        ));
    }

    #[test]
    fn derive_untyped_dict_collapses_type_tuple() {
        let mut store = CountStore::new();
        store.update(0, Some("01000102--"), Some("01000102--"), 1);
        store.update(0, Some("01030405--"), Some("01030405--"), 2);
        let untyped = store.derive_untyped_dict();
        assert_eq!(untyped.global_count["01"], 3);
    }

    #[test]
    fn merge_adds_counts_from_both_stores() {
        let mut a = CountStore::new();
        a.update(0, Some("01000102--"), Some("01000102--"), 1);
        let mut b = CountStore::new();
        b.update(0, Some("01000102--"), Some("01000102--"), 2);
        a.merge(b);
        assert_eq!(a.global_count["01000102--"], 3);
    }

    #[test]
    fn load_from_json_round_trips_dump_to_json() {
        let mut store = CountStore::new();
        // "01..." is motif 1 (2 edges in motif); "02..." is motif 2 (3
        // edges): totals below are evenly divisible by both so the
        // correction pass below doesn't trip `InvariantViolation`.
        store.update(0, Some("01000102--"), Some("01000102--"), 2);
        store.update(0, Some("02000203--"), Some("02000203--"), 3);
        store.update(1, Some("01000102--"), Some("03010203"), 2);
        store.correct_global_counts().unwrap();

        let dir = std::env::temp_dir().join("heterogeneous_motifs_test_count_store_round_trip");
        std::fs::create_dir_all(&dir).unwrap();
        store.dump_to_json(&dir).unwrap();
        let loaded = CountStore::load_from_json(&dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.orbit_count, store.orbit_count);
        assert_eq!(loaded.local_count, store.local_count);
        assert_eq!(loaded.global_count, store.global_count);
    }
}
