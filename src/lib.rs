pub mod comb;
pub mod count_store;
pub mod dataset;
pub mod enumerator;
pub mod error;
pub mod graph;
pub mod hasher;
mod orbits;
pub mod report;

pub use error::{HeterogeneousMotifError, Result};

pub mod prelude {
    pub use crate::count_store::CountStore;
    pub use crate::enumerator::count_edge;
    pub use crate::error::{HeterogeneousMotifError, Result};
    pub use crate::graph::{Graph, Hin, TypedGraph};
    pub use crate::hasher::{MotifHash, MotifHasher};
}
