//! Hash states and the `hashbrown` map used with them.

mod hasher;

pub use hasher::{FixedHashState, NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

pub use foldhash;
pub use hashbrown;
