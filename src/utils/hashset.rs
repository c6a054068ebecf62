//! The hash-set used throughout this crate.

/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;
