//! Optimized collection types.
//!
//! Re-exports hash collections backed by AHash, used for per-node and
//! per-listener lookups throughout the workspace.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("drawer", 1);
        assert_eq!(map.get("drawer"), Some(&1));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42u64);
        assert!(set.contains(&42));
    }
}
