use std::collections::{HashMap, HashSet};

use crate::models::HeroId;

/// Unordered hero pairs already evaluated during one ranking run
///
/// Ids are interned into a dense index and each pair is stored once under a
/// canonical `(min, max)` key, so lookups never need to try both orders.
#[derive(Debug, Default)]
pub struct ConsideredPairs {
    index: HashMap<HeroId, u32>,
    pairs: HashSet<u64>,
}

impl ConsideredPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a run over `heroes` distinct ids
    pub fn with_capacity(heroes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(heroes),
            pairs: HashSet::new(),
        }
    }

    /// Check if the pair was already considered, in either order
    pub fn contains(&self, a: &HeroId, b: &HeroId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.pairs.contains(&pair_key(a, b)),
            _ => false,
        }
    }

    /// Mark the pair as considered. Returns false if it already was.
    pub fn insert(&mut self, a: &HeroId, b: &HeroId) -> bool {
        let a = self.intern(a);
        let b = self.intern(b);
        self.pairs.insert(pair_key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn intern(&mut self, id: &HeroId) -> u32 {
        if let Some(&slot) = self.index.get(id) {
            return slot;
        }
        let slot = self.index.len() as u32;
        self.index.insert(id.clone(), slot);
        slot
    }
}

#[inline]
fn pair_key(a: u32, b: u32) -> u64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (u64::from(lo) << 32) | u64::from(hi)
}
