//! LRU cache for lexical lookups.
//!
//! Distractor synthesis looks up the same handful of answer words for every
//! sentence that mentions them. The lexicon is immutable, so entries never
//! expire; they are only evicted by capacity.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::network::{LexicalNetwork, Sense};
use crate::parser::PartOfSpeech;

/// Thread-safe LRU cache of sense lists.
pub struct LookupCache {
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, Vec<Sense>>,
    order: Vec<String>,
    max_size: usize,
}

impl LookupCache {
    /// Create a new cache with the given capacity. Capacity 0 disables caching.
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(max_size),
                order: Vec::with_capacity(max_size),
                max_size,
            }),
        }
    }

    /// Get cached senses, marking the key most recently used.
    pub fn get(&self, key: &str) -> Option<Vec<Sense>> {
        let mut inner = self.inner.lock();
        let senses = inner.entries.get(key).cloned()?;
        if let Some(pos) = inner.order.iter().position(|k| k == key) {
            let k = inner.order.remove(pos);
            inner.order.push(k);
        }
        Some(senses)
    }

    /// Insert senses for a key.
    pub fn put(&self, key: String, senses: Vec<Sense>) {
        let mut inner = self.inner.lock();
        if inner.max_size == 0 {
            return;
        }

        // If already present, update and move to end
        if inner.entries.contains_key(&key) {
            inner.entries.insert(key.clone(), senses);
            inner.order.retain(|k| k != &key);
            inner.order.push(key);
            return;
        }

        // Evict oldest if at capacity
        while inner.entries.len() >= inner.max_size && !inner.order.is_empty() {
            let oldest = inner.order.remove(0);
            inner.entries.remove(&oldest);
        }

        inner.order.push(key.clone());
        inner.entries.insert(key, senses);
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Memoizing wrapper around another lexical network.
pub struct CachedLexicon {
    network: Arc<dyn LexicalNetwork>,
    cache: LookupCache,
}

impl CachedLexicon {
    pub fn new(network: Arc<dyn LexicalNetwork>, max_size: usize) -> Self {
        Self {
            network,
            cache: LookupCache::new(max_size),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }
}

fn cache_key(word: &str, pos: Option<PartOfSpeech>) -> String {
    match pos {
        Some(p) => format!("{}|{:?}", word, p),
        None => format!("{}|*", word),
    }
}

impl LexicalNetwork for CachedLexicon {
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<Sense> {
        let key = cache_key(word, pos);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }
        let senses = self.network.senses(word, pos);
        self.cache.put(key, senses.clone());
        senses
    }

    fn is_available(&self) -> bool {
        self.network.is_available()
    }
}
