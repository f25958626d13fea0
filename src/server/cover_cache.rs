use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;

use crate::tags::EmbeddedPicture;

/// Bounded LRU of extracted covers keyed by track id.
///
/// Only successful extractions are stored, so a track without art is re-read
/// on every request.
pub struct CoverCache {
    inner: Mutex<LruCache<String, Arc<EmbeddedPicture>>>,
}

impl CoverCache {
    /// `None` when `capacity` is 0.
    pub fn new(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(|cap| Self {
            inner: Mutex::new(LruCache::new(cap)),
        })
    }

    pub fn get(&self, id: &str) -> Option<Arc<EmbeddedPicture>> {
        let mut cache = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        cache.get(id).cloned()
    }

    pub fn insert(&self, id: &str, picture: Arc<EmbeddedPicture>) {
        let mut cache = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        cache.put(id.to_string(), picture);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|p| p.into_inner()).len()
    }
}
