//! # Primitive Cache
//!
//! Memoizes primitive meshes by shape and parameters. Every generator is
//! deterministic, so a cached mesh is indistinguishable from a rebuilt one.
//!
//! ## Features
//!
//! - **Parameter-based keys**: Shape name plus its formatted parameters
//! - **LRU eviction**: Least recently used eviction when full
//! - **Statistics**: Track hit/miss rates for tuning
//!
//! ## Example
//!
//! ```rust
//! use primitive_mesh::cache::MeshCache;
//! use primitive_mesh::Shape;
//!
//! let mut cache = MeshCache::new(16);
//! let shape = Shape::Icosahedron { subdivide: 3 };
//!
//! let first = cache.get_or_build(&shape).unwrap();
//! let second = cache.get_or_build(&shape).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::shape::{build_shape_with_config, Shape};
use config::constants::DEFAULT_CACHE_CAPACITY;
use config::MeshConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache key for mesh lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(pub String);

impl CacheKey {
    /// Creates a new cache key from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Creates the key for a shape description.
    ///
    /// Floats are formatted to 10 decimals so keys are stable across
    /// equal-valued inputs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_mesh::cache::CacheKey;
    /// use primitive_mesh::Shape;
    ///
    /// let key = CacheKey::for_shape(&Shape::Cylinder { slices: 16 });
    /// assert_eq!(key.0, "cylinder:s=16");
    /// ```
    pub fn for_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Icosahedron { subdivide }
            | Shape::Octahedron { subdivide }
            | Shape::Pyramid { subdivide } => {
                Self(format!("{}:d={}", shape.name(), subdivide))
            }
            Shape::Cube => Self::new("cube"),
            Shape::Box { limits } => Self(format!(
                "box:x={:.10},{:.10}:y={:.10},{:.10}:z={:.10},{:.10}",
                limits[0], limits[1], limits[2], limits[3], limits[4], limits[5]
            )),
            Shape::Disk { slices } | Shape::Cone { slices } | Shape::Cylinder { slices } => {
                Self(format!("{}:s={}", shape.name(), slices))
            }
            Shape::Tray { width, depth } => {
                Self(format!("tray:w={:.10}:d={:.10}", width, depth))
            }
        }
    }
}

/// Cache entry with metadata.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached mesh
    mesh: Arc<Mesh>,
    /// Access stamp for LRU
    last_access: u64,
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Total entries stored
    pub total_stored: u64,
}

impl CacheStats {
    /// Computes the hit rate (0.0 to 1.0), or 0.0 if there were no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Primitive mesh cache with LRU eviction.
///
/// Meshes are shared as `Arc<Mesh>`; callers that need to modify one clone
/// it first.
pub struct MeshCache {
    /// Cached entries
    entries: HashMap<CacheKey, CacheEntry>,
    /// Maximum number of entries
    max_entries: usize,
    /// Monotonic access counter for LRU ordering
    total_accesses: u64,
    /// Limits applied when building on a miss
    config: MeshConfig,
    /// Statistics
    stats: CacheStats,
}

impl MeshCache {
    /// Creates a new cache with the specified capacity and default config.
    pub fn new(max_entries: usize) -> Self {
        Self::with_config(max_entries, MeshConfig::default())
    }

    /// Creates a new cache that builds missing meshes under `config`.
    pub fn with_config(max_entries: usize, config: MeshConfig) -> Self {
        Self {
            entries: HashMap::with_capacity(max_entries),
            max_entries,
            total_accesses: 0,
            config,
            stats: CacheStats::default(),
        }
    }

    /// Gets a mesh from the cache.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<Mesh>> {
        self.total_accesses += 1;

        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_access = self.total_accesses;
            self.stats.hits += 1;
            log::trace!("mesh cache hit: {}", key.0);
            Some(Arc::clone(&entry.mesh))
        } else {
            self.stats.misses += 1;
            log::trace!("mesh cache miss: {}", key.0);
            None
        }
    }

    /// Puts a mesh into the cache, evicting least recently used entries if
    /// at capacity. Returns the shared handle to the stored mesh.
    pub fn put(&mut self, key: CacheKey, mesh: Mesh) -> Arc<Mesh> {
        let mesh = Arc::new(mesh);
        if self.max_entries == 0 {
            return mesh;
        }

        while !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_lru();
        }

        self.total_accesses += 1;
        self.entries.insert(
            key,
            CacheEntry {
                mesh: Arc::clone(&mesh),
                last_access: self.total_accesses,
            },
        );
        self.stats.total_stored += 1;

        mesh
    }

    /// Returns the cached mesh for `shape`, building and storing it on a
    /// miss. Build failures are returned and not cached.
    pub fn get_or_build(&mut self, shape: &Shape) -> Result<Arc<Mesh>, MeshError> {
        let key = CacheKey::for_shape(shape);
        if let Some(mesh) = self.get(&key) {
            return Ok(mesh);
        }

        let mesh = build_shape_with_config(shape, &self.config)?;
        Ok(self.put(key, mesh))
    }

    /// Evicts the least recently used entry.
    fn evict_lru(&mut self) {
        let lru_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());

        if let Some(key) = lru_key {
            log::debug!("mesh cache evicting {}", key.0);
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }

    /// Returns the current number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all cached entries and resets the statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_for_shape() {
        let key1 = CacheKey::for_shape(&Shape::Icosahedron { subdivide: 2 });
        let key2 = CacheKey::for_shape(&Shape::Icosahedron { subdivide: 2 });
        let key3 = CacheKey::for_shape(&Shape::Octahedron { subdivide: 2 });

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_eq!(key1.0, "icosahedron:d=2");
    }

    #[test]
    fn test_cache_key_box_limits() {
        let a = CacheKey::for_shape(&Shape::Box {
            limits: [0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        });
        let b = CacheKey::for_shape(&Shape::Box {
            limits: [0.0, 1.0, 0.0, 1.0, 0.0, 2.0],
        });
        assert_ne!(a, b);
    }

    #[test]
    fn test_cache_get_or_build() {
        let mut cache = MeshCache::new(4);
        let shape = Shape::Cylinder { slices: 8 };

        let first = cache.get_or_build(&shape).unwrap();
        assert_eq!(first.vertex_count(), 16);
        assert_eq!(cache.stats().misses, 1);

        let second = cache.get_or_build(&shape).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().hits, 1);
        assert!((cache.stats().hit_rate() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_cache_does_not_store_errors() {
        let mut cache = MeshCache::new(4);
        let result = cache.get_or_build(&Shape::Disk { slices: 1 });
        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_respects_config() {
        let config = MeshConfig::new(8, 1).unwrap();
        let mut cache = MeshCache::with_config(4, config);
        assert!(cache
            .get_or_build(&Shape::Icosahedron { subdivide: 2 })
            .is_err());
    }

    #[test]
    fn test_cache_eviction() {
        let mut cache = MeshCache::new(3);

        for slices in 3..6 {
            cache.get_or_build(&Shape::Disk { slices }).unwrap();
        }
        assert_eq!(cache.len(), 3);

        // Touch disk 3 so disk 4 becomes least recently used
        cache.get_or_build(&Shape::Disk { slices: 3 }).unwrap();
        cache.get_or_build(&Shape::Disk { slices: 10 }).unwrap();

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().evictions, 1);
        assert!(cache
            .get(&CacheKey::for_shape(&Shape::Disk { slices: 4 }))
            .is_none());
        assert!(cache
            .get(&CacheKey::for_shape(&Shape::Disk { slices: 3 }))
            .is_some());
    }

    #[test]
    fn test_cache_replace_does_not_evict() {
        let mut cache = MeshCache::new(1);
        let key = CacheKey::new("cube");
        cache.put(key.clone(), Mesh::new());
        cache.put(key, crate::primitives::create_cube());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_zero_capacity_cache_stores_nothing() {
        let mut cache = MeshCache::new(0);
        let mesh = cache.get_or_build(&Shape::Cube).unwrap();
        assert_eq!(mesh.face_count(), 12);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = MeshCache::default();
        cache.get_or_build(&Shape::Cube).unwrap();
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear_resets_stats() {
        let mut cache = MeshCache::default();
        cache.get_or_build(&Shape::Cube).unwrap();
        cache.get_or_build(&Shape::Cube).unwrap();
        assert_eq!(cache.stats().hits, 1);

        cache.clear();
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 0);
        assert_eq!(cache.stats().total_stored, 0);

        cache.get_or_build(&Shape::Cube).unwrap();
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hit_rate(), 0.0);
    }
}
