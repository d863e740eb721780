//! Memoization of resolved topic lists.
//!
//! Entries are keyed by the raw (course, subject, language) triple exactly as
//! callers send it, so differently spelled but equivalent names occupy separate
//! slots. Entries expire after a TTL and the cache is bounded; when full, the
//! least recently used entry goes first. Time comes from an injectable `Clock`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::domain::{Language, TopicSource};

pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_CAPACITY: usize = 512;

/// Source of "now" for TTL checks.
pub trait Clock: Send + Sync {
  fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> Instant {
    Instant::now()
  }
}

/// Clock that only moves when told to. For tests.
#[derive(Debug)]
pub struct ManualClock {
  base: Instant,
  offset_ms: AtomicU64,
}

impl ManualClock {
  pub fn new() -> Self {
    Self { base: Instant::now(), offset_ms: AtomicU64::new(0) }
  }

  pub fn advance(&self, by: Duration) {
    self.offset_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Instant {
    self.base + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
  pub course: String,
  pub subject: String,
  pub language: Language,
}

impl CacheKey {
  pub fn new(course: &str, subject: &str, language: Language) -> Self {
    Self { course: course.to_string(), subject: subject.to_string(), language }
  }
}

/// What gets memoized. Descriptions are not stored; they are re-derived from
/// the curriculum catalog on every hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
  pub topics: Vec<String>,
  pub book_title: Option<String>,
  pub source: TopicSource,
}

#[async_trait]
pub trait TopicCache: Send + Sync {
  /// Fresh entry for `key`, if any. Stale entries count as misses.
  async fn get(&self, key: &CacheKey) -> Option<CacheEntry>;
  async fn set(&self, key: CacheKey, entry: CacheEntry);
  /// Drop one entry; true if it was present.
  async fn evict(&self, key: &CacheKey) -> bool;
  async fn clear(&self);
  async fn len(&self) -> usize;
}

struct Slot {
  entry: CacheEntry,
  stored_at: Instant,
  last_used: u64,
}

#[derive(Default)]
struct LruState {
  slots: HashMap<CacheKey, Slot>,
  tick: u64,
}

impl LruState {
  fn next_tick(&mut self) -> u64 {
    self.tick += 1;
    self.tick
  }
}

/// Bounded TTL cache with least-recently-used eviction.
pub struct LruTopicCache {
  ttl: Duration,
  capacity: usize,
  clock: Arc<dyn Clock>,
  state: Mutex<LruState>,
}

impl LruTopicCache {
  pub fn new(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
    Self { ttl, capacity: capacity.max(1), clock, state: Mutex::new(LruState::default()) }
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  fn is_fresh(&self, slot: &Slot, now: Instant) -> bool {
    now.saturating_duration_since(slot.stored_at) < self.ttl
  }
}

#[async_trait]
impl TopicCache for LruTopicCache {
  async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
    let now = self.clock.now();
    let mut state = self.state.lock().await;
    let fresh = state.slots.get(key).map(|s| self.is_fresh(s, now))?;
    if !fresh {
      state.slots.remove(key);
      debug!(target: "topics_cache", course = %key.course, subject = %key.subject, "stale entry dropped");
      return None;
    }
    let tick = state.next_tick();
    let slot = state.slots.get_mut(key)?;
    slot.last_used = tick;
    Some(slot.entry.clone())
  }

  async fn set(&self, key: CacheKey, entry: CacheEntry) {
    let now = self.clock.now();
    let mut state = self.state.lock().await;

    if !state.slots.contains_key(&key) && state.slots.len() >= self.capacity {
      state.slots.retain(|_, s| now.saturating_duration_since(s.stored_at) < self.ttl);
      if state.slots.len() >= self.capacity {
        let oldest = state
          .slots
          .iter()
          .min_by_key(|(_, s)| s.last_used)
          .map(|(k, _)| k.clone());
        if let Some(k) = oldest {
          state.slots.remove(&k);
          trace!(target: "topics_cache", course = %k.course, subject = %k.subject, "evicted least recently used");
        }
      }
    }

    let tick = state.next_tick();
    state.slots.insert(key, Slot { entry, stored_at: now, last_used: tick });
  }

  async fn evict(&self, key: &CacheKey) -> bool {
    self.state.lock().await.slots.remove(key).is_some()
  }

  async fn clear(&self) {
    self.state.lock().await.slots.clear();
  }

  async fn len(&self) -> usize {
    self.state.lock().await.slots.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(topic: &str) -> CacheEntry {
    CacheEntry { topics: vec![topic.to_string()], book_title: None, source: TopicSource::Heuristic }
  }

  fn cache(capacity: usize) -> (LruTopicCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (LruTopicCache::new(Duration::from_secs(60), capacity, clock.clone()), clock)
  }

  #[tokio::test]
  async fn entries_expire_after_ttl() {
    let (cache, clock) = cache(4);
    let key = CacheKey::new("1ro Básico", "Matemáticas", Language::Es);
    cache.set(key.clone(), entry("a")).await;

    clock.advance(Duration::from_secs(59));
    assert_eq!(cache.get(&key).await, Some(entry("a")));

    clock.advance(Duration::from_secs(1));
    assert_eq!(cache.get(&key).await, None);
    assert_eq!(cache.len().await, 0);
  }

  #[tokio::test]
  async fn keys_are_raw_strings() {
    let (cache, _) = cache(4);
    cache.set(CacheKey::new("1ro Básico", "Matemáticas", Language::Es), entry("a")).await;
    assert!(cache.get(&CacheKey::new("1ro basico", "Matemáticas", Language::Es)).await.is_none());
    assert!(cache.get(&CacheKey::new("1ro Básico", "Matemáticas", Language::En)).await.is_none());
  }

  #[tokio::test]
  async fn least_recently_used_goes_first() {
    let (cache, _) = cache(2);
    let a = CacheKey::new("a", "s", Language::Es);
    let b = CacheKey::new("b", "s", Language::Es);
    let c = CacheKey::new("c", "s", Language::Es);
    cache.set(a.clone(), entry("a")).await;
    cache.set(b.clone(), entry("b")).await;
    assert!(cache.get(&a).await.is_some());

    cache.set(c.clone(), entry("c")).await;
    assert_eq!(cache.len().await, 2);
    assert!(cache.get(&a).await.is_some());
    assert!(cache.get(&b).await.is_none());
    assert!(cache.get(&c).await.is_some());
  }

  #[tokio::test]
  async fn expired_entries_are_purged_before_evicting_live_ones() {
    let (cache, clock) = cache(2);
    let a = CacheKey::new("a", "s", Language::Es);
    let b = CacheKey::new("b", "s", Language::Es);
    let c = CacheKey::new("c", "s", Language::Es);
    cache.set(a.clone(), entry("a")).await;
    clock.advance(Duration::from_secs(61));
    cache.set(b.clone(), entry("b")).await;
    cache.set(c.clone(), entry("c")).await;
    assert!(cache.get(&b).await.is_some());
    assert!(cache.get(&c).await.is_some());
  }

  #[tokio::test]
  async fn overwrite_refreshes_timestamp() {
    let (cache, clock) = cache(2);
    let a = CacheKey::new("a", "s", Language::Es);
    cache.set(a.clone(), entry("old")).await;
    clock.advance(Duration::from_secs(50));
    cache.set(a.clone(), entry("new")).await;
    clock.advance(Duration::from_secs(50));
    assert_eq!(cache.get(&a).await, Some(entry("new")));
  }

  #[tokio::test]
  async fn evict_and_clear() {
    let (cache, _) = cache(4);
    let a = CacheKey::new("a", "s", Language::Es);
    cache.set(a.clone(), entry("a")).await;
    cache.set(CacheKey::new("b", "s", Language::Es), entry("b")).await;
    assert!(cache.evict(&a).await);
    assert!(!cache.evict(&a).await);
    assert_eq!(cache.len().await, 1);
    cache.clear().await;
    assert_eq!(cache.len().await, 0);
  }
}
