// src/ingest/cache.rs
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_CACHE_TTL_SECS: u64 = 10 * 60;

/// Time source for cache freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Single-slot cache holding the last value and when it was stored.
#[derive(Debug, Clone)]
pub struct TimedCache<T> {
    entry: Option<(T, DateTime<Utc>)>,
    ttl: Duration,
}

impl<T: Clone> TimedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// Valid only while `now - stored_at < ttl`.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        match &self.entry {
            Some((_, stored_at)) => now - *stored_at < self.ttl,
            None => false,
        }
    }

    pub fn get(&self, now: DateTime<Utc>) -> Option<T> {
        if !self.is_valid(now) {
            return None;
        }
        self.entry.as_ref().map(|(value, _)| value.clone())
    }

    pub fn set(&mut self, value: T, now: DateTime<Utc>) {
        self.entry = Some((value, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_empty_cache_is_invalid() {
        let cache: TimedCache<u32> = TimedCache::new(Duration::seconds(600));
        assert!(!cache.is_valid(at(0)));
        assert_eq!(cache.get(at(0)), None);
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let mut cache = TimedCache::new(Duration::seconds(600));
        cache.set(7u32, at(0));

        assert_eq!(cache.get(at(599)), Some(7));
        assert!(!cache.is_valid(at(600)));
        assert_eq!(cache.get(at(601)), None);
    }

    #[test]
    fn test_set_overwrites_and_restarts_ttl() {
        let mut cache = TimedCache::new(Duration::seconds(600));
        cache.set(1u32, at(0));
        cache.set(2u32, at(500));

        assert_eq!(cache.get(at(900)), Some(2));
    }
}
