//! Tests for the persistence coordinator's degradation logic

use crate::error::StoreFailure;
use crate::services::coordinator::{Coordinator, LoadSource, SyncOutcome};
use crate::traits::{MockLocalCache, MockRemoteStore};
use shared::{PriceRange, Restaurant};

fn sample_collection() -> Vec<Restaurant> {
    vec![
        Restaurant::new(1, "Lucky Noodles", "Noodles", PriceRange::new(50, Some(100)).unwrap())
            .unwrap(),
    ]
}

#[tokio::test]
async fn load_trusts_remote_when_reachable() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_fetch()
        .times(1)
        .returning(|| Ok(sample_collection()));

    // A reachable remote means the cache is never consulted.
    let mut cache = MockLocalCache::new();
    cache.expect_read().times(0);

    let coordinator = Coordinator::new(remote, cache);
    let report = coordinator.load().await;

    assert_eq!(report.source, LoadSource::Remote);
    assert_eq!(report.restaurants.len(), 1);
}

#[tokio::test]
async fn load_falls_back_to_cache_snapshot() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_fetch()
        .times(1)
        .returning(|| Err(StoreFailure::Network("connection refused".to_string())));

    let mut cache = MockLocalCache::new();
    cache
        .expect_read()
        .times(1)
        .returning(|| Ok(Some(sample_collection())));

    let coordinator = Coordinator::new(remote, cache);
    let report = coordinator.load().await;

    assert_eq!(report.source, LoadSource::CacheFallback);
    assert_eq!(report.restaurants.len(), 1);
    assert_eq!(report.restaurants[0].name, "Lucky Noodles");
}

#[tokio::test]
async fn load_starts_empty_when_remote_and_cache_are_gone() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_fetch()
        .returning(|| Err(StoreFailure::Status(500)));

    let mut cache = MockLocalCache::new();
    cache.expect_read().returning(|| Ok(None));

    let coordinator = Coordinator::new(remote, cache);
    let report = coordinator.load().await;

    assert_eq!(report.source, LoadSource::Empty);
    assert!(report.restaurants.is_empty());
}

#[tokio::test]
async fn load_treats_unreadable_cache_as_empty() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_fetch()
        .returning(|| Err(StoreFailure::Network("timeout".to_string())));

    let mut cache = MockLocalCache::new();
    cache
        .expect_read()
        .returning(|| Err(StoreFailure::Decode("truncated JSON".to_string())));

    let coordinator = Coordinator::new(remote, cache);
    let report = coordinator.load().await;

    assert_eq!(report.source, LoadSource::Empty);
    assert!(report.restaurants.is_empty());
}

#[tokio::test]
async fn save_prefers_the_remote_store() {
    let mut remote = MockRemoteStore::new();
    remote.expect_replace().times(1).returning(|_| Ok(()));

    let mut cache = MockLocalCache::new();
    cache.expect_write().times(0);

    let coordinator = Coordinator::new(remote, cache);
    let outcome = coordinator.save(&sample_collection()).await;

    assert_eq!(outcome, SyncOutcome::Remote);
}

#[tokio::test]
async fn failed_remote_save_writes_the_cache_slot() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_replace()
        .times(1)
        .returning(|_| Err(StoreFailure::Status(503)));

    let mut cache = MockLocalCache::new();
    cache
        .expect_write()
        .times(1)
        .withf(|snapshot| snapshot.len() == 1 && snapshot[0].id == 1)
        .returning(|_| Ok(()));

    let coordinator = Coordinator::new(remote, cache);
    let outcome = coordinator.save(&sample_collection()).await;

    assert_eq!(outcome, SyncOutcome::CacheFallback);
}

#[tokio::test]
async fn save_is_non_fatal_even_when_both_writes_fail() {
    let mut remote = MockRemoteStore::new();
    remote
        .expect_replace()
        .returning(|_| Err(StoreFailure::Network("connection refused".to_string())));

    let mut cache = MockLocalCache::new();
    cache
        .expect_write()
        .returning(|_| Err(StoreFailure::CacheIo(std::io::Error::other("disk full"))));

    let coordinator = Coordinator::new(remote, cache);
    let outcome = coordinator.save(&sample_collection()).await;

    assert_eq!(outcome, SyncOutcome::Lost);
}
