//! Response cache over the local and disabled backends

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use movie_catalog::cache::{Cache, CacheBackend, CacheKey, LocalCache, NullCache, ResponseCache};
use movie_catalog::errors::Error;

fn local(ttl: Duration) -> ResponseCache {
    ResponseCache::new(CacheBackend::Local(LocalCache::with_shard_count(4)), ttl)
}

#[tokio::test]
async fn test_remember_loads_once() {
    let cache = local(Duration::from_secs(60));
    let calls = &AtomicUsize::new(0);

    for _ in 0..3 {
        let value: Vec<String> = cache
            .remember(CacheKey::movies_all(), || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["Alien".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(value, vec!["Alien".to_string()]);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_entries_expire() {
    let cache = local(Duration::from_millis(50));
    let calls = &AtomicUsize::new(0);

    let load = || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, Error>(117)
    };

    cache.remember(CacheKey::movie_duration(117), load).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    cache.remember(CacheKey::movie_duration(117), load).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalidating_movies_keeps_sessions() {
    let cache = local(Duration::from_secs(60));
    let backend = cache.backend();

    backend
        .set(&CacheKey::token("abc"), &"session", Duration::from_secs(60))
        .await
        .unwrap();
    cache
        .remember(CacheKey::movie_title("Alien"), || async { Ok(1_i64) })
        .await
        .unwrap();
    cache
        .remember(CacheKey::movie_genre("HORROR"), || async { Ok(2_i64) })
        .await
        .unwrap();

    cache.invalidate_movies().await;

    let title: Option<i64> = backend.get(&CacheKey::movie_title("Alien")).await.unwrap();
    let genre: Option<i64> = backend.get(&CacheKey::movie_genre("HORROR")).await.unwrap();
    let session: Option<String> = backend.get(&CacheKey::token("abc")).await.unwrap();

    assert_eq!(title, None);
    assert_eq!(genre, None);
    assert_eq!(session, Some("session".to_string()));
}

#[tokio::test]
async fn test_disabled_cache_always_loads() {
    let cache = ResponseCache::new(CacheBackend::Null(NullCache), Duration::from_secs(60));
    let calls = &AtomicUsize::new(0);

    for _ in 0..2 {
        cache
            .remember(CacheKey::movies_all(), || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Vec::<i64>::new())
            })
            .await
            .unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(cache.is_available().await);
}
