// src/runtime/cache.rs
//
// 取得結果のキャッシュ
// 鮮度期間内の読み取りは直近の成功結果を再利用する

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::log_with_context;
use crate::types::QueryParams;

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
}

#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    /// 破棄のたびに進む世代。取得中に破棄が走った結果は保存しない
    generation: Arc<AtomicU64>,
    stale_time: Duration,
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
            stale_time,
        }
    }

    /// パスとパラメータ（キー順に正規化）からキャッシュキーを作る
    pub fn key(path: &str, params: &QueryParams) -> String {
        if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, params.canonical())
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// 鮮度期間内ならキャッシュを返し、そうでなければ取得して保存する
    ///
    /// 失敗した結果は保存しない。取得中に`invalidate`/`clear`が呼ばれた場合も、
    /// 結果は返すが保存はしない。
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> AppResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                let age = entry.fetched_at.elapsed();
                if age < self.stale_time {
                    if let Some(value) = entry.value.downcast_ref::<T>() {
                        log_with_context!(
                            tracing::Level::DEBUG,
                            "Cache hit",
                            "key" => key,
                            "age_ms" => age.as_millis()
                        );
                        return Ok(value.clone());
                    }
                }
            }
        }

        log_with_context!(tracing::Level::DEBUG, "Cache miss", "key" => key);
        let generation = self.generation.load(Ordering::SeqCst);
        let value = fetch().await?;

        let mut entries = self.entries.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            log_with_context!(
                tracing::Level::DEBUG,
                "Cache invalidated during fetch; result not stored",
                "key" => key
            );
            return Ok(value);
        }
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: Arc::new(value.clone()),
                fetched_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// 指定プレフィックスのキーをすべて破棄（更新系操作の後に呼ぶ）
    pub async fn invalidate(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        if removed > 0 {
            log_with_context!(
                tracing::Level::DEBUG,
                "Cache invalidated",
                "prefix" => prefix,
                "removed" => removed
            );
        }
        removed
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        entries.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("stale_time", &self.stale_time)
            .finish_non_exhaustive()
    }
}
