// src/middleware/cache.rs
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Landing page renders that carry no generated code, keyed by the inbound
/// referral value they were rendered with (empty for the canonical page).
#[derive(Clone)]
pub struct PageCache {
    pages: Arc<Cache<String, Arc<str>>>,
}

impl PageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pages: Arc::new(
                Cache::builder()
                    .max_capacity(1024)
                    .time_to_live(ttl)
                    .build(),
            ),
        }
    }

    pub async fn get_page(&self, key: &str) -> Option<Arc<str>> {
        self.pages.get(key).await
    }

    pub async fn set_page(&self, key: String, html: Arc<str>) {
        self.pages.insert(key, html).await;
    }
}
