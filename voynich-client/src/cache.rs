use std::future::Future;

use serde_json::Value;
use tokio::sync::OnceCell;
use voynich_core::Reply;

/// Write-once store for the supported-assets reply.
///
/// Population is guarded: concurrent first callers wait on a single
/// population instead of each issuing their own round trip. Only a reply that
/// came back from the mainnet is kept; a transport failure leaves the cache
/// empty. Once set it is never refreshed.
#[derive(Debug, Default)]
pub struct SupportCache {
    cell: OnceCell<Value>,
}

impl SupportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Value> {
        self.cell.get()
    }

    pub async fn get_or_populate<F, Fut>(&self, populate: F) -> Reply
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Reply>,
    {
        if let Some(cached) = self.get() {
            log::debug!("supported assets served from cache");
            return Reply::Network(cached.clone());
        }

        let res = self
            .cell
            .get_or_try_init(|| async {
                match populate().await {
                    Reply::Network(body) => {
                        log::debug!("supported assets cached");
                        Ok(body)
                    }
                    Reply::Failure(f) => {
                        log::debug!("supported assets not cached after {:?} failure", f.kind);
                        Err(f)
                    }
                }
            })
            .await;

        match res {
            Ok(body) => Reply::Network(body.clone()),
            Err(f) => Reply::Failure(f),
        }
    }
}
