use crate::modules::material_tracking::adapters::outbound::order_store::OrderChangeFeed;
use crate::modules::material_tracking::use_cases::watch_order_materials::feed::MaterialFeed;
use crate::modules::material_tracking::use_cases::watch_order_materials::subscription::{
    CallbackSlot, Subscription,
};
use std::sync::Arc;

/// Pushes the full material list of one order to a callback, first on
/// subscribe and then after every committed write to that order.
pub struct MaterialSync<TFeed>
where
    TFeed: OrderChangeFeed + Send + Sync + 'static,
{
    feed: Arc<TFeed>,
}

impl<TFeed> MaterialSync<TFeed>
where
    TFeed: OrderChangeFeed + Send + Sync + 'static,
{
    pub fn new(feed: Arc<TFeed>) -> Self {
        Self { feed }
    }

    /// If the feed cannot be opened the callback receives one
    /// `MaterialFeed::Error` and is then dropped, so the returned subscription
    /// is already inactive.
    pub async fn subscribe<F>(&self, order_id: &str, on_change: F) -> Subscription
    where
        F: FnMut(MaterialFeed) + Send + 'static,
    {
        let callback = CallbackSlot::new(on_change);

        let mut rx = match self.feed.watch(order_id).await {
            Ok(rx) => rx,
            Err(e) => {
                tracing::warn!(%order_id, error = %e, "material feed unavailable");
                callback.deliver(MaterialFeed::Error(e.to_string()));
                callback.clear();
                return Subscription::new(callback, None);
            }
        };

        let slot = callback.clone();
        let watched = order_id.to_string();
        let task = tokio::spawn(async move {
            while let Some(snapshot) = rx.recv().await {
                if !slot.deliver(snapshot.into()) {
                    break;
                }
            }
            tracing::debug!(order_id = %watched, "material feed closed");
        });

        Subscription::new(callback, Some(task.abort_handle()))
    }
}
