use crate::modules::material_tracking::use_cases::watch_order_materials::feed::MaterialFeed;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::AbortHandle;

type Callback = Box<dyn FnMut(MaterialFeed) + Send>;

/// Callback slot shared between a subscription and its delivery task.
/// Delivery happens with the slot locked, and unsubscribing empties it.
#[derive(Clone)]
pub(crate) struct CallbackSlot(Arc<Mutex<Option<Callback>>>);

impl CallbackSlot {
    pub(crate) fn new(callback: impl FnMut(MaterialFeed) + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Some(Box::new(callback)))))
    }

    fn lock(&self) -> MutexGuard<'_, Option<Callback>> {
        // A panicking callback poisons the slot; the slot itself stays usable.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns false once the slot has been emptied.
    pub(crate) fn deliver(&self, feed: MaterialFeed) -> bool {
        match self.lock().as_mut() {
            Some(callback) => {
                callback(feed);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&self) {
        self.lock().take();
    }

    fn is_set(&self) -> bool {
        self.lock().is_some()
    }
}

/// Handle to a live order watch. Dropping it unsubscribes.
///
/// The callback must not unsubscribe its own subscription.
pub struct Subscription {
    callback: CallbackSlot,
    task: Option<AbortHandle>,
}

impl Subscription {
    pub(crate) fn new(callback: CallbackSlot, task: Option<AbortHandle>) -> Self {
        Self { callback, task }
    }

    /// Stops delivery. Once this returns the callback is never invoked
    /// again. Calling it more than once is a no-op.
    pub fn unsubscribe(&self) {
        self.callback.clear();
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.callback.is_set()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
