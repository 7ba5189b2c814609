//! Single-subscriber channel delivering chosen actions to the caller.

use super::ActionDescriptor;

type SelectCallback = Box<dyn FnMut(ActionDescriptor) + Send>;

/// Holds at most one subscriber. Subscribing replaces the previous one.
#[derive(Default)]
pub struct SelectionChannel {
    subscriber: Option<SelectCallback>,
}

impl SelectionChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(ActionDescriptor) + Send + 'static,
    {
        self.subscriber = Some(Box::new(callback));
    }

    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    pub fn is_connected(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Invokes the subscriber once. Returns `false` when nobody listens.
    pub fn deliver(&mut self, action: ActionDescriptor) -> bool {
        match self.subscriber.as_mut() {
            Some(callback) => {
                callback(action);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for SelectionChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionChannel")
            .field("connected", &self.is_connected())
            .finish()
    }
}
