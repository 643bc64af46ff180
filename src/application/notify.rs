// SPDX-License-Identifier: MPL-2.0
//! Notification hub: synchronous hooks plus queued events.
//!
//! Every successful mutation is announced twice, always in this order:
//!
//! 1. the configured hook runs synchronously with the delta,
//! 2. a [`Notification`] is queued for every subscriber.
//!
//! The selection box renders only after both. No-op operations announce
//! nothing. Subscriber queues are unbounded: a subscriber that drains late
//! still sees every delta, in order.

use crate::domain::File;
use tokio::sync::mpsc;

/// Hook invoked with the files of a successful add.
pub type AddHook = Box<dyn FnMut(&[File]) + Send>;

/// Hook invoked with the file of a successful removal.
pub type RemoveHook = Box<dyn FnMut(&File) + Send>;

/// Receiving end handed out by [`NotificationHub::subscribe`].
pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Event published after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Files appended (or, for single-file boxes, the replacing file).
    Added { files: Vec<File> },
    /// A file removed from the selection.
    Removed { file: File },
}

/// Delivers hooks and subscriber notifications in a fixed order.
pub struct NotificationHub {
    on_add: Option<AddHook>,
    on_remove: Option<RemoveHook>,
    subscribers: Vec<mpsc::UnboundedSender<Notification>>,
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("on_add", &self.on_add.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl NotificationHub {
    #[must_use]
    pub fn new(on_add: Option<AddHook>, on_remove: Option<RemoveHook>) -> Self {
        Self {
            on_add,
            on_remove,
            subscribers: Vec::new(),
        }
    }

    /// Returns a receiver for notifications published from now on.
    pub fn subscribe(&mut self) -> NotificationReceiver {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Number of subscribers still listening.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|sender| !sender.is_closed())
            .count()
    }

    /// Announces an add. Empty batches are ignored.
    pub fn files_added(&mut self, files: &[File]) {
        if files.is_empty() {
            return;
        }
        if let Some(hook) = self.on_add.as_mut() {
            hook(files);
        }
        self.publish(Notification::Added {
            files: files.to_vec(),
        });
    }

    /// Announces a removal.
    pub fn file_removed(&mut self, file: &File) {
        if let Some(hook) = self.on_remove.as_mut() {
            hook(file);
        }
        self.publish(Notification::Removed { file: file.clone() });
    }

    /// Queues `notification` for every live subscriber and forgets the
    /// ones whose receiver was dropped.
    fn publish(&mut self, notification: Notification) {
        self.subscribers
            .retain(|sender| sender.send(notification.clone()).is_ok());
        tracing::debug!(receivers = self.subscribers.len(), "notification published");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn hook_runs_before_subscribers_hear() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let hook_order = Arc::clone(&order);

        let mut hub = NotificationHub::new(
            Some(Box::new(move |files: &[File]| {
                hook_order.lock().unwrap().push(format!("hook:{}", files.len()));
            })),
            None,
        );
        let mut rx = hub.subscribe();

        let file = File::new("a", 1, "text/plain");
        hub.files_added(std::slice::from_ref(&file));

        // The hook has already run by the time the event can be received.
        assert_eq!(*order.lock().unwrap(), vec!["hook:1".to_string()]);
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::Added { files: vec![file] }
        );
    }

    #[test]
    fn empty_add_is_silent() {
        let calls = Arc::new(Mutex::new(0));
        let hook_calls = Arc::clone(&calls);
        let mut hub = NotificationHub::new(
            Some(Box::new(move |_: &[File]| *hook_calls.lock().unwrap() += 1)),
            None,
        );
        let mut rx = hub.subscribe();

        hub.files_added(&[]);

        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn removal_reaches_hook_and_subscribers() {
        let removed = Arc::new(Mutex::new(None));
        let hook_removed = Arc::clone(&removed);
        let mut hub = NotificationHub::new(
            None,
            Some(Box::new(move |file: &File| {
                *hook_removed.lock().unwrap() = Some(file.clone());
            })),
        );
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        let file = File::new("b", 2, "text/plain");
        hub.file_removed(&file);

        assert_eq!(removed.lock().unwrap().as_ref(), Some(&file));
        let expected = Notification::Removed { file };
        assert_eq!(first.try_recv().unwrap(), expected);
        assert_eq!(second.try_recv().unwrap(), expected);
    }

    #[test]
    fn late_subscriber_receives_every_event() {
        let mut hub = NotificationHub::new(None, None);
        let mut rx = hub.subscribe();

        for i in 0..200 {
            hub.files_added(&[File::new(format!("{i}.txt"), i, "text/plain")]);
        }

        let mut received = 0;
        while let Ok(Notification::Added { files }) = rx.try_recv() {
            assert_eq!(files[0].name(), format!("{received}.txt"));
            received += 1;
        }
        assert_eq!(received, 200);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut hub = NotificationHub::new(None, None);
        let kept = hub.subscribe();
        drop(hub.subscribe());
        assert_eq!(hub.subscriber_count(), 1);

        hub.file_removed(&File::new("d", 4, "text/plain"));
        assert_eq!(hub.subscribers.len(), 1);
        drop(kept);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let mut hub = NotificationHub::new(None, None);
        hub.files_added(&[File::new("c", 3, "text/plain")]);
    }
}
