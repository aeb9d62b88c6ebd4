//! Viewport width broadcast with scoped subscriptions.
//!
//! The platform shell owns a [`ViewportHub`] and publishes the window width
//! on every resize. Views subscribe on mount and keep the returned
//! [`ViewportSubscription`]; dropping it (on unmount) removes the listener so
//! no callback ever runs against a destroyed view.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(u32)>>;

#[derive(Default)]
struct HubInner {
    width: u32,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared, single-threaded source of viewport width notifications.
#[derive(Clone, Default)]
pub struct ViewportHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ViewportHub {
    pub fn new(width: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                width,
                ..HubInner::default()
            })),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.borrow().width
    }

    /// Register `listener`; it stays installed until the handle is dropped.
    pub fn subscribe(&self, listener: impl FnMut(u32) + 'static) -> ViewportSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        ViewportSubscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Record a new width and notify listeners. Repeated widths are ignored.
    pub fn publish(&self, width: u32) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.width == width {
                return;
            }
            inner.width = width;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        tracing::debug!(width, listeners = listeners.len(), "viewport resized");
        for listener in listeners {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(width);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl std::fmt::Debug for ViewportHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ViewportHub")
            .field("width", &inner.width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl PartialEq for ViewportHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Handle for an installed listener. Dropping it unsubscribes.
#[derive(Debug)]
pub struct ViewportSubscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.hub.upgrade() else {
            return;
        };
        // The listener may own other subscriptions; release it only after the
        // borrow ends so their own `drop` can reach the hub.
        let removed = match inner.try_borrow_mut() {
            Ok(mut inner) => inner
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| inner.listeners.remove(index)),
            Err(_) => None,
        };
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_receive_new_widths() {
        let hub = ViewportHub::new(1280);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = hub.subscribe(move |w| sink.borrow_mut().push(w));

        hub.publish(700);
        hub.publish(700);
        hub.publish(400);

        assert_eq!(*seen.borrow(), vec![700, 400]);
        assert_eq!(hub.width(), 400);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let hub = ViewportHub::new(1280);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let sub = hub.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(hub.listener_count(), 1);

        hub.publish(900);
        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        hub.publish(500);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn subscription_outliving_hub_is_harmless() {
        let hub = ViewportHub::new(800);
        let sub = hub.subscribe(|_| {});
        drop(hub);
        drop(sub);
    }

    #[test]
    fn listener_may_subscribe_during_publish() {
        let hub = ViewportHub::new(1000);
        let nested = Rc::new(RefCell::new(None));
        let hub_for_listener = hub.clone();
        let slot = nested.clone();
        let _sub = hub.subscribe(move |_| {
            if slot.borrow().is_none() {
                *slot.borrow_mut() = Some(hub_for_listener.subscribe(|_| {}));
            }
        });

        hub.publish(600);
        assert_eq!(hub.listener_count(), 2);
    }

    #[test]
    fn dropping_listener_releases_subscriptions_it_owns() {
        let hub = ViewportHub::new(1280);
        let inner_sub = hub.subscribe(|_| {});
        let outer = hub.subscribe(move |_| {
            let _keep = &inner_sub;
        });
        assert_eq!(hub.listener_count(), 2);

        drop(outer);
        assert_eq!(hub.listener_count(), 0, "listeners left: {}", hub.listener_count());
    }
}
