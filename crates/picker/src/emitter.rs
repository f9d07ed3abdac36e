//! Synchronous publish/subscribe for calendar notifications.
//!
//! Listeners are kept per topic in registration order. Dispatch works on a
//! snapshot of the topic's list, so a listener may unsubscribe itself or
//! others mid-dispatch without disturbing the listeners still to run.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::event::{CalendarEvent, Topic};

/// Error a listener may return; it is logged and does not stop dispatch.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

type Listener = Rc<RefCell<dyn FnMut(&CalendarEvent) -> Result<(), ListenerError>>>;

/// Identifies a registered listener for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Outcome of one [`Emitter::emit`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Listeners that ran and returned `Ok`.
    pub delivered: usize,
    /// Listeners that ran and returned an error.
    pub failed: usize,
    /// Listeners skipped because they were already running.
    pub skipped: usize,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    topics: BTreeMap<Topic, Vec<(ListenerId, Listener)>>,
}

impl Registry {
    fn insert(&mut self, topic: Topic, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.topics.entry(topic).or_default().push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        for listeners in self.topics.values_mut() {
            if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                listeners.remove(pos);
                return true;
            }
        }
        false
    }
}

/// Owned listener registry that publishes [`CalendarEvent`]s.
#[derive(Default)]
pub struct Emitter {
    registry: Rc<RefCell<Registry>>,
}

impl Emitter {
    /// Creates an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `topic`.
    pub fn on<F>(&self, topic: Topic, listener: F) -> ListenerId
    where
        F: FnMut(&CalendarEvent) -> Result<(), ListenerError> + 'static,
    {
        self.registry
            .borrow_mut()
            .insert(topic, Rc::new(RefCell::new(listener)))
    }

    /// Registers `listener` for a single delivery, after which it unsubscribes.
    pub fn once<F>(&self, topic: Topic, mut listener: F) -> ListenerId
    where
        F: FnMut(&CalendarEvent) -> Result<(), ListenerError> + 'static,
    {
        let handle = self.handle();
        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let own_id = Rc::clone(&slot);
        let mut fired = false;
        let id = self.on(topic, move |event| {
            if fired {
                return Ok(());
            }
            fired = true;
            if let Some(id) = own_id.get() {
                handle.off(id);
            }
            listener(event)
        });
        slot.set(Some(id));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        self.registry.borrow_mut().remove(id)
    }

    /// Removes every listener of `topic`.
    pub fn off_all(&self, topic: Topic) {
        self.registry.borrow_mut().topics.remove(&topic);
    }

    /// Returns the number of listeners registered for `topic`.
    pub fn listener_count(&self, topic: Topic) -> usize {
        self.registry
            .borrow()
            .topics
            .get(&topic)
            .map_or(0, Vec::len)
    }

    /// Returns a weak handle listeners can capture to unsubscribe or emit.
    pub fn handle(&self) -> EmitterHandle {
        EmitterHandle {
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener of its topic, in registration order.
    pub fn emit(&self, event: &CalendarEvent) -> Dispatch {
        dispatch(&self.registry, event)
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        let counts: BTreeMap<&Topic, usize> = registry
            .topics
            .iter()
            .map(|(topic, listeners)| (topic, listeners.len()))
            .collect();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}

/// Weak reference to an [`Emitter`], safe to capture inside listeners.
#[derive(Clone)]
pub struct EmitterHandle {
    registry: Weak<RefCell<Registry>>,
}

impl EmitterHandle {
    /// Removes a listener. Returns `false` if it was not registered or the
    /// emitter is gone.
    pub fn off(&self, id: ListenerId) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow_mut().remove(id))
    }

    /// Publishes `event` if the emitter is still alive.
    pub fn emit(&self, event: &CalendarEvent) -> Option<Dispatch> {
        self.registry
            .upgrade()
            .map(|registry| dispatch(&registry, event))
    }
}

fn dispatch(registry: &RefCell<Registry>, event: &CalendarEvent) -> Dispatch {
    let topic = event.topic();
    let snapshot: Vec<(ListenerId, Listener)> = registry
        .borrow()
        .topics
        .get(&topic)
        .cloned()
        .unwrap_or_default();

    let mut outcome = Dispatch::default();
    for (id, listener) in snapshot {
        let Ok(mut callback) = listener.try_borrow_mut() else {
            debug!(?id, ?topic, "listener already running, skipped");
            outcome.skipped += 1;
            continue;
        };
        match (&mut *callback)(event) {
            Ok(()) => outcome.delivered += 1,
            Err(error) => {
                warn!(?id, ?topic, %error, "listener failed");
                outcome.failed += 1;
            }
        }
    }
    outcome
}
