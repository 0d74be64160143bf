// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events → same result
// 3. Observable - every emission is logged
// 4. Type-safe - events are strongly typed

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Services emit scan and playback facts here; the presentation layer
/// subscribes to the ones it renders.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - A panicking handler does not stop the others
/// - Handlers may subscribe or emit; no lock is held while they run
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Event emission log (for debugging)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Handlers are executed in the order they are subscribed.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<UserNotified, _>(|event| {
    ///     println!("{}", event.message);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                error!(
                    "Failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event
    ///
    /// Logs the event, then runs every handler for its type in
    /// subscription order before returning. Handlers subscribed while
    /// this event is dispatched first run on the next emission.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
            .unwrap_or_default();

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.len(),
        };

        debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type, log_entry.event_id, log_entry.handler_count
        );

        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(log_entry);

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if let Err(e) = result {
                error!(
                    "Handler {} for {} panicked: {:?}",
                    idx,
                    event.event_type(),
                    e
                );
            }
        }
    }

    /// Get the event log (for debugging)
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<CodeScanned, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(CodeScanned::new("day-1".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<UserNotified, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(UserNotified::status("Opening media...".to_string()));

        let result = sequence.read().unwrap();
        assert_eq!(*result, vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(CodeScanned::new("day-1".to_string()));
        bus.emit(UserNotified::alert("No URL to open".to_string()));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "CodeScanned");
        assert_eq!(log[1].event_type, "UserNotified");
    }

    #[test]
    fn test_handler_can_subscribe_and_emit() {
        let bus = EventBus::new();
        let notices = Arc::new(AtomicUsize::new(0));

        let inner_bus = bus.clone();
        let inner_notices = Arc::clone(&notices);
        bus.subscribe::<CodeScanned, _>(move |event| {
            let counter = Arc::clone(&inner_notices);
            inner_bus.subscribe::<UserNotified, _>(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            inner_bus.emit(UserNotified::status(format!("scanned {}", event.code)));
        });

        bus.emit(CodeScanned::new("day-1".to_string()));
        assert_eq!(notices.load(Ordering::SeqCst), 1);

        bus.emit(UserNotified::status("Opening media...".to_string()));
        assert_eq!(notices.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<CodeScanned, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<CodeScanned, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(CodeScanned::new("day-1".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
