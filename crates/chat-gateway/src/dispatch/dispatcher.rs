//! Event dispatcher
//!
//! Receives decoded gateway payloads, maps `d` through the [`DataMapper`]
//! and invokes the listeners registered for the event.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chat_mapper::{DataMapper, Mappable};
use dashmap::DashMap;
use serde_json::Value;

use super::{GatewayError, GatewayResult};
use crate::events::{GatewayEvent, GatewayEventType};
use crate::protocol::{GatewayPayload, OpCode};

type Listener = Arc<dyn Fn(&dyn Any) + Send + Sync>;
type MapFn = fn(&DataMapper, &Value) -> Option<Box<dyn Any>>;

/// Listeners of one event type that share a target type
///
/// The payload is mapped once per route, not once per listener.
#[derive(Clone)]
struct Route {
    type_id: TypeId,
    target_type: &'static str,
    map: MapFn,
    listeners: Vec<Listener>,
}

fn map_boxed<T: Mappable>(mapper: &DataMapper, raw: &Value) -> Option<Box<dyn Any>> {
    mapper
        .map::<T>(raw)
        .map(|event| Box::new(event) as Box<dyn Any>)
}

/// What happened to a dispatched payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Mapped and handed to this many listeners
    Delivered {
        event: GatewayEventType,
        listeners: usize,
    },
    /// Known event without listeners
    Unhandled(GatewayEventType),
    /// Event name this client does not know
    Unknown(String),
    /// Not a dispatch payload; left to the connection
    Control(OpCode),
}

/// Routes dispatch payloads to typed listeners
pub struct EventDispatcher {
    mapper: DataMapper,
    routes: DashMap<GatewayEventType, Vec<Route>>,
    /// Last sequence number seen, 0 if none
    sequence: AtomicU64,
}

impl EventDispatcher {
    #[must_use]
    pub fn new(mapper: DataMapper) -> Self {
        Self {
            mapper,
            routes: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn mapper(&self) -> &DataMapper {
        &self.mapper
    }

    /// Register a listener for the event `E` is delivered by
    pub fn on<E, F>(&self, callback: F)
    where
        E: GatewayEvent,
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.on_event::<E, F>(E::EVENT_TYPE, callback);
    }

    /// Register a listener that receives `event_type` mapped onto `T`
    pub fn on_event<T, F>(&self, event_type: GatewayEventType, callback: F)
    where
        T: Mappable,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<T>() {
                callback(event);
            }
        });

        let type_id = TypeId::of::<T>();
        let mut routes = self.routes.entry(event_type).or_default();
        if let Some(index) = routes.iter().position(|route| route.type_id == type_id) {
            routes[index].listeners.push(listener);
        } else {
            routes.push(Route {
                type_id,
                target_type: T::TYPE_NAME,
                map: map_boxed::<T>,
                listeners: vec![listener],
            });
        }
        drop(routes);

        tracing::debug!(event = %event_type, target_type = T::TYPE_NAME, "Listener registered");
    }

    /// Number of listeners registered for an event type
    #[must_use]
    pub fn listener_count(&self, event_type: GatewayEventType) -> usize {
        self.routes.get(&event_type).map_or(0, |routes| {
            routes.iter().map(|route| route.listeners.len()).sum()
        })
    }

    /// Remove every listener of an event type
    pub fn clear(&self, event_type: GatewayEventType) {
        self.routes.remove(&event_type);
    }

    /// Handle one decoded payload
    ///
    /// Dispatch payloads are mapped and delivered; every other op code is
    /// returned as [`DispatchOutcome::Control`]. Payloads whose data cannot
    /// be mapped are dropped for that route after the mapper has logged why.
    pub fn dispatch(&self, payload: &GatewayPayload) -> GatewayResult<DispatchOutcome> {
        if let Some(sequence) = payload.s {
            self.sequence.store(sequence, Ordering::SeqCst);
        }

        if payload.op == OpCode::InvalidSession && !payload.is_recoverable_invalid_session() {
            tracing::warn!("Invalid session, sequence reset");
            self.reset_sequence();
        }

        if !payload.is_dispatch() {
            if payload.op.ends_connection() {
                tracing::info!(op = %payload.op, "Gateway asked for a new connection");
            }
            return Ok(DispatchOutcome::Control(payload.op));
        }

        let name = payload.t.as_deref().ok_or(GatewayError::MissingEventName)?;
        let Some(event_type) = GatewayEventType::from_str(name) else {
            tracing::debug!(event = name, "Ignoring unknown gateway event");
            return Ok(DispatchOutcome::Unknown(name.to_string()));
        };

        // Clone out of the map so listeners may register more listeners
        let routes = self
            .routes
            .get(&event_type)
            .map(|routes| routes.value().clone())
            .unwrap_or_default();
        if routes.is_empty() {
            return Ok(DispatchOutcome::Unhandled(event_type));
        }

        let data = payload.d.as_ref().unwrap_or(&Value::Null);
        let mut delivered = 0;
        for route in &routes {
            let Some(event) = (route.map)(&self.mapper, data) else {
                tracing::warn!(
                    event = %event_type,
                    target_type = route.target_type,
                    "Dropping event that could not be mapped"
                );
                continue;
            };

            for listener in &route.listeners {
                listener(&*event);
                delivered += 1;
            }
        }

        tracing::trace!(event = %event_type, listeners = delivered, "Event dispatched");
        Ok(DispatchOutcome::Delivered {
            event: event_type,
            listeners: delivered,
        })
    }

    /// Decode a text frame and dispatch it
    pub fn dispatch_json(&self, text: &str) -> GatewayResult<DispatchOutcome> {
        let payload = GatewayPayload::from_json(text)?;
        self.dispatch(&payload)
    }

    /// Last sequence number seen, for heartbeats and resuming
    #[must_use]
    pub fn last_sequence(&self) -> Option<u64> {
        match self.sequence.load(Ordering::SeqCst) {
            0 => None,
            sequence => Some(sequence),
        }
    }

    pub fn reset_sequence(&self) {
        self.sequence.store(0, Ordering::SeqCst);
    }

    /// Heartbeat payload carrying the last sequence seen
    #[must_use]
    pub fn heartbeat(&self) -> GatewayPayload {
        GatewayPayload::heartbeat(self.last_sequence())
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(DataMapper::default())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("mapper", &self.mapper)
            .field("events", &self.routes.len())
            .field("last_sequence", &self.last_sequence())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{GuildRoleDeleteEvent, ThreadDeleteEvent};
    use chat_core::{Channel, Snowflake};
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    fn role_delete(sequence: u64) -> GatewayPayload {
        GatewayPayload::dispatch(
            "GUILD_ROLE_DELETE",
            sequence,
            json!({"guild_id": "2000", "role_id": "7000"}),
        )
    }

    #[test]
    fn test_dispatch_to_typed_listener() {
        let dispatcher = EventDispatcher::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        dispatcher.on::<GuildRoleDeleteEvent, _>(move |event| sink.lock().push(event.role_id));

        let outcome = dispatcher.dispatch(&role_delete(3)).unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Delivered {
                event: GatewayEventType::GuildRoleDelete,
                listeners: 1
            }
        );
        assert_eq!(*seen.lock(), vec![Snowflake::new(7000)]);
        assert_eq!(dispatcher.last_sequence(), Some(3));
    }

    #[test]
    fn test_every_listener_is_called() {
        let dispatcher = EventDispatcher::default();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            dispatcher.on::<GuildRoleDeleteEvent, _>(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(dispatcher.listener_count(GatewayEventType::GuildRoleDelete), 3);
        dispatcher.dispatch(&role_delete(1)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_shared_part_registered_per_event() {
        let dispatcher = EventDispatcher::default();
        let names = Arc::new(Mutex::new(Vec::new()));

        for event_type in [GatewayEventType::ThreadCreate, GatewayEventType::ThreadUpdate] {
            let names = Arc::clone(&names);
            dispatcher.on_event::<Channel, _>(event_type, move |channel| {
                names.lock().push((event_type, channel.name.clone()));
            });
        }

        let thread = json!({"id": "41771983423143937", "type": 11, "name": "tiny"});
        dispatcher
            .dispatch(&GatewayPayload::dispatch("THREAD_UPDATE", 8, thread))
            .unwrap();

        assert_eq!(
            *names.lock(),
            vec![(GatewayEventType::ThreadUpdate, Some("tiny".to_string()))]
        );
    }

    #[test]
    fn test_unknown_and_unhandled_events() {
        let dispatcher = EventDispatcher::default();

        let outcome = dispatcher
            .dispatch(&GatewayPayload::dispatch("SOUNDBOARD_SOUNDS", 4, json!({})))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Unknown("SOUNDBOARD_SOUNDS".to_string()));

        let outcome = dispatcher.dispatch(&role_delete(5)).unwrap();
        assert_eq!(outcome, DispatchOutcome::Unhandled(GatewayEventType::GuildRoleDelete));

        // Sequence numbers count even when nobody listens
        assert_eq!(dispatcher.last_sequence(), Some(5));
    }

    #[test]
    fn test_control_payloads_pass_through() {
        let dispatcher = EventDispatcher::default();

        let hello = GatewayPayload::from_json(r#"{"op": 10, "d": {"heartbeat_interval": 41250}}"#)
            .unwrap();
        assert_eq!(dispatcher.dispatch(&hello).unwrap(), DispatchOutcome::Control(OpCode::Hello));
    }

    #[test]
    fn test_invalid_session_resets_sequence() {
        let dispatcher = EventDispatcher::default();
        dispatcher.dispatch(&role_delete(12)).unwrap();

        dispatcher.dispatch_json(r#"{"op": 9, "d": true}"#).unwrap();
        assert_eq!(dispatcher.last_sequence(), Some(12));

        dispatcher.dispatch_json(r#"{"op": 9, "d": false}"#).unwrap();
        assert_eq!(dispatcher.last_sequence(), None);
        assert_eq!(dispatcher.heartbeat().d, Some(Value::Null));
    }

    #[test]
    fn test_unmappable_data_is_dropped() {
        let dispatcher = EventDispatcher::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        dispatcher.on::<ThreadDeleteEvent, _>(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let outcome = dispatcher
            .dispatch(&GatewayPayload::dispatch("THREAD_DELETE", 1, json!("gone")))
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::Delivered {
                event: GatewayEventType::ThreadDelete,
                listeners: 0
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_may_register_during_dispatch() {
        let dispatcher = Arc::new(EventDispatcher::default());

        let inner = Arc::clone(&dispatcher);
        dispatcher.on::<GuildRoleDeleteEvent, _>(move |_| {
            inner.on::<GuildRoleDeleteEvent, _>(|_| {});
        });

        dispatcher.dispatch(&role_delete(1)).unwrap();
        assert_eq!(dispatcher.listener_count(GatewayEventType::GuildRoleDelete), 2);
    }

    #[test]
    fn test_decode_errors() {
        let dispatcher = EventDispatcher::default();

        assert!(matches!(dispatcher.dispatch_json("{"), Err(GatewayError::Decode(_))));
        assert!(matches!(
            dispatcher.dispatch_json(r#"{"op": 0, "d": {}}"#),
            Err(GatewayError::MissingEventName)
        ));
    }
}
