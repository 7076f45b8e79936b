//! Internal event system for slide changes
//!
//! The EventBus decouples the rotators (banner carousel, join-page word
//! ticker) from whoever wants to follow them, e.g. the server-sent events
//! endpoint. It uses `tokio::sync::broadcast`.
//!
//! ```text
//! CarouselTicker (banner) ──┐
//!                           ├──▶ EventBus::publish() ──▶ broadcast channel ──▶ SSE subscribers
//! CarouselTicker (words)  ──┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::carousel::{Direction, SlideState};

/// Which rotator produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotator {
    /// Landing page banner carousel
    Banner,
    /// Join page "Women <word>" ticker
    Words,
}

impl Rotator {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "banner" => Some(Rotator::Banner),
            "words" => Some(Rotator::Words),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotator::Banner => "banner",
            Rotator::Words => "words",
        }
    }
}

/// What caused a slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// The recurring timer fired
    Timer,
    /// A next/previous/jump control was used
    Manual,
}

/// A rotator moved to a new slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideChange {
    pub rotator: Rotator,
    pub index: usize,
    pub len: usize,
    pub direction: Direction,
    pub trigger: Trigger,
}

impl SlideChange {
    pub fn new(rotator: Rotator, state: SlideState, trigger: Trigger) -> Self {
        Self {
            rotator,
            index: state.index,
            len: state.len,
            direction: state.direction,
            trigger,
        }
    }
}

/// Envelope wrapping a slide change with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// The change itself
    pub event: SlideChange,
}

impl EventEnvelope {
    pub fn new(event: SlideChange) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Receivers that fall more than `capacity` events behind get a
    /// `Lagged` error on their next `recv()`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a change to all subscribers
    ///
    /// Never fails; with no subscribers the change is dropped. Returns the
    /// number of receivers that will see it.
    pub fn publish(&self, event: SlideChange) -> usize {
        self.sender.send(EventEnvelope::new(event)).unwrap_or(0)
    }

    /// Subscribe to future changes
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
