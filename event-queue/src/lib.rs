//! Gift-event queue with NATS JetStream support
//!
//! Provides pull-based consumption with:
//! - Typed gift events and a two-state message lifecycle
//! - Explicit acknowledgment: only finished messages leave the queue
//! - Redelivery of unacknowledged messages via JetStream ack-wait
//! - Durable consumers so competing bridge instances share one queue

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod message;
pub mod publisher;
pub mod subscriber;

pub use client::QueueClient;
pub use error::{Error, Result};
pub use message::{DeliveryStatus, QueueEvent, QueueMessage};
pub use publisher::Publisher;
pub use subscriber::{EventHandler, Subscriber, SubscriberConfig};
