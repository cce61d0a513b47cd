// Domain layer
pub mod packet;
pub mod template;

// Delivery layer
pub mod forwarder;

// Supporting modules
pub mod config;
pub mod error;
pub mod metrics;

pub use crate::config::Settings;
pub use crate::error::{ForwardError, Result};
pub use crate::forwarder::Forwarder;
pub use crate::packet::{AlarmKind, AlarmPacket};
