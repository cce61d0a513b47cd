//! Outbound payload shapes expected by the Divera247 API.
//!
//! Payloads are built fresh per packet from the configured templates
//! and dropped once the request completes. The remote API expects the
//! `priority` flag as the strings `"true"` / `"false"`, not a JSON
//! boolean.

use serde::Serialize;

use crate::config::{AlarmConfig, FmsConfig};
use crate::packet::AlarmPacket;
use crate::template::resolve;

/// Literal template defaults per alarm kind, used when the
/// corresponding configuration field is unset.
#[derive(Debug, Clone, Copy)]
pub struct KindDefaults {
    pub title: &'static str,
    pub ric: &'static str,
    pub text: &'static str,
}

/// FMS defaults: title and text fall back to the unresolved `{FMS}`
/// token so an unconfigured installation still produces output
pub const FMS_DEFAULTS: KindDefaults = KindDefaults {
    title: "{FMS}",
    ric: "",
    text: "{FMS}",
};

pub const POCSAG_DEFAULTS: KindDefaults = KindDefaults {
    title: "{RIC}({SRIC})\n{MSG}",
    ric: "",
    text: "{MSG}",
};

pub const ZVEI_DEFAULTS: KindDefaults = KindDefaults {
    title: "{TONE}",
    ric: "{TONE}",
    text: "{TONE}",
};

pub const MSG_DEFAULTS: KindDefaults = KindDefaults {
    title: "{MSG}",
    ric: "",
    text: "{MSG}",
};

/// Body for the dedicated `/api/fms` status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FmsAlarm {
    pub vehicle_ric: String,
    pub status_id: String,
    pub status_note: String,
    pub title: String,
    pub text: String,
    pub priority: String,
}

impl FmsAlarm {
    /// Build the FMS payload from the configured templates and the
    /// packet. `status` and `directionText` are copied verbatim, the
    /// remaining fields go through wildcard resolution.
    pub fn from_packet(config: &FmsConfig, packet: &AlarmPacket) -> Self {
        Self {
            vehicle_ric: resolve(config.vehicle.as_deref(), packet, FMS_DEFAULTS.ric),
            status_id: packet.get("status").unwrap_or_default().to_string(),
            status_note: packet.get("directionText").unwrap_or_default().to_string(),
            title: resolve(config.title.as_deref(), packet, FMS_DEFAULTS.title),
            text: resolve(config.message.as_deref(), packet, FMS_DEFAULTS.text),
            priority: config.priority.to_string(),
        }
    }
}

/// Body for the shared `/api/alarm` endpoint (POCSAG, ZVEI, MSG)
#[derive(Debug, Clone, Serialize)]
pub struct GenericAlarm {
    pub title: String,
    pub ric: String,
    pub text: String,
    pub priority: String,
}

impl GenericAlarm {
    /// Build a generic alarm payload with the given kind defaults
    pub fn from_packet(config: &AlarmConfig, defaults: KindDefaults, packet: &AlarmPacket) -> Self {
        Self {
            title: resolve(config.title.as_deref(), packet, defaults.title),
            ric: resolve(config.ric.as_deref(), packet, defaults.ric),
            text: resolve(config.message.as_deref(), packet, defaults.text),
            priority: config.priority.to_string(),
        }
    }
}
