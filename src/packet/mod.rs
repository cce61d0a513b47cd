//! Decoded alarm events as handed over by the host dispatch system.
//!
//! A packet is read-only from the forwarder's point of view: the host
//! decodes the radio transmission, fills in the fields it understood,
//! and invokes one forwarder entry point per packet. Nothing here is
//! retained after the call returns.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four dispatch event categories the forwarder handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmKind {
    /// FMS status telegram (vehicle status change)
    Fms,
    /// POCSAG pager alarm
    Pocsag,
    /// ZVEI five-tone alarm
    Zvei,
    /// Free-text message
    Msg,
}

impl AlarmKind {
    /// Stable lowercase name, used for config sections, logs and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmKind::Fms => "fms",
            AlarmKind::Pocsag => "pocsag",
            AlarmKind::Zvei => "zvei",
            AlarmKind::Msg => "msg",
        }
    }
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decoded alarm event.
///
/// Fields are opaque string key/value pairs; which keys are present
/// depends on the alarm kind (`ric`, `sric` and `msg` for POCSAG,
/// `tone` for ZVEI, `status` and `directionText` for FMS, and so on).
/// Field names double as wildcard tokens for template substitution:
/// field `ric` is addressed as `{RIC}` in a template string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmPacket {
    /// Which decoder produced this packet
    pub kind: AlarmKind,
    /// When the host received the transmission
    pub received_at: DateTime<Utc>,
    /// Decoded fields, keyed by the host's field names
    fields: HashMap<String, String>,
}

impl AlarmPacket {
    /// Create an empty packet of the given kind, timestamped now
    pub fn new(kind: AlarmKind) -> Self {
        Self {
            kind,
            received_at: Utc::now(),
            fields: HashMap::new(),
        }
    }

    /// Add a decoded field (builder style)
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a decoded field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Iterate over all decoded fields
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_builder() {
        let packet = AlarmPacket::new(AlarmKind::Pocsag)
            .field("ric", "12345")
            .field("msg", "Fire at main street");

        assert_eq!(packet.kind, AlarmKind::Pocsag);
        assert_eq!(packet.get("ric"), Some("12345"));
        assert_eq!(packet.get("msg"), Some("Fire at main street"));
        assert_eq!(packet.get("tone"), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(AlarmKind::Fms.as_str(), "fms");
        assert_eq!(AlarmKind::Pocsag.as_str(), "pocsag");
        assert_eq!(AlarmKind::Zvei.as_str(), "zvei");
        assert_eq!(AlarmKind::Msg.as_str(), "msg");
        assert_eq!(AlarmKind::Zvei.to_string(), "zvei");
    }

    #[test]
    fn test_fields_iteration() {
        let packet = AlarmPacket::new(AlarmKind::Zvei).field("tone", "25978");
        let fields: Vec<_> = packet.fields().collect();
        assert_eq!(fields, vec![("tone", "25978")]);
    }
}
