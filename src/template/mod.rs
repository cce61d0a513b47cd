//! Wildcard template system.
//!
//! Configured template strings may contain `{TOKEN}` wildcards that are
//! replaced with decoded packet fields before the payload is sent. The
//! token for a field is its uppercased name: the `ric` field is written
//! as `{RIC}`, `directionText` as `{DIRECTIONTEXT}`. Tokens without a
//! matching field are left untouched so that a sparsely decoded packet
//! still produces a deliverable (if less pretty) notification.
//!
//! # Example
//!
//! ```ignore
//! let packet = AlarmPacket::new(AlarmKind::Pocsag).field("ric", "12345");
//! let title = resolve(Some("ALERT: {RIC}"), &packet, "{MSG}");
//! assert_eq!(title, "ALERT: 12345");
//! ```

mod substitution;

pub use substitution::resolve;
