//! Wildcard substitution engine for configured templates

use crate::packet::AlarmPacket;

/// Resolve a configured template against a packet.
///
/// Takes the configured template if one is set, otherwise the literal
/// default for that field, and substitutes all `{TOKEN}` wildcards.
/// Infallible on purpose: a missing or sparse configuration must never
/// keep an alarm from going out.
pub fn resolve(template: Option<&str>, packet: &AlarmPacket, default: &str) -> String {
    substitute(template.unwrap_or(default), packet)
}

/// Substitute `{TOKEN}` wildcards with packet field values
fn substitute(template: &str, packet: &AlarmPacket) -> String {
    let mut result = template.to_string();

    for (name, value) in packet.fields() {
        let token = format!("{{{}}}", name.to_uppercase());
        result = result.replace(&token, value);
    }

    result
}
