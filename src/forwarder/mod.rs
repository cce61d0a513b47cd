//! Fire-and-forget delivery of decoded alarms to the Divera247 API.
//!
//! The host dispatch system calls one entry point per decoded packet:
//! [`Forwarder::fms`], [`Forwarder::pocsag`], [`Forwarder::zvei`] or
//! [`Forwarder::msg`]. Each call resolves the configured templates,
//! builds the endpoint-specific payload and performs exactly one POST,
//! blocking the caller until the request completes, fails or hits the
//! configured timeout. Delivery failures are logged and counted, never
//! returned: a dead notification provider must not stall the dispatch
//! pipeline.

mod payload;

pub use payload::{FmsAlarm, GenericAlarm, KindDefaults};
pub use payload::{FMS_DEFAULTS, MSG_DEFAULTS, POCSAG_DEFAULTS, ZVEI_DEFAULTS};

use std::time::Instant;

use serde::Serialize;

use crate::config::Settings;
use crate::error::{ForwardError, Result};
use crate::metrics::DeliveryMetrics;
use crate::packet::{AlarmKind, AlarmPacket};

/// Dedicated endpoint for FMS status telegrams
pub const FMS_ENDPOINT: &str = "/api/fms";
/// Shared endpoint for POCSAG, ZVEI and free-text alarms
pub const ALARM_ENDPOINT: &str = "/api/alarm";

/// Forwards alarm packets to Divera247.
///
/// Holds the validated settings and a reusable blocking HTTP client;
/// safe to share across threads, calls carry no state between them.
pub struct Forwarder {
    settings: Settings,
    client: reqwest::blocking::Client,
}

impl Forwarder {
    /// Create a forwarder from validated settings.
    ///
    /// The only fallible part of the public surface: building the HTTP
    /// client or re-validating the settings can fail here, delivery
    /// itself never reports errors to the caller.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let client = reqwest::blocking::Client::builder()
            .timeout(settings.request_timeout())
            .connect_timeout(settings.request_timeout())
            .build()?;

        Ok(Self { settings, client })
    }

    /// Forward an FMS status telegram to `/api/fms`
    #[tracing::instrument(name = "forwarder.fms", skip(self, packet))]
    pub fn fms(&self, packet: &AlarmPacket) {
        let alarm = FmsAlarm::from_packet(&self.settings.fms, packet);
        self.deliver(AlarmKind::Fms, FMS_ENDPOINT, &alarm);
    }

    /// Forward a POCSAG paging alarm to `/api/alarm`
    #[tracing::instrument(name = "forwarder.pocsag", skip(self, packet))]
    pub fn pocsag(&self, packet: &AlarmPacket) {
        let alarm = GenericAlarm::from_packet(&self.settings.pocsag, POCSAG_DEFAULTS, packet);
        self.deliver(AlarmKind::Pocsag, ALARM_ENDPOINT, &alarm);
    }

    /// Forward a ZVEI tone alarm to `/api/alarm`
    #[tracing::instrument(name = "forwarder.zvei", skip(self, packet))]
    pub fn zvei(&self, packet: &AlarmPacket) {
        let alarm = GenericAlarm::from_packet(&self.settings.zvei, ZVEI_DEFAULTS, packet);
        self.deliver(AlarmKind::Zvei, ALARM_ENDPOINT, &alarm);
    }

    /// Forward a free-text message to `/api/alarm`
    #[tracing::instrument(name = "forwarder.msg", skip(self, packet))]
    pub fn msg(&self, packet: &AlarmPacket) {
        let alarm = GenericAlarm::from_packet(&self.settings.msg, MSG_DEFAULTS, packet);
        self.deliver(AlarmKind::Msg, ALARM_ENDPOINT, &alarm);
    }

    /// Deliver one payload and absorb the outcome into logs + metrics
    fn deliver<T: Serialize>(&self, kind: AlarmKind, path: &str, alarm: &T) {
        match self.dispatch(path, alarm) {
            Ok(()) => DeliveryMetrics::record_forwarded(kind.as_str()),
            Err(ForwardError::RemoteStatus { status, body }) => {
                tracing::warn!(
                    kind = %kind,
                    status = %status,
                    body = %body,
                    "Divera247 rejected alarm"
                );
                DeliveryMetrics::record_status_failure(kind.as_str());
            }
            Err(err) => {
                tracing::error!(kind = %kind, error = %err, "Failed to deliver alarm");
                DeliveryMetrics::record_transport_failure(kind.as_str());
            }
        }
    }

    /// Perform the single POST request for one alarm.
    ///
    /// The access key travels as a query parameter, never inside the
    /// JSON body. Blocks until the response arrives or the client
    /// timeout fires.
    fn dispatch<T: Serialize>(&self, path: &str, alarm: &T) -> Result<()> {
        let url = format!("{}{}", self.settings.base_url.trim_end_matches('/'), path);
        tracing::debug!(url = %url, "Sending alarm request");

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .query(&[("accesskey", self.settings.accesskey.as_str())])
            .json(alarm)
            .send()?;
        DeliveryMetrics::record_latency(started.elapsed().as_secs_f64());

        let status = response.status();
        let body = response.text().unwrap_or_default();
        tracing::info!(
            url = %url,
            status = %status.as_u16(),
            body = %body,
            "Divera247 response"
        );

        if !status.is_success() {
            return Err(ForwardError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
