use thiserror::Error;

/// Errors that can occur while forwarding an alarm.
///
/// These never cross the forwarder's public entry points: delivery
/// failures are logged and counted there, not re-raised, so the host
/// dispatch pipeline keeps running when Divera247 is unreachable. The
/// only fallible public surface is `Forwarder::new`.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote API returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, ForwardError>;
