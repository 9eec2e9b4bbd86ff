//! Text protocol spoken by the headset relay.
//!
//! Every frame is a plain UTF-8 string. The relay prefixes frames coming from
//! the headset with [`OCULUS_PREFIX`]; this front-end announces itself once with
//! [`FRONTEND_HANDSHAKE`] after the socket opens.

use std::fmt::{self, Display};

/// Prefix of every frame originating from the headset client.
pub const OCULUS_PREFIX: &str = "Oculus client: ";

/// Prefix of a selection frame, followed by a body-part code.
pub const SET_PREFIX: &str = "Oculus client: Set ";
pub const CONNECTED: &str = "Oculus client: Connected";
pub const REMOVE: &str = "Oculus client: Remove";
pub const DISCONNECTED: &str = "Oculus client: Disconnected";

/// Sent by the front-end as soon as the socket is open.
pub const FRONTEND_HANDSHAKE: &str = "Front-end client: Connected";

/// A decoded frame from the headset relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OculusMessage {
    /// The user pointed at a body part. Holds the raw (trimmed) code, which may
    /// not be a known one.
    Set(String),
    /// The headset joined the relay.
    Connected,
    /// The user dismissed the current selection.
    Remove,
    /// The headset left the relay.
    Disconnected,
    /// Anything else; kept for logging.
    Unrecognized(String),
}

impl OculusMessage {
    /// Classify a raw frame. The `Set` prefix is checked before the exact
    /// sentinels, and the first matching rule wins.
    pub fn parse(text: &str) -> Self {
        if let Some(code) = text.strip_prefix(SET_PREFIX) {
            return OculusMessage::Set(code.trim().to_string());
        }
        match text {
            CONNECTED => OculusMessage::Connected,
            REMOVE => OculusMessage::Remove,
            DISCONNECTED => OculusMessage::Disconnected,
            other => OculusMessage::Unrecognized(other.to_string()),
        }
    }
}

impl Display for OculusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OculusMessage::Set(code) => write!(f, "{SET_PREFIX}{code}"),
            OculusMessage::Connected => f.write_str(CONNECTED),
            OculusMessage::Remove => f.write_str(REMOVE),
            OculusMessage::Disconnected => f.write_str(DISCONNECTED),
            OculusMessage::Unrecognized(text) => f.write_str(text),
        }
    }
}
