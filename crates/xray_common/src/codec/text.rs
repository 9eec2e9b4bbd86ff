use codee::{Decoder, Encoder};

use crate::error::CodecError;
use crate::messages::OculusMessage;

/// Codec for the relay's plain-text WebSocket protocol.
///
/// Outbound frames are sent verbatim. Inbound frames are classified with
/// [`OculusMessage::parse`]; only blank frames are rejected.
///
/// ## Usage
///
/// ```rust,ignore
/// use xray_common::codec::OculusTextCodec;
/// use xray_common::OculusMessage;
///
/// let ws = use_websocket_with_options::<String, OculusMessage, OculusTextCodec, (), DummyEncoder>(
///     "ws://localhost:8080",
///     options
/// );
/// ```
pub struct OculusTextCodec;

impl Encoder<String> for OculusTextCodec {
    type Error = CodecError;
    type Encoded = String;

    fn encode(val: &String) -> Result<Self::Encoded, Self::Error> {
        Ok(val.clone())
    }
}

impl Encoder<OculusMessage> for OculusTextCodec {
    type Error = CodecError;
    type Encoded = String;

    fn encode(val: &OculusMessage) -> Result<Self::Encoded, Self::Error> {
        Ok(val.to_string())
    }
}

impl Decoder<OculusMessage> for OculusTextCodec {
    type Error = CodecError;
    type Encoded = str;

    fn decode(val: &Self::Encoded) -> Result<OculusMessage, Self::Error> {
        if val.trim().is_empty() {
            return Err(CodecError::EmptyFrame);
        }
        Ok(OculusMessage::parse(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::FRONTEND_HANDSHAKE;

    #[test]
    fn test_handshake_is_sent_verbatim() {
        let enc = <OculusTextCodec as Encoder<String>>::encode(&FRONTEND_HANDSHAKE.to_string()).unwrap();
        assert_eq!(enc, "Front-end client: Connected");
    }

    #[test]
    fn test_decode_classifies_frames() {
        let dec: OculusMessage = OculusTextCodec::decode("Oculus client: Set right-hand").unwrap();
        assert_eq!(dec, OculusMessage::Set("right-hand".into()));

        let dec: OculusMessage = OculusTextCodec::decode("Oculus client: Remove").unwrap();
        assert_eq!(dec, OculusMessage::Remove);
    }

    #[test]
    fn test_blank_frames_are_rejected() {
        let err = <OculusTextCodec as Decoder<OculusMessage>>::decode("   ").unwrap_err();
        assert_eq!(err, CodecError::EmptyFrame);
        assert!(<OculusTextCodec as Decoder<OculusMessage>>::decode("").is_err());
    }

    #[test]
    fn test_typed_messages_encode_to_wire_text() {
        let enc = <OculusTextCodec as Encoder<OculusMessage>>::encode(&OculusMessage::Set("cranium".into())).unwrap();
        assert_eq!(enc, "Oculus client: Set cranium");
    }
}
