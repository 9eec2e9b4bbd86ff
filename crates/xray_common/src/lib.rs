//! # X-Ray Explorer common
//!
//! Target-independent core of the VR companion page: the text protocol spoken
//! by the headset relay, the body-part table, the anatomy REST seam, and the
//! view state with its typewriter reveal. Nothing here touches the DOM, so it
//! is tested natively.

pub mod api;
pub mod body_part;
pub mod codec;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod reveal;
pub mod view_state;

pub use api::{PartsApi, resolve_part};
pub use body_part::BodyPart;
pub use config::{CompanionConfig, RevealTiming};
pub use error::{ApiError, CodecError, ConfigError, UnknownPartCode};
pub use messages::OculusMessage;
pub use model::{Bone, Part, PartData};
pub use reveal::{Reveal, RevealPhase, Typewriter};
pub use view_state::{ActivePart, Route, SelectOutcome, Selection, StatusMessage, ViewState};
