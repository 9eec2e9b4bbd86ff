//! Everything the explorer page renders, and the transitions that change it.
//!
//! Inbound frames go through [`ViewState::route`]. A selection needs REST data,
//! so routing a `Set` frame returns [`Route::Resolve`]; the caller fetches the
//! part and hands the result to [`ViewState::apply_part`].

use crate::body_part::BodyPart;
use crate::config::CompanionConfig;
use crate::messages::OculusMessage;
use crate::model::{Bone, PartData};
use crate::reveal::Reveal;

/// Status line shown above the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    /// The headset joined the relay.
    HeadsetConnected,
    /// The headset left the relay.
    HeadsetDisconnected,
    /// Our own socket failed.
    ConnectionError,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            StatusMessage::HeadsetConnected => "Conexión exitosa",
            StatusMessage::HeadsetDisconnected => "El Oculus se ha desconectado",
            StatusMessage::ConnectionError => "Error de conexión con el Oculus",
        }
    }
}

/// The part currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePart {
    pub name: String,
    pub description: String,
    pub bones: Vec<Bone>,
    pub reveal: Reveal,
}

impl ActivePart {
    fn new(data: PartData) -> Self {
        let reveal = Reveal::start(data.name.clone(), data.description.clone());
        Self {
            name: data.name,
            description: data.description,
            bones: data.bones,
            reveal,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Active(ActivePart),
}

/// What the caller must do after routing a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Fetch this part and pass the result to [`ViewState::apply_part`].
    Resolve(BodyPart),
    /// The frame was applied to the state.
    Applied,
    /// A `Set` frame carried a code outside the body-part table. State untouched.
    UnknownPart(String),
    /// Not a frame we react to. State untouched.
    Ignored,
}

/// Result of [`ViewState::apply_part`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing was selected; a new reveal cycle started.
    Selected,
    /// The same part again; bones refreshed, reveal left alone.
    Refreshed,
    /// A different part replaced the active one; the reveal restarted.
    Retargeted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Our socket to the relay is open.
    pub connected: bool,
    /// The headset has not announced itself yet.
    pub awaiting_client: bool,
    pub status: Option<StatusMessage>,
    pub selection: Selection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            connected: false,
            awaiting_client: true,
            status: None,
            selection: Selection::Idle,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_part(&self) -> Option<&ActivePart> {
        match &self.selection {
            Selection::Active(part) => Some(part),
            Selection::Idle => None,
        }
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.active_part().map(|part| &part.reveal)
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal().is_some_and(Reveal::is_revealing)
    }

    /// Apply one inbound frame.
    pub fn route(&mut self, message: &OculusMessage) -> Route {
        match message {
            OculusMessage::Set(code) => match BodyPart::from_code(code) {
                Some(part) => Route::Resolve(part),
                None => {
                    log::error!("Body part not found in the code table: {}", code);
                    Route::UnknownPart(code.clone())
                }
            },
            OculusMessage::Connected => {
                self.status = Some(StatusMessage::HeadsetConnected);
                self.awaiting_client = false;
                Route::Applied
            }
            OculusMessage::Remove => {
                self.selection = Selection::Idle;
                self.status = None;
                Route::Applied
            }
            OculusMessage::Disconnected => {
                self.status = Some(StatusMessage::HeadsetDisconnected);
                self.connected = false;
                Route::Applied
            }
            OculusMessage::Unrecognized(text) => {
                log::debug!("Ignoring frame: {}", text);
                Route::Ignored
            }
        }
    }

    /// Show resolved part data.
    pub fn apply_part(&mut self, data: PartData) -> SelectOutcome {
        match &mut self.selection {
            Selection::Active(active)
                if active.name == data.name && active.description == data.description =>
            {
                active.bones = data.bones;
                SelectOutcome::Refreshed
            }
            Selection::Active(active) => {
                *active = ActivePart::new(data);
                SelectOutcome::Retargeted
            }
            Selection::Idle => {
                self.selection = Selection::Active(ActivePart::new(data));
                SelectOutcome::Selected
            }
        }
    }

    /// Advance the running reveal by one character.
    pub fn advance_reveal(&mut self) {
        if let Selection::Active(active) = &mut self.selection {
            active.reveal.advance();
        }
    }

    pub fn on_socket_open(&mut self) {
        self.connected = true;
    }

    pub fn on_socket_close(&mut self, config: &CompanionConfig) {
        self.connected = false;
        if config.status_on_close {
            self.status = Some(StatusMessage::HeadsetDisconnected);
        }
    }

    pub fn on_socket_error(&mut self) {
        self.status = Some(StatusMessage::ConnectionError);
    }
}
