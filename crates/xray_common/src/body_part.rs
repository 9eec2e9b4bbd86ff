use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownPartCode;

/// A body region the headset client can point at.
///
/// The headset sends the short [`code`](BodyPart::code); the REST API knows the
/// region by its [`display_name`](BodyPart::display_name).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BodyPart {
    Cranium,
    RibCage,
    SpinalCord,
    LeftTop,
    RightTop,
    LeftHand,
    RightHand,
    LeftBottom,
    RightBottom,
    LeftFoot,
    RightFoot,
}

impl BodyPart {
    const ALL: [BodyPart; 11] = [
        BodyPart::Cranium,
        BodyPart::RibCage,
        BodyPart::SpinalCord,
        BodyPart::LeftTop,
        BodyPart::RightTop,
        BodyPart::LeftHand,
        BodyPart::RightHand,
        BodyPart::LeftBottom,
        BodyPart::RightBottom,
        BodyPart::LeftFoot,
        BodyPart::RightFoot,
    ];

    /// Every known region, in the order the headset lists them.
    pub fn all() -> &'static [BodyPart] {
        &Self::ALL
    }

    /// Code used on the wire by the headset client.
    pub fn code(self) -> &'static str {
        match self {
            BodyPart::Cranium => "cranium",
            BodyPart::RibCage => "rib-cage",
            BodyPart::SpinalCord => "spinal-cord",
            BodyPart::LeftTop => "left-top",
            BodyPart::RightTop => "right-top",
            BodyPart::LeftHand => "left-hand",
            BodyPart::RightHand => "right-hand",
            BodyPart::LeftBottom => "left-bottom",
            BodyPart::RightBottom => "right-bottom",
            BodyPart::LeftFoot => "left-foot",
            BodyPart::RightFoot => "right-foot",
        }
    }

    /// Name of the region as stored by the REST API (`nombre` of `/partes`).
    pub fn display_name(self) -> &'static str {
        match self {
            BodyPart::Cranium => "Cráneo",
            BodyPart::RibCage => "Caja torácica",
            BodyPart::SpinalCord => "Columna vertebral",
            BodyPart::LeftTop => "Extremidad superior izquierda",
            BodyPart::RightTop => "Extremidad superior derecha",
            BodyPart::LeftHand => "Mano izquierda",
            BodyPart::RightHand => "Mano derecha",
            BodyPart::LeftBottom => "Extremidad inferior izquierda",
            BodyPart::RightBottom => "Extremidad inferior derecha",
            BodyPart::LeftFoot => "Pie izquierdo",
            BodyPart::RightFoot => "Pie derecho",
        }
    }

    pub fn from_code(code: &str) -> Option<BodyPart> {
        Self::ALL.iter().copied().find(|part| part.code() == code)
    }
}

impl FromStr for BodyPart {
    type Err = UnknownPartCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::from_code(s).ok_or_else(|| UnknownPartCode(s.to_string()))
    }
}

impl Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
