//! Page building blocks.

mod bone_list;
mod icons;
mod layout;
mod part_details;

pub use bone_list::BoneList;
pub use icons::{EyeIcon, FingerprintIcon, SelectionIcon, SkeletonIcon};
pub use layout::{Footer, Header};
pub use part_details::PartDetails;
