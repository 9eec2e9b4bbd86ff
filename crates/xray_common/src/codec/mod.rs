mod text;

pub use text::OculusTextCodec;
