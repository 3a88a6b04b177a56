//! Data structures for built configurations and the presets that fill them

pub mod computer;
pub mod preset;

pub use computer::{Computer, UNSET};
pub use preset::{Preset, PresetCatalog, Variant};
