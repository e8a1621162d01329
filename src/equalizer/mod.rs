//! Equalizer value model.
//!
//! Band gains, the preset profile catalogue, preset/custom configurations
//! and stereo left/right pairs that parameterize equalizer packets.

pub mod configuration;
pub mod preset;
pub mod stereo;
pub mod volume_adjustments;

pub use configuration::{CUSTOM_PROFILE_ID, EqualizerConfiguration};
pub use preset::PresetEqualizerProfile;
pub use stereo::StereoVolumeAdjustments;
pub use volume_adjustments::VolumeAdjustments;

/// Number of equalizer bands on the device.
pub const BAND_COUNT: usize = 8;
/// Lowest band gain, in tenths of a decibel.
pub const MIN_VOLUME: i8 = -120;
/// Highest band gain, in tenths of a decibel.
pub const MAX_VOLUME: i8 = 120;
