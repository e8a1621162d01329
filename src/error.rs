//! Error types for the Soundcore codec.
//!
//! Value construction errors (band ranges, band counts, preset ids), inbound
//! decode failures and configuration loading errors all surface through
//! [`Error`].

use thiserror::Error;

use crate::{
   equalizer::{BAND_COUNT, MAX_VOLUME, MIN_VOLUME},
   packets::parser::DecodeError,
};

/// Main error type for the codec.
#[derive(Error, Debug)]
pub enum Error {
   #[error(
      "Volume adjustment {value} in band {band} is outside {min}..={max}",
      min = MIN_VOLUME,
      max = MAX_VOLUME
   )]
   VolumeOutOfRange { band: usize, value: i16 },

   #[error("Expected {expected} volume adjustments, got {actual}", expected = BAND_COUNT)]
   WrongBandCount { actual: usize },

   #[error("Unknown preset equalizer profile id: 0x{id:04x}")]
   UnknownProfile { id: u16 },

   #[error("Decode error: {0}")]
   Decode(#[from] DecodeError),

   #[error("I/O error: {0}")]
   Io(#[from] std::io::Error),

   #[error("Could not determine config directory")]
   ConfigDirNotFound,

   #[error("TOML parsing error: {0}")]
   TomlParse(#[from] toml::de::Error),

   #[error("TOML serialization error: {0}")]
   TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
