//! Soundcore device protocol codec
//!
//! Builds outbound command packets, parses inbound notifications, and models
//! the equalizer configurations those packets carry. Transport (Bluetooth
//! connection, GATT reads and writes, retries) is left to the caller: this
//! crate only turns values into bytes and bytes into values.

pub mod codec;
pub mod config;
pub mod equalizer;
pub mod error;
pub mod packets;

pub use codec::Codec;
pub use config::CodecConfig;
pub use error::{Error, Result};
