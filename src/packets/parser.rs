//! Frame parsing for inbound Soundcore packets.
//!
//! A frame is rejected as a whole: size, length field, checksum, command and
//! body are validated in that order and the first failure is returned.

use log::{debug, warn};
use thiserror::Error;

use crate::packets::protocol::{Command, HEADER_LEN, MIN_FRAME_LEN, PacketKind, calculate_checksum};

/// Error type for inbound frame decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
   /// Buffer cannot even hold an empty frame
   #[error("Packet too short: expected at least {expected} bytes, got {actual}")]
   TooShort { expected: usize, actual: usize },

   /// Length field disagrees with the buffer size
   #[error("Packet size mismatch: length field says {declared} bytes, got {actual} bytes")]
   LengthMismatch { declared: usize, actual: usize },

   #[error("Checksum mismatch: expected 0x{expected:02x}, got 0x{actual:02x}")]
   ChecksumMismatch { expected: u8, actual: u8 },

   /// Frame is valid but carries a different command than requested
   #[error("Not a {expected} packet: command {actual}")]
   WrongPacketType {
      expected: PacketKind,
      actual: Command,
   },

   #[error("Unknown command: {command}")]
   UnknownCommand { command: Command },

   #[error("Invalid {kind} body: expected {expected} bytes, got {actual}")]
   BodySize {
      kind: PacketKind,
      expected: usize,
      actual: usize,
   },

   #[error("Invalid boolean: 0x{byte:02x}")]
   InvalidBool { byte: u8 },

   /// Firmware version is not `NN.NN` in ASCII digits
   #[error("Invalid firmware version: {}", hex::encode(bytes))]
   InvalidFirmwareVersion { bytes: [u8; 5] },

   #[error("Invalid serial number: {}", hex::encode(bytes))]
   InvalidSerialNumber { bytes: [u8; 16] },
}

/// A checked frame, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
   pub command: Command,
   pub body: &'a [u8],
}

/// Splits `data` into command and body after checking size, length field
/// and (optionally) checksum.
pub fn parse_frame(data: &[u8], verify_checksum: bool) -> Result<Frame<'_>, DecodeError> {
   debug!("Inbound frame: {}", hex::encode(data));

   let too_short = || DecodeError::TooShort {
      expected: MIN_FRAME_LEN,
      actual: data.len(),
   };
   let (header, rest) = data.split_first_chunk::<HEADER_LEN>().ok_or_else(too_short)?;
   let (&checksum, body) = rest.split_last().ok_or_else(too_short)?;
   let [command @ .., length_lo, length_hi] = *header;

   let declared = usize::from(u16::from_le_bytes([length_lo, length_hi]));
   if declared != data.len() {
      return Err(DecodeError::LengthMismatch {
         declared,
         actual: data.len(),
      });
   }

   let checked = &data[..HEADER_LEN + body.len()];
   let expected = calculate_checksum(checked);
   if checksum != expected {
      if verify_checksum {
         warn!("Checksum mismatch: expected 0x{expected:02x}, got 0x{checksum:02x}");
         return Err(DecodeError::ChecksumMismatch {
            expected,
            actual: checksum,
         });
      }
      warn!("Ignoring checksum mismatch: expected 0x{expected:02x}, got 0x{checksum:02x}");
   }

   Ok(Frame {
      command: Command::new(command),
      body,
   })
}

/// Checks that a body is exactly `N` bytes for `kind`.
pub fn take_body<const N: usize>(kind: PacketKind, body: &[u8]) -> Result<[u8; N], DecodeError> {
   body.try_into().map_err(|_| DecodeError::BodySize {
      kind,
      expected: N,
      actual: body.len(),
   })
}

pub fn take_bool(byte: u8) -> Result<bool, DecodeError> {
   match byte {
      0x00 => Ok(false),
      0x01 => Ok(true),
      _ => Err(DecodeError::InvalidBool { byte }),
   }
}
