//! Soundcore protocol definitions and frame layout.
//!
//! Every frame, in either direction, is laid out as
//! `command[7] | length: u16 LE | body | checksum`, where `length` counts the
//! whole frame and `checksum` is the wrapping sum of all preceding bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type Packet = SmallVec<[u8; 32]>;

pub const COMMAND_LEN: usize = 7;
const LENGTH_LEN: usize = 2;
const CHECKSUM_LEN: usize = 1;
/// Bytes before the body.
pub const HEADER_LEN: usize = COMMAND_LEN + LENGTH_LEN;
/// Size of a frame with an empty body.
pub const MIN_FRAME_LEN: usize = HEADER_LEN + CHECKSUM_LEN;

// Outbound commands
pub const CMD_REQUEST_STATE: Command = Command([0x08, 0xee, 0x00, 0x00, 0x00, 0x01, 0x01]);
pub const CMD_REQUEST_FIRMWARE_VERSION: Command =
   Command([0x08, 0xee, 0x00, 0x00, 0x00, 0x01, 0x05]);
pub const CMD_SET_EQUALIZER: Command = Command([0x08, 0xee, 0x00, 0x00, 0x00, 0x02, 0x81]);

// Inbound commands
pub const CMD_TWS_STATUS_UPDATE: Command = Command([0x09, 0xff, 0x00, 0x00, 0x01, 0x01, 0x02]);
pub const CMD_BATTERY_CHARGING_UPDATE: Command =
   Command([0x09, 0xff, 0x00, 0x00, 0x01, 0x01, 0x04]);
pub const CMD_FIRMWARE_VERSION_UPDATE: Command =
   Command([0x09, 0xff, 0x00, 0x00, 0x01, 0x01, 0x05]);
pub const CMD_SET_EQUALIZER_OK: Command = Command([0x09, 0xff, 0x00, 0x00, 0x01, 0x02, 0x81]);
pub const CMD_SET_SOUND_MODE_OK: Command = Command([0x09, 0xff, 0x00, 0x00, 0x01, 0x06, 0x81]);

/// The seven leading bytes identifying a packet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command([u8; COMMAND_LEN]);

impl Command {
   pub const fn new(bytes: [u8; COMMAND_LEN]) -> Self {
      Self(bytes)
   }

   pub const fn bytes(&self) -> &[u8; COMMAND_LEN] {
      &self.0
   }
}

impl fmt::Display for Command {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&hex::encode(self.0))
   }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum PacketKind {
   #[strum(serialize = "request state")]
   RequestState,
   #[strum(serialize = "request firmware version")]
   RequestFirmwareVersion,
   #[strum(serialize = "set equalizer")]
   SetEqualizer,
   #[strum(serialize = "set sound mode ok")]
   SetSoundModeOk,
   #[strum(serialize = "set equalizer ok")]
   SetEqualizerOk,
   #[strum(serialize = "tws status update")]
   TwsStatusUpdate,
   #[strum(serialize = "battery charging update")]
   BatteryChargingUpdate,
   #[strum(serialize = "firmware version update")]
   FirmwareVersionUpdate,
}

/// Command bytes used for each packet kind.
///
/// Missing entries in a deserialized table fall back to the standard
/// protocol values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandTable {
   pub request_state: Command,
   pub request_firmware_version: Command,
   pub set_equalizer: Command,
   pub set_sound_mode_ok: Command,
   pub set_equalizer_ok: Command,
   pub tws_status_update: Command,
   pub battery_charging_update: Command,
   pub firmware_version_update: Command,
}

impl CommandTable {
   pub const STANDARD: Self = Self {
      request_state: CMD_REQUEST_STATE,
      request_firmware_version: CMD_REQUEST_FIRMWARE_VERSION,
      set_equalizer: CMD_SET_EQUALIZER,
      set_sound_mode_ok: CMD_SET_SOUND_MODE_OK,
      set_equalizer_ok: CMD_SET_EQUALIZER_OK,
      tws_status_update: CMD_TWS_STATUS_UPDATE,
      battery_charging_update: CMD_BATTERY_CHARGING_UPDATE,
      firmware_version_update: CMD_FIRMWARE_VERSION_UPDATE,
   };

   pub const fn get(&self, kind: PacketKind) -> Command {
      match kind {
         PacketKind::RequestState => self.request_state,
         PacketKind::RequestFirmwareVersion => self.request_firmware_version,
         PacketKind::SetEqualizer => self.set_equalizer,
         PacketKind::SetSoundModeOk => self.set_sound_mode_ok,
         PacketKind::SetEqualizerOk => self.set_equalizer_ok,
         PacketKind::TwsStatusUpdate => self.tws_status_update,
         PacketKind::BatteryChargingUpdate => self.battery_charging_update,
         PacketKind::FirmwareVersionUpdate => self.firmware_version_update,
      }
   }
}

impl Default for CommandTable {
   fn default() -> Self {
      Self::STANDARD
   }
}

pub fn calculate_checksum(data: &[u8]) -> u8 {
   data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Frames `body` behind `command`, appending the length and checksum.
pub fn build_frame(command: Command, body: &[u8]) -> Packet {
   let length = MIN_FRAME_LEN + body.len();
   debug_assert!(length <= usize::from(u16::MAX), "frame too long");

   let mut packet: Packet = command
      .0
      .iter()
      .copied()
      .chain((length as u16).to_le_bytes())
      .chain(body.iter().copied())
      .collect();
   packet.push(calculate_checksum(&packet));
   packet
}
