//! Packets received from the device.

use std::{fmt, str};

use serde::{Deserialize, Serialize};
use serde_json::json;
use smol_str::SmolStr;

use crate::{
   codec::Codec,
   packets::{
      parser::{DecodeError, take_body, take_bool},
      protocol::PacketKind,
   },
};

const FIRMWARE_VERSION_LEN: usize = 5;
const SERIAL_NUMBER_LEN: usize = 16;
const FIRMWARE_VERSION_UPDATE_LEN: usize = 2 * FIRMWARE_VERSION_LEN + SERIAL_NUMBER_LEN;

/// A packet that can be decoded from an inbound frame.
pub trait InboundPacket: Sized {
   const KIND: PacketKind;

   /// Parses the frame body. The frame itself has already been checked.
   fn take(body: &[u8]) -> Result<Self, DecodeError>;

   /// Decodes a whole frame using the standard command table.
   fn decode(data: &[u8]) -> Result<Self, DecodeError> {
      Codec::STANDARD.decode(data)
   }
}

/// Acknowledgement of a sound mode change. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetSoundModeOkPacket;

impl SetSoundModeOkPacket {
   pub fn new(data: &[u8]) -> Result<Self, DecodeError> {
      Self::decode(data)
   }
}

impl InboundPacket for SetSoundModeOkPacket {
   const KIND: PacketKind = PacketKind::SetSoundModeOk;

   fn take(body: &[u8]) -> Result<Self, DecodeError> {
      take_body::<0>(Self::KIND, body).map(|_| Self)
   }
}

/// Acknowledgement of an equalizer change. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetEqualizerOkPacket;

impl SetEqualizerOkPacket {
   pub fn new(data: &[u8]) -> Result<Self, DecodeError> {
      Self::decode(data)
   }
}

impl InboundPacket for SetEqualizerOkPacket {
   const KIND: PacketKind = PacketKind::SetEqualizerOk;

   fn take(body: &[u8]) -> Result<Self, DecodeError> {
      take_body::<0>(Self::KIND, body).map(|_| Self)
   }
}

/// True wireless stereo pairing state between the two earbuds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwsStatusUpdatePacket {
   host_device: u8,
   tws_status: bool,
}

impl TwsStatusUpdatePacket {
   pub fn new(data: &[u8]) -> Result<Self, DecodeError> {
      Self::decode(data)
   }

   /// Which earbud currently acts as host.
   pub const fn host_device(&self) -> u8 {
      self.host_device
   }

   /// Whether the two earbuds are paired with each other.
   pub const fn tws_status(&self) -> bool {
      self.tws_status
   }

   pub fn to_json(self) -> serde_json::Value {
      json!({
          "host_device": self.host_device,
          "tws_status": self.tws_status,
      })
   }
}

impl InboundPacket for TwsStatusUpdatePacket {
   const KIND: PacketKind = PacketKind::TwsStatusUpdate;

   fn take(body: &[u8]) -> Result<Self, DecodeError> {
      let [host_device, tws_status] = take_body::<2>(Self::KIND, body)?;
      Ok(Self {
         host_device,
         tws_status: take_bool(tws_status)?,
      })
   }
}

/// Charging state of each earbud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatteryChargingUpdatePacket {
   left: bool,
   right: bool,
}

impl BatteryChargingUpdatePacket {
   pub fn new(data: &[u8]) -> Result<Self, DecodeError> {
      Self::decode(data)
   }

   pub const fn is_left_charging(&self) -> bool {
      self.left
   }

   pub const fn is_right_charging(&self) -> bool {
      self.right
   }

   pub fn to_json(self) -> serde_json::Value {
      json!({
          "left_charging": self.left,
          "right_charging": self.right,
      })
   }
}

impl InboundPacket for BatteryChargingUpdatePacket {
   const KIND: PacketKind = PacketKind::BatteryChargingUpdate;

   fn take(body: &[u8]) -> Result<Self, DecodeError> {
      let [left, right] = take_body::<2>(Self::KIND, body)?;
      Ok(Self {
         left: take_bool(left)?,
         right: take_bool(right)?,
      })
   }
}

/// Firmware version of one earbud, sent on the wire as ASCII `NN.NN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FirmwareVersion {
   major: u8,
   minor: u8,
}

impl FirmwareVersion {
   pub const fn new(major: u8, minor: u8) -> Self {
      Self { major, minor }
   }

   pub const fn major(&self) -> u8 {
      self.major
   }

   pub const fn minor(&self) -> u8 {
      self.minor
   }

   fn take(bytes: [u8; FIRMWARE_VERSION_LEN]) -> Result<Self, DecodeError> {
      let invalid = || DecodeError::InvalidFirmwareVersion { bytes };
      let [major_tens, major_ones, b'.', minor_tens, minor_ones] = bytes else {
         return Err(invalid());
      };
      Ok(Self {
         major: two_digits(major_tens, major_ones).ok_or_else(invalid)?,
         minor: two_digits(minor_tens, minor_ones).ok_or_else(invalid)?,
      })
   }
}

impl fmt::Display for FirmwareVersion {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{:02}.{:02}", self.major, self.minor)
   }
}

fn two_digits(tens: u8, ones: u8) -> Option<u8> {
   if tens.is_ascii_digit() && ones.is_ascii_digit() {
      Some((tens - b'0') * 10 + (ones - b'0'))
   } else {
      None
   }
}

/// Device serial number, 16 ASCII alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(SmolStr);

impl SerialNumber {
   pub fn as_str(&self) -> &str {
      &self.0
   }

   fn take(bytes: [u8; SERIAL_NUMBER_LEN]) -> Result<Self, DecodeError> {
      let invalid = DecodeError::InvalidSerialNumber { bytes };
      if !bytes.iter().all(u8::is_ascii_alphanumeric) {
         return Err(invalid);
      }
      str::from_utf8(&bytes)
         .map(|serial| Self(SmolStr::new(serial)))
         .map_err(|_| invalid)
   }
}

impl fmt::Display for SerialNumber {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// Reply to a firmware version request: both earbuds' versions and the
/// serial number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirmwareVersionUpdatePacket {
   left_firmware_version: FirmwareVersion,
   right_firmware_version: FirmwareVersion,
   serial_number: SerialNumber,
}

impl FirmwareVersionUpdatePacket {
   pub fn new(data: &[u8]) -> Result<Self, DecodeError> {
      Self::decode(data)
   }

   pub const fn left_firmware_version(&self) -> FirmwareVersion {
      self.left_firmware_version
   }

   pub const fn right_firmware_version(&self) -> FirmwareVersion {
      self.right_firmware_version
   }

   pub const fn serial_number(&self) -> &SerialNumber {
      &self.serial_number
   }

   pub fn to_json(&self) -> serde_json::Value {
      json!({
          "left_firmware_version": self.left_firmware_version.to_string(),
          "right_firmware_version": self.right_firmware_version.to_string(),
          "serial_number": self.serial_number.as_str(),
      })
   }
}

impl InboundPacket for FirmwareVersionUpdatePacket {
   const KIND: PacketKind = PacketKind::FirmwareVersionUpdate;

   fn take(body: &[u8]) -> Result<Self, DecodeError> {
      let body_size = || DecodeError::BodySize {
         kind: Self::KIND,
         expected: FIRMWARE_VERSION_UPDATE_LEN,
         actual: body.len(),
      };
      let (left, rest) = body
         .split_first_chunk::<FIRMWARE_VERSION_LEN>()
         .ok_or_else(body_size)?;
      let (right, rest) = rest
         .split_first_chunk::<FIRMWARE_VERSION_LEN>()
         .ok_or_else(body_size)?;
      let (serial_number, rest) = rest
         .split_first_chunk::<SERIAL_NUMBER_LEN>()
         .ok_or_else(body_size)?;
      if !rest.is_empty() {
         return Err(body_size());
      }

      Ok(Self {
         left_firmware_version: FirmwareVersion::take(*left)?,
         right_firmware_version: FirmwareVersion::take(*right)?,
         serial_number: SerialNumber::take(*serial_number)?,
      })
   }
}

/// Any inbound packet this crate understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedPacket {
   SetSoundModeOk(SetSoundModeOkPacket),
   SetEqualizerOk(SetEqualizerOkPacket),
   TwsStatusUpdate(TwsStatusUpdatePacket),
   BatteryChargingUpdate(BatteryChargingUpdatePacket),
   FirmwareVersionUpdate(FirmwareVersionUpdatePacket),
}

impl ParsedPacket {
   /// Decodes a frame of any known kind using the standard command table.
   pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
      Codec::STANDARD.decode_any(data)
   }

   pub const fn kind(&self) -> PacketKind {
      match self {
         Self::SetSoundModeOk(_) => SetSoundModeOkPacket::KIND,
         Self::SetEqualizerOk(_) => SetEqualizerOkPacket::KIND,
         Self::TwsStatusUpdate(_) => TwsStatusUpdatePacket::KIND,
         Self::BatteryChargingUpdate(_) => BatteryChargingUpdatePacket::KIND,
         Self::FirmwareVersionUpdate(_) => FirmwareVersionUpdatePacket::KIND,
      }
   }
}
