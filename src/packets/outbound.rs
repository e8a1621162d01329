//! Packets sent to the device.

use crate::{
   codec::Codec,
   equalizer::{EqualizerConfiguration, StereoVolumeAdjustments},
   packets::protocol::{Packet, PacketKind},
};

/// A packet that can be framed and written to the device.
pub trait OutboundPacket {
   fn kind(&self) -> PacketKind;

   /// Payload between the length field and the checksum.
   fn body(&self) -> Packet;

   /// Full frame using the standard command table.
   fn bytes(&self) -> Packet
   where
      Self: Sized,
   {
      Codec::STANDARD.encode(self)
   }
}

/// Asks the device to report its full state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestStatePacket;

impl RequestStatePacket {
   pub const fn new() -> Self {
      Self
   }
}

impl OutboundPacket for RequestStatePacket {
   fn kind(&self) -> PacketKind {
      PacketKind::RequestState
   }

   fn body(&self) -> Packet {
      Packet::new()
   }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestFirmwareVersionPacket;

impl RequestFirmwareVersionPacket {
   pub const fn new() -> Self {
      Self
   }
}

impl OutboundPacket for RequestFirmwareVersionPacket {
   fn kind(&self) -> PacketKind {
      PacketKind::RequestFirmwareVersion
   }

   fn body(&self) -> Packet {
      Packet::new()
   }
}

/// Applies an equalizer configuration, optionally with a separate right
/// channel.
///
/// The body is the profile id (little endian) followed by the wire bytes of
/// each channel's bands, left first. With a right channel the profile id is
/// taken from the left configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetEqualizerPacket {
   configuration: EqualizerConfiguration,
   right: Option<EqualizerConfiguration>,
}

impl SetEqualizerPacket {
   pub const fn new(configuration: EqualizerConfiguration) -> Self {
      Self {
         configuration,
         right: None,
      }
   }

   pub const fn new_stereo(left: EqualizerConfiguration, right: EqualizerConfiguration) -> Self {
      Self {
         configuration: left,
         right: Some(right),
      }
   }

   /// Custom bands for each earbud.
   pub fn from_stereo_adjustments(adjustments: StereoVolumeAdjustments) -> Self {
      let (left, right) = adjustments.into_parts();
      Self::new_stereo(
         EqualizerConfiguration::from_adjustments(left),
         EqualizerConfiguration::from_adjustments(right),
      )
   }

   pub const fn configuration(&self) -> &EqualizerConfiguration {
      &self.configuration
   }

   pub const fn right_configuration(&self) -> Option<&EqualizerConfiguration> {
      self.right.as_ref()
   }
}

impl OutboundPacket for SetEqualizerPacket {
   fn kind(&self) -> PacketKind {
      PacketKind::SetEqualizer
   }

   fn body(&self) -> Packet {
      let mut body = Packet::new();
      body.extend_from_slice(&self.configuration.profile_id().to_le_bytes());
      body.extend_from_slice(&self.configuration.volume_adjustments().to_bytes());
      if let Some(right) = &self.right {
         body.extend_from_slice(&right.volume_adjustments().to_bytes());
      }
      body
   }
}
