//! Encoding and decoding with a configurable command table.
//!
//! Packet types encode and decode themselves through [`Codec::STANDARD`].
//! Callers talking to a device with different command bytes build a
//! [`Codec`] from a [`CodecConfig`] and route packets through it instead.

use log::{trace, warn};

use crate::{
   config::CodecConfig,
   error::Result,
   packets::{
      inbound::{
         BatteryChargingUpdatePacket, FirmwareVersionUpdatePacket, InboundPacket, ParsedPacket,
         SetEqualizerOkPacket, SetSoundModeOkPacket, TwsStatusUpdatePacket,
      },
      outbound::OutboundPacket,
      parser::{DecodeError, parse_frame},
      protocol::{Packet, build_frame},
   },
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Codec {
   config: CodecConfig,
}

impl Codec {
   pub const STANDARD: Self = Self::new(CodecConfig::STANDARD);

   pub const fn new(config: CodecConfig) -> Self {
      Self { config }
   }

   /// Builds a codec from the on-disk configuration.
   pub fn load() -> Result<Self> {
      Ok(Self::new(CodecConfig::load()?))
   }

   pub const fn config(&self) -> &CodecConfig {
      &self.config
   }

   pub fn encode<P: OutboundPacket>(&self, packet: &P) -> Packet {
      let kind = packet.kind();
      let frame = build_frame(self.config.commands.get(kind), &packet.body());
      trace!("Encoded {kind} packet: {}", hex::encode(&frame));
      frame
   }

   /// Decodes a frame that must be of kind `T`.
   pub fn decode<T: InboundPacket>(&self, data: &[u8]) -> std::result::Result<T, DecodeError> {
      let frame = parse_frame(data, self.config.verify_checksum)?;
      let expected = self.config.commands.get(T::KIND);
      if frame.command != expected {
         return Err(DecodeError::WrongPacketType {
            expected: T::KIND,
            actual: frame.command,
         });
      }
      T::take(frame.body)
   }

   /// Decodes a frame of any known inbound kind.
   pub fn decode_any(&self, data: &[u8]) -> std::result::Result<ParsedPacket, DecodeError> {
      let frame = parse_frame(data, self.config.verify_checksum)?;
      let commands = &self.config.commands;

      let packet = if frame.command == commands.set_sound_mode_ok {
         ParsedPacket::SetSoundModeOk(SetSoundModeOkPacket::take(frame.body)?)
      } else if frame.command == commands.set_equalizer_ok {
         ParsedPacket::SetEqualizerOk(SetEqualizerOkPacket::take(frame.body)?)
      } else if frame.command == commands.tws_status_update {
         ParsedPacket::TwsStatusUpdate(TwsStatusUpdatePacket::take(frame.body)?)
      } else if frame.command == commands.battery_charging_update {
         ParsedPacket::BatteryChargingUpdate(BatteryChargingUpdatePacket::take(frame.body)?)
      } else if frame.command == commands.firmware_version_update {
         ParsedPacket::FirmwareVersionUpdate(FirmwareVersionUpdatePacket::take(frame.body)?)
      } else {
         warn!("Unknown inbound command: {}", frame.command);
         return Err(DecodeError::UnknownCommand {
            command: frame.command,
         });
      };
      Ok(packet)
   }
}
