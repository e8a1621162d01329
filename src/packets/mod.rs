//! Soundcore packet encoding and decoding.
//!
//! Outbound packets are framed with [`protocol::build_frame`]; inbound frames
//! are checked by [`parser::parse_frame`] before their body is decoded.

pub mod inbound;
pub mod outbound;
pub mod parser;
pub mod protocol;

pub use inbound::{
   BatteryChargingUpdatePacket, FirmwareVersion, FirmwareVersionUpdatePacket, InboundPacket,
   ParsedPacket, SerialNumber, SetEqualizerOkPacket, SetSoundModeOkPacket, TwsStatusUpdatePacket,
};
pub use outbound::{
   OutboundPacket, RequestFirmwareVersionPacket, RequestStatePacket, SetEqualizerPacket,
};
pub use parser::DecodeError;
pub use protocol::{Command, CommandTable, Packet, PacketKind};
