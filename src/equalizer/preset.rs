use serde::{Deserialize, Serialize};

use crate::{
   equalizer::{BAND_COUNT, VolumeAdjustments},
   error::{Error, Result},
};

/// Equalizer presets built into the device firmware.
///
/// The discriminant is the protocol id sent in equalizer packets and must
/// never change.
#[repr(u16)]
#[derive(
   Debug,
   Clone,
   Copy,
   PartialEq,
   Eq,
   Hash,
   Serialize,
   Deserialize,
   strum::FromRepr,
   strum::Display,
   strum::EnumString,
   strum::EnumIter,
   strum::IntoStaticStr,
)]
pub enum PresetEqualizerProfile {
   SoundcoreSignature = 0x0000,
   Acoustic = 0x0001,
   BassBooster = 0x0002,
   BassReducer = 0x0003,
   Classical = 0x0004,
   Podcast = 0x0005,
   Dance = 0x0006,
   Deep = 0x0007,
   Electronic = 0x0008,
   Flat = 0x0009,
   HipHop = 0x000a,
   Jazz = 0x000b,
   Latin = 0x000c,
   Lounge = 0x000d,
   Piano = 0x000e,
   Pop = 0x000f,
   RnB = 0x0010,
   Rock = 0x0011,
   SmallSpeakers = 0x0012,
   SpokenWord = 0x0013,
   TrebleBooster = 0x0014,
   TrebleReducer = 0x0015,
}

impl PresetEqualizerProfile {
   /// Looks up a preset by its wire id.
   pub fn from_protocol_id(id: u16) -> Result<Self> {
      Self::from_repr(id).ok_or(Error::UnknownProfile { id })
   }

   /// Wire id of this preset.
   pub const fn protocol_id(self) -> u16 {
      self as u16
   }

   /// Preset name, as used by `Display` and `FromStr`.
   pub fn to_str(self) -> &'static str {
      self.into()
   }

   /// Band gains the firmware applies for this preset.
   pub const fn canonical_adjustments(self) -> VolumeAdjustments {
      VolumeAdjustments::from_table(self.bands())
   }

   const fn bands(self) -> [i8; BAND_COUNT] {
      match self {
         Self::SoundcoreSignature => [0, 0, 0, 0, 0, 0, 0, 0],
         Self::Acoustic => [40, 10, 20, 20, 40, 40, 40, 20],
         Self::BassBooster => [40, 30, 10, 0, 0, 0, 0, 0],
         Self::BassReducer => [-40, -30, -10, 0, 0, 0, 0, 0],
         Self::Classical => [30, 30, -20, -20, 0, 20, 30, 40],
         Self::Podcast => [-30, 20, 40, 40, 30, 20, 0, -20],
         Self::Dance => [20, -10, 0, 10, 20, 10, 40, 10],
         Self::Deep => [20, 10, 30, 30, 20, -20, -40, -50],
         Self::Electronic => [30, 20, -20, 20, 10, 20, 30, 30],
         Self::Flat => [-20, -20, -10, 0, 0, 0, -20, -20],
         Self::HipHop => [20, 30, -10, -10, 20, -10, 20, 30],
         Self::Jazz => [20, 20, -20, -20, 0, 20, 30, 40],
         Self::Latin => [0, 0, 0, 0, -30, -30, -30, 0],
         Self::Lounge => [-10, 20, 40, 30, 0, -20, 20, 10],
         Self::Piano => [0, 30, 30, 20, 40, 50, 30, 40],
         Self::Pop => [-10, 10, 30, 30, 10, -10, -10, -10],
         Self::RnB => [60, 50, -20, -20, 20, 30, 30, 40],
         Self::Rock => [30, 20, -10, -10, 10, 30, 30, 30],
         Self::SmallSpeakers => [40, 30, 10, 0, -20, -30, -40, -40],
         Self::SpokenWord => [-30, -20, 10, 20, 20, 10, 0, -30],
         Self::TrebleBooster => [-20, -20, -20, -10, 10, 20, 20, 40],
         Self::TrebleReducer => [0, 0, 0, -20, -30, -40, -40, -60],
      }
   }
}

#[cfg(test)]
mod tests {
   use std::{collections::HashSet, str::FromStr};

   use strum::IntoEnumIterator;

   use super::*;

   #[test]
   fn test_protocol_ids_round_trip() {
      for profile in PresetEqualizerProfile::iter() {
         assert_eq!(
            PresetEqualizerProfile::from_protocol_id(profile.protocol_id()).unwrap(),
            profile
         );
      }
   }

   #[test]
   fn test_protocol_ids_are_stable() {
      assert_eq!(PresetEqualizerProfile::SoundcoreSignature.protocol_id(), 0x0000);
      assert_eq!(PresetEqualizerProfile::Flat.protocol_id(), 0x0009);
      assert_eq!(PresetEqualizerProfile::RnB.protocol_id(), 0x0010);
      assert_eq!(PresetEqualizerProfile::TrebleReducer.protocol_id(), 0x0015);
      assert_eq!(PresetEqualizerProfile::iter().count(), 22);
   }

   #[test]
   fn test_unknown_protocol_id() {
      for id in [0x0016, 0x00ff, 0xfefe, 0xffff] {
         let err = PresetEqualizerProfile::from_protocol_id(id).unwrap_err();
         assert!(matches!(err, Error::UnknownProfile { id: got } if got == id));
      }
   }

   #[test]
   fn test_canonical_adjustments_are_valid() {
      let mut seen = HashSet::new();
      for profile in PresetEqualizerProfile::iter() {
         let adjustments = profile.canonical_adjustments();
         assert_eq!(
            VolumeAdjustments::new(adjustments.values()).unwrap(),
            adjustments,
            "{profile}"
         );
         assert!(seen.insert(adjustments), "duplicate bands for {profile}");
      }
   }

   #[test]
   fn test_names() {
      for profile in PresetEqualizerProfile::iter() {
         let name: &'static str = profile.into();
         assert_eq!(name, profile.to_str());
         assert_eq!(profile.to_string(), name);
         assert_eq!(PresetEqualizerProfile::from_str(name).unwrap(), profile);
      }
      assert!(PresetEqualizerProfile::from_str("Loudness").is_err());
   }
}
