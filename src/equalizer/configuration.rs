use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
   equalizer::{PresetEqualizerProfile, VolumeAdjustments},
   error::{Error, Result},
};

/// Profile id sent for custom band sets. Outside the preset id range.
pub const CUSTOM_PROFILE_ID: u16 = 0xfefe;

/// Either a named firmware preset or a user supplied band set.
///
/// A preset and a custom configuration are never equal, even when the custom
/// bands happen to match the preset's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EqualizerConfiguration {
   Preset(PresetEqualizerProfile),
   Custom(VolumeAdjustments),
}

impl EqualizerConfiguration {
   pub const fn from_preset(profile: PresetEqualizerProfile) -> Self {
      Self::Preset(profile)
   }

   /// Custom configuration taking ownership of `adjustments`.
   pub const fn from_adjustments(adjustments: VolumeAdjustments) -> Self {
      Self::Custom(adjustments)
   }

   /// Parses the wire form: profile id (little endian) then one byte per
   /// band.
   ///
   /// A preset id yields the preset even if the bands differ from its
   /// canonical ones; the bands are still validated.
   pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
      let Some((id, bands)) = bytes.split_first_chunk::<2>() else {
         return Err(Error::WrongBandCount { actual: 0 });
      };
      let adjustments = VolumeAdjustments::from_bytes(bands)?;

      match u16::from_le_bytes(*id) {
         CUSTOM_PROFILE_ID => Ok(Self::Custom(adjustments)),
         id => PresetEqualizerProfile::from_protocol_id(id).map(Self::Preset),
      }
   }

   /// Id sent on the wire: the preset's id, or [`CUSTOM_PROFILE_ID`].
   pub const fn profile_id(&self) -> u16 {
      match self {
         Self::Preset(profile) => profile.protocol_id(),
         Self::Custom(_) => CUSTOM_PROFILE_ID,
      }
   }

   /// The preset, if this is not a custom configuration.
   pub const fn preset_profile(&self) -> Option<PresetEqualizerProfile> {
      match self {
         Self::Preset(profile) => Some(*profile),
         Self::Custom(_) => None,
      }
   }

   /// Bands in effect. Presets resolve to their canonical bands.
   pub fn volume_adjustments(&self) -> VolumeAdjustments {
      match self {
         Self::Preset(profile) => profile.canonical_adjustments(),
         Self::Custom(adjustments) => adjustments.clone(),
      }
   }

   pub fn to_json(&self) -> serde_json::Value {
      json!({
          "preset_profile": self.preset_profile().map(PresetEqualizerProfile::to_str),
          "profile_id": self.profile_id(),
          "volume_adjustments": self.volume_adjustments().values(),
      })
   }
}

impl Default for EqualizerConfiguration {
   fn default() -> Self {
      Self::Preset(PresetEqualizerProfile::SoundcoreSignature)
   }
}

impl From<PresetEqualizerProfile> for EqualizerConfiguration {
   fn from(profile: PresetEqualizerProfile) -> Self {
      Self::from_preset(profile)
   }
}

impl From<VolumeAdjustments> for EqualizerConfiguration {
   fn from(adjustments: VolumeAdjustments) -> Self {
      Self::from_adjustments(adjustments)
   }
}

#[cfg(test)]
mod tests {
   use strum::IntoEnumIterator;

   use super::*;
   use crate::packets::{OutboundPacket, SetEqualizerPacket};

   #[test]
   fn test_preset_fidelity() {
      for profile in PresetEqualizerProfile::iter() {
         let configuration = EqualizerConfiguration::from_preset(profile);
         assert_eq!(configuration.profile_id(), profile.protocol_id());
         assert_eq!(
            configuration.volume_adjustments(),
            profile.canonical_adjustments()
         );
         assert_eq!(configuration.preset_profile(), Some(profile));
      }
   }

   #[test]
   fn test_custom_uses_sentinel_id() {
      let adjustments = VolumeAdjustments::new(&[0, 10, 20, 30, 40, 50, 60, 70]).unwrap();
      let configuration = EqualizerConfiguration::from_adjustments(adjustments.clone());
      assert_eq!(configuration.profile_id(), CUSTOM_PROFILE_ID);
      assert_eq!(configuration.preset_profile(), None);
      assert_eq!(configuration.volume_adjustments(), adjustments);
      assert!(PresetEqualizerProfile::from_protocol_id(CUSTOM_PROFILE_ID).is_err());
   }

   #[test]
   fn test_equality_is_structural() {
      let a = EqualizerConfiguration::from_preset(PresetEqualizerProfile::Rock);
      let b = EqualizerConfiguration::from_preset(PresetEqualizerProfile::Rock);
      let c = EqualizerConfiguration::from_preset(PresetEqualizerProfile::Pop);
      assert_eq!(a, b);
      assert_ne!(a, c);

      let bands = [5, 5, 5, 5, 5, 5, 5, 5];
      assert_eq!(
         EqualizerConfiguration::from_adjustments(VolumeAdjustments::new(&bands).unwrap()),
         EqualizerConfiguration::from_adjustments(VolumeAdjustments::new(&bands).unwrap()),
      );
   }

   #[test]
   fn test_preset_and_matching_custom_differ() {
      let preset = EqualizerConfiguration::from_preset(PresetEqualizerProfile::Acoustic);
      let custom = EqualizerConfiguration::from_adjustments(
         PresetEqualizerProfile::Acoustic.canonical_adjustments(),
      );
      assert_eq!(preset.volume_adjustments(), custom.volume_adjustments());
      assert_ne!(preset, custom);
   }

   #[test]
   fn test_to_json() {
      let preset = EqualizerConfiguration::from_preset(PresetEqualizerProfile::BassBooster);
      assert_eq!(
         preset.to_json(),
         json!({
             "preset_profile": "BassBooster",
             "profile_id": 2,
             "volume_adjustments": [40, 30, 10, 0, 0, 0, 0, 0],
         })
      );

      let custom = EqualizerConfiguration::from_adjustments(VolumeAdjustments::default());
      assert_eq!(custom.to_json()["preset_profile"], serde_json::Value::Null);
      assert_eq!(custom.to_json()["profile_id"], 0xfefe);
   }

   #[test]
   fn test_serde_keeps_variant() {
      let custom = EqualizerConfiguration::from_adjustments(
         PresetEqualizerProfile::Jazz.canonical_adjustments(),
      );
      let text = serde_json::to_string(&custom).unwrap();
      assert_eq!(
         text,
         r#"{"kind":"custom","value":[20,20,-20,-20,0,20,30,40]}"#
      );
      let parsed: EqualizerConfiguration = serde_json::from_str(&text).unwrap();
      assert_eq!(parsed, custom);

      let preset: EqualizerConfiguration =
         serde_json::from_str(r#"{"kind":"preset","value":"Jazz"}"#).unwrap();
      assert_eq!(preset, EqualizerConfiguration::from(PresetEqualizerProfile::Jazz));
      assert_ne!(preset, parsed);
   }

   #[test]
   fn test_from_bytes_reads_set_equalizer_body() {
      let custom = EqualizerConfiguration::from_adjustments(
         VolumeAdjustments::new(&[-120, -60, 0, 15, 30, 60, 90, 120]).unwrap(),
      );
      let configurations = PresetEqualizerProfile::iter()
         .map(EqualizerConfiguration::from_preset)
         .chain([custom]);

      for configuration in configurations {
         let body = SetEqualizerPacket::new(configuration.clone()).body();
         assert_eq!(
            EqualizerConfiguration::from_bytes(&body).unwrap(),
            configuration
         );
      }
   }

   #[test]
   fn test_from_bytes_reads_stereo_left_channel() {
      let left = EqualizerConfiguration::from_preset(PresetEqualizerProfile::Podcast);
      let right = EqualizerConfiguration::from_adjustments(VolumeAdjustments::default());
      let body = SetEqualizerPacket::new_stereo(left.clone(), right).body();

      assert_eq!(EqualizerConfiguration::from_bytes(&body[..10]).unwrap(), left);
      assert_eq!(
         VolumeAdjustments::from_bytes(&body[10..]).unwrap(),
         VolumeAdjustments::default()
      );
      // both channels at once are not one configuration
      assert!(matches!(
         EqualizerConfiguration::from_bytes(&body),
         Err(Error::WrongBandCount { actual: 16 })
      ));
   }

   #[test]
   fn test_from_bytes_keeps_preset_over_bands() {
      let bytes = [0x11, 0x00, 120, 120, 120, 120, 120, 120, 120, 120];
      assert_eq!(
         EqualizerConfiguration::from_bytes(&bytes).unwrap(),
         EqualizerConfiguration::from_preset(PresetEqualizerProfile::Rock)
      );
   }

   #[test]
   fn test_from_bytes_rejects_invalid() {
      let flat = [120u8; 8];

      let unknown = [[0x16, 0x00].as_slice(), flat.as_slice()].concat();
      assert!(matches!(
         EqualizerConfiguration::from_bytes(&unknown),
         Err(Error::UnknownProfile { id: 0x0016 })
      ));

      assert!(matches!(
         EqualizerConfiguration::from_bytes(&[0xfe]),
         Err(Error::WrongBandCount { actual: 0 })
      ));
      assert!(matches!(
         EqualizerConfiguration::from_bytes(&[0xfe, 0xfe, 120]),
         Err(Error::WrongBandCount { actual: 1 })
      ));

      let mut loud = [[0xfe, 0xfe].as_slice(), flat.as_slice()].concat();
      loud[5] = 241;
      assert!(matches!(
         EqualizerConfiguration::from_bytes(&loud),
         Err(Error::VolumeOutOfRange { band: 3, value: 121 })
      ));
   }
}
