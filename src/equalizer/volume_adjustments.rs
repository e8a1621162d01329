use serde::{Deserialize, Serialize};

use crate::{
   equalizer::{BAND_COUNT, MAX_VOLUME, MIN_VOLUME},
   error::{Error, Result},
};

/// Added to each gain on the wire so that `MIN_VOLUME` is sent as `0x00`.
const WIRE_OFFSET: i16 = -(MIN_VOLUME as i16);

/// Gain of every equalizer band, in tenths of a decibel.
///
/// Always exactly [`BAND_COUNT`] values, each within
/// `MIN_VOLUME..=MAX_VOLUME`. Deliberately not `Copy`: composing types take
/// these by value and the source binding is gone afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i8>", into = "Vec<i8>")]
pub struct VolumeAdjustments([i8; BAND_COUNT]);

impl VolumeAdjustments {
   /// Validates and builds a band set. The band count is checked before the
   /// individual ranges.
   pub fn new(values: &[i8]) -> Result<Self> {
      let bands: [i8; BAND_COUNT] = values.try_into().map_err(|_| Error::WrongBandCount {
         actual: values.len(),
      })?;

      if let Some((band, &value)) = bands
         .iter()
         .enumerate()
         .find(|(_, v)| !(MIN_VOLUME..=MAX_VOLUME).contains(*v))
      {
         return Err(Error::VolumeOutOfRange {
            band,
            value: value.into(),
         });
      }
      Ok(Self(bands))
   }

   /// Builds a band set from a table already known to be in range.
   pub(crate) const fn from_table(bands: [i8; BAND_COUNT]) -> Self {
      Self(bands)
   }

   pub const fn values(&self) -> &[i8; BAND_COUNT] {
      &self.0
   }

   /// Band gains in decibels.
   pub fn decibels(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
      self.0.iter().map(|&v| f32::from(v) / 10.0)
   }

   /// Wire representation: one offset byte per band, `0..=240`.
   pub fn to_bytes(&self) -> [u8; BAND_COUNT] {
      self.0.map(|v| (i16::from(v) + WIRE_OFFSET) as u8)
   }

   /// Inverse of [`to_bytes`](Self::to_bytes).
   pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
      let bytes: [u8; BAND_COUNT] = bytes.try_into().map_err(|_| Error::WrongBandCount {
         actual: bytes.len(),
      })?;

      let mut bands = [0i8; BAND_COUNT];
      for (band, (&byte, slot)) in bytes.iter().zip(bands.iter_mut()).enumerate() {
         let value = i16::from(byte) - WIRE_OFFSET;
         *slot = i8::try_from(value)
            .ok()
            .filter(|v| (MIN_VOLUME..=MAX_VOLUME).contains(v))
            .ok_or(Error::VolumeOutOfRange { band, value })?;
      }
      Ok(Self(bands))
   }
}

impl TryFrom<Vec<i8>> for VolumeAdjustments {
   type Error = Error;

   fn try_from(values: Vec<i8>) -> Result<Self> {
      Self::new(&values)
   }
}

impl From<VolumeAdjustments> for Vec<i8> {
   fn from(adjustments: VolumeAdjustments) -> Self {
      adjustments.0.to_vec()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_values_round_trip_through_new() {
      let original = VolumeAdjustments::new(&[-120, -60, 0, 15, 30, 60, 90, 120]).unwrap();
      let rebuilt = VolumeAdjustments::new(original.values()).unwrap();
      assert_eq!(original, rebuilt);
   }

   #[test]
   fn test_range_boundaries_are_inclusive() {
      assert!(VolumeAdjustments::new(&[MIN_VOLUME; BAND_COUNT]).is_ok());
      assert!(VolumeAdjustments::new(&[MAX_VOLUME; BAND_COUNT]).is_ok());
   }

   #[test]
   fn test_one_past_boundary_is_rejected() {
      let mut values = [0i8; BAND_COUNT];
      values[3] = MAX_VOLUME + 1;
      let err = VolumeAdjustments::new(&values).unwrap_err();
      assert!(matches!(err, Error::VolumeOutOfRange { band: 3, value: 121 }));

      values[3] = 0;
      values[7] = MIN_VOLUME - 1;
      let err = VolumeAdjustments::new(&values).unwrap_err();
      assert!(matches!(err, Error::VolumeOutOfRange { band: 7, value: -121 }));
   }

   #[test]
   fn test_wrong_band_count() {
      let err = VolumeAdjustments::new(&[0; 7]).unwrap_err();
      assert!(matches!(err, Error::WrongBandCount { actual: 7 }));

      let err = VolumeAdjustments::new(&[]).unwrap_err();
      assert!(matches!(err, Error::WrongBandCount { actual: 0 }));

      // Count is reported even when values are also out of range
      let err = VolumeAdjustments::new(&[127; 9]).unwrap_err();
      assert!(matches!(err, Error::WrongBandCount { actual: 9 }));
   }

   #[test]
   fn test_wire_bytes() {
      let adjustments = VolumeAdjustments::new(&[-120, -60, 0, 10, 20, 60, 100, 120]).unwrap();
      assert_eq!(
         adjustments.to_bytes(),
         [0x00, 0x3c, 0x78, 0x82, 0x8c, 0xb4, 0xdc, 0xf0]
      );
      assert_eq!(
         VolumeAdjustments::from_bytes(&adjustments.to_bytes()).unwrap(),
         adjustments
      );
   }

   #[test]
   fn test_from_bytes_rejects_out_of_range() {
      let err = VolumeAdjustments::from_bytes(&[0x78, 0x78, 0xf1, 0, 0, 0, 0, 0]).unwrap_err();
      assert!(matches!(err, Error::VolumeOutOfRange { band: 2, value: 121 }));

      let err = VolumeAdjustments::from_bytes(&[0x78; 4]).unwrap_err();
      assert!(matches!(err, Error::WrongBandCount { actual: 4 }));
   }

   #[test]
   fn test_decibels() {
      let adjustments = VolumeAdjustments::new(&[-120, -5, 0, 5, 10, 25, 100, 120]).unwrap();
      let db: Vec<f32> = adjustments.decibels().collect();
      assert_eq!(db, [-12.0, -0.5, 0.0, 0.5, 1.0, 2.5, 10.0, 12.0]);
   }

   #[test]
   fn test_serde_validates() {
      let adjustments: VolumeAdjustments =
         serde_json::from_str("[0, 10, 20, 30, 40, 50, 60, 70]").unwrap();
      assert_eq!(adjustments.values(), &[0, 10, 20, 30, 40, 50, 60, 70]);
      assert_eq!(
         serde_json::to_string(&adjustments).unwrap(),
         "[0,10,20,30,40,50,60,70]"
      );

      assert!(serde_json::from_str::<VolumeAdjustments>("[0, 0, 0]").is_err());
      assert!(serde_json::from_str::<VolumeAdjustments>("[0, 0, 0, 0, 0, 0, 0, 121]").is_err());
   }
}
