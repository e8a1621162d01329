use serde::{Deserialize, Serialize};

use crate::equalizer::{BAND_COUNT, VolumeAdjustments};

/// Separate band sets for the left and right earbuds.
///
/// Both channels are moved in, so the caller's bindings cannot be used
/// afterwards:
///
/// ```compile_fail
/// use soundcore_codec::equalizer::{StereoVolumeAdjustments, VolumeAdjustments};
///
/// let left = VolumeAdjustments::new(&[0; 8]).unwrap();
/// let right = VolumeAdjustments::new(&[10; 8]).unwrap();
/// let stereo = StereoVolumeAdjustments::new(left, right);
/// println!("{:?}", left.values());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StereoVolumeAdjustments {
   left: VolumeAdjustments,
   right: VolumeAdjustments,
}

impl StereoVolumeAdjustments {
   pub const fn new(left: VolumeAdjustments, right: VolumeAdjustments) -> Self {
      Self { left, right }
   }

   pub fn left(&self) -> VolumeAdjustments {
      self.left.clone()
   }

   pub fn right(&self) -> VolumeAdjustments {
      self.right.clone()
   }

   pub fn into_parts(self) -> (VolumeAdjustments, VolumeAdjustments) {
      (self.left, self.right)
   }

   /// Left channel bytes followed by the right channel.
   pub fn to_bytes(&self) -> [u8; BAND_COUNT * 2] {
      let mut bytes = [0u8; BAND_COUNT * 2];
      bytes[..BAND_COUNT].copy_from_slice(&self.left.to_bytes());
      bytes[BAND_COUNT..].copy_from_slice(&self.right.to_bytes());
      bytes
   }
}
