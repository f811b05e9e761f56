use crate::MASK_SIZE;

/// Bit array of armed gesture IDs.
///
/// Gesture `id` lives in bit `id % 8` of byte `id / 8`, so byte 0 carries the
/// lowest IDs. What each ID means is up to the controller firmware.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureMask([u8; MASK_SIZE]);

impl GestureMask {
  /// Highest gesture ID that fits in the mask.
  pub const MAX_ID: u8 = (MASK_SIZE * 8 - 1) as u8;

  pub const fn new() -> Self {
    Self([0; MASK_SIZE])
  }

  pub const fn from_bytes(bytes: [u8; MASK_SIZE]) -> Self {
    Self(bytes)
  }

  /// Arm gesture `id`. Panics if `id` is above [`GestureMask::MAX_ID`].
  pub const fn with_gesture(mut self, id: u8) -> Self {
    assert!(id <= Self::MAX_ID, "gesture id out of range");
    self.0[(id / 8) as usize] |= 1 << (id % 8);
    self
  }

  pub const fn contains(&self, id: u8) -> bool {
    id <= Self::MAX_ID && self.0[(id / 8) as usize] & (1 << (id % 8)) != 0
  }

  pub const fn as_bytes(&self) -> &[u8; MASK_SIZE] {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.first_active().is_none()
  }

  /// Index and value of the first non-zero byte, scanning from byte 0.
  pub fn first_active(&self) -> Option<(usize, u8)> {
    self.0.iter().copied().enumerate().find(|&(_, b)| b != 0)
  }

  /// Apply `delta` to the leading `delta.len()` bytes of the mask.
  ///
  /// Enabling sets every bit of `delta`; disabling clears the bits that are
  /// set in both the mask and `delta`. Bytes past `delta.len()` are untouched.
  pub fn apply(&mut self, delta: &[u8], action: MaskAction) -> Result<(), MaskError> {
    if delta.len() > MASK_SIZE {
      return Err(MaskError::InvalidArgument);
    }
    for (byte, d) in self.0.iter_mut().zip(delta) {
      *byte = match action {
        MaskAction::Enable => *byte | d,
        MaskAction::Disable => (*byte ^ d) & *byte,
      };
    }
    Ok(())
  }
}

impl core::fmt::Debug for GestureMask {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "GestureMask({:02x?})", self.0)
  }
}

impl From<[u8; MASK_SIZE]> for GestureMask {
  fn from(bytes: [u8; MASK_SIZE]) -> Self {
    Self(bytes)
  }
}

/// Whether a mask update arms or disarms the gestures it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaskAction {
  Disable = 0,
  Enable = 1,
}

impl From<MaskAction> for u8 {
  fn from(v: MaskAction) -> Self {
    v as u8
  }
}

impl TryFrom<u8> for MaskAction {
  type Error = MaskError;

  fn try_from(v: u8) -> Result<Self, Self::Error> {
    match v {
      0 => Ok(Self::Disable),
      1 => Ok(Self::Enable),
      other => Err(MaskError::InvalidMode(other)),
    }
  }
}

/// Errors raised by mask updates that never touch the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaskError {
  /// The delta is longer than [`MASK_SIZE`].
  InvalidArgument,
  /// The enable/disable selector is not recognized.
  InvalidMode(u8),
}

/// Mask together with the flag telling whether firmware is out of date.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MaskState {
  pub(crate) mask: GestureMask,
  pub(crate) refresh: bool,
}

impl MaskState {
  pub(crate) const fn new() -> Self {
    Self { mask: GestureMask::new(), refresh: false }
  }
}
