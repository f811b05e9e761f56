use crate::{EVT_ID_USER_REPORT, EVT_TYPE_USER_GESTURE};

/// Header of a gesture event reported by firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureReport {
  /// Raw gesture ID as reported by firmware.
  pub id: u8,
  /// Framebuffer address of the coordinate payload.
  pub offset: u16,
  /// Number of coordinate pairs in the payload.
  pub pairs: u8,
}

impl TryFrom<&[u8]> for GestureReport {
  type Error = ();

  fn try_from(event: &[u8]) -> Result<Self, Self::Error> {
    match event {
      [EVT_ID_USER_REPORT, EVT_TYPE_USER_GESTURE, id, lo, hi, pairs, ..] => {
        Ok(Self { id: *id, offset: u16::from_le_bytes([*lo, *hi]), pairs: *pairs })
      }
      _ => Err(()),
    }
  }
}
