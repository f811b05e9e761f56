use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Fts, BYTES_PER_PAIR, MAX_COORD_PAIRS};

mod coords;
mod report;

pub use coords::*;
pub use report::*;

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  M: RawMutex,
{
  /// Decode a gesture event and fetch the path drawn by the user.
  ///
  /// Call this from the event handling path with the raw event bytes read
  /// from the controller FIFO. On success the coordinates are published to the
  /// shared [`crate::GestureContext`] and the event header is returned, with
  /// `pairs` clamped to [`MAX_COORD_PAIRS`]. On failure the published
  /// coordinates are marked unavailable.
  pub async fn decode_event(&mut self, event: &[u8]) -> Result<GestureReport, Error<E>> {
    let gestures = self.gestures;

    let Ok(mut report) = GestureReport::try_from(event) else {
      error!("event passed to gesture decoder is invalid");
      gestures.invalidate_coordinates();
      return Err(Error::InvalidEvent);
    };

    if usize::from(report.pairs) > MAX_COORD_PAIRS {
      warn!("firmware reported {} gesture points, keeping {}", report.pairs, MAX_COORD_PAIRS);
      report.pairs = MAX_COORD_PAIRS as u8;
    }
    let pairs = usize::from(report.pairs);
    debug!("gesture {:#x}: offset {:#x}, {} pairs", report.id, report.offset, pairs);

    let mut payload = [0u8; MAX_COORD_PAIRS * BYTES_PER_PAIR];
    let payload = &mut payload[..pairs * BYTES_PER_PAIR];
    if pairs > 0 {
      if let Err(e) = self.read_framebuffer(report.offset, payload).await {
        error!("cannot read the gesture coordinates");
        gestures.invalidate_coordinates();
        return Err(match e {
          Error::I2c(e) => Error::Decode(e),
          other => other,
        });
      }
    }

    gestures.publish(Coordinates::unpack(payload, pairs));
    trace!("gesture coordinates decoded");
    Ok(report)
  }

  /// `true` if at least one gesture ID is armed.
  pub async fn is_any_gesture_active(&self) -> bool {
    self.gestures.is_any_gesture_active().await
  }

  /// Copy of the last decoded gesture path.
  pub fn coordinates(&self) -> Coordinates {
    self.gestures.coordinates()
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  pub fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
