use crate::{Point, BYTES_PER_PAIR, MAX_COORD_PAIRS};

/// Path drawn by the user for the last detected gesture.
///
/// `count` is `None` when no gesture has been decoded yet or the last decode
/// failed; the arrays are then meaningless and [`Coordinates::x`] /
/// [`Coordinates::y`] return empty slices.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
  x: [u16; MAX_COORD_PAIRS],
  y: [u16; MAX_COORD_PAIRS],
  count: Option<u8>,
}

impl Coordinates {
  pub const fn unavailable() -> Self {
    Self { x: [0; MAX_COORD_PAIRS], y: [0; MAX_COORD_PAIRS], count: None }
  }

  /// Unpack `pairs` coordinate pairs from a framebuffer payload.
  ///
  /// The payload holds every X first, then every Y. Each value is 12 bits
  /// stored as a low byte followed by a byte whose low nibble is bits 8..12.
  pub(crate) fn unpack(payload: &[u8], pairs: usize) -> Self {
    let pairs = pairs.min(MAX_COORD_PAIRS).min(payload.len() / BYTES_PER_PAIR);
    let (xs, ys) = payload[..pairs * BYTES_PER_PAIR].split_at(pairs * 2);
    let mut out = Self::unavailable();
    for (i, (x, y)) in xs.chunks_exact(2).zip(ys.chunks_exact(2)).enumerate() {
      out.x[i] = unpack12(x[0], x[1]);
      out.y[i] = unpack12(y[0], y[1]);
    }
    out.count = Some(pairs as u8);
    out
  }

  pub(crate) fn invalidate(&mut self) {
    self.count = None;
  }

  /// Number of decoded pairs, `None` when unavailable.
  pub fn count(&self) -> Option<usize> {
    self.count.map(usize::from)
  }

  pub fn is_available(&self) -> bool {
    self.count.is_some()
  }

  pub fn x(&self) -> &[u16] {
    &self.x[..self.len()]
  }

  pub fn y(&self) -> &[u16] {
    &self.y[..self.len()]
  }

  pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
    self.x().iter().zip(self.y()).map(|(&x, &y)| Point::new(x, y))
  }

  fn len(&self) -> usize {
    self.count().unwrap_or(0)
  }
}

impl Default for Coordinates {
  fn default() -> Self {
    Self::unavailable()
  }
}

impl core::fmt::Debug for Coordinates {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.count {
      Some(_) => f.debug_list().entries(self.points()).finish(),
      None => f.write_str("Unavailable"),
    }
  }
}

#[inline]
fn unpack12(lo: u8, hi: u8) -> u16 {
  u16::from(hi & 0x0F) << 8 | u16::from(lo)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn twelve_bit_values_ignore_high_nibble() {
    assert_eq!(unpack12(0x34, 0x01), 0x134);
    assert_eq!(unpack12(0xFF, 0xFF), 0xFFF);
    assert_eq!(unpack12(0x00, 0xF0), 0x000);
  }

  #[test]
  fn x_block_precedes_y_block() {
    // x = [0x134, 0x0AB], y = [0x567, 0xFFF]
    let payload = [0x34, 0x01, 0xAB, 0x00, 0x67, 0x05, 0xFF, 0x0F];

    let coords = Coordinates::unpack(&payload, 2);

    assert_eq!(coords.count(), Some(2));
    assert_eq!(coords.x(), &[0x134, 0x0AB]);
    assert_eq!(coords.y(), &[0x567, 0xFFF]);
    assert_eq!(coords.points().nth(1), Some(Point::new(0x0AB, 0xFFF)));
  }

  #[test]
  fn zero_pairs_is_available_but_empty() {
    let coords = Coordinates::unpack(&[], 0);

    assert!(coords.is_available());
    assert!(coords.x().is_empty());
  }

  #[test]
  fn invalidated_buffer_hides_old_points() {
    let mut coords = Coordinates::unpack(&[0x01, 0x00, 0x02, 0x00], 1);

    coords.invalidate();

    assert_eq!(coords.count(), None);
    assert!(coords.points().next().is_none());
  }
}
