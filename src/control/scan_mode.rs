use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Cmd, Error, Fts};

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  M: RawMutex,
{
  /// Switch the controller scan mode.
  ///
  /// `setting` is mode specific; for [`ScanMode::LowPower`] it is usually `0`.
  pub async fn set_scan_mode(&mut self, mode: ScanMode, setting: u8) -> Result<(), Error<E>> {
    debug!("scan mode -> {:?} ({:#x})", mode, setting);
    self.write_command(Cmd::ScanMode, &[mode.into(), setting]).await
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanMode {
  Hibernate = 0x00,
  Active = 0x01,
  LowPower = 0x02,
  Locked = 0x03,
}

impl From<ScanMode> for u8 {
  fn from(v: ScanMode) -> Self {
    v as u8
  }
}

impl TryFrom<u8> for ScanMode {
  type Error = ();

  fn try_from(bits: u8) -> Result<Self, Self::Error> {
    match bits {
      0x00 => Ok(Self::Hibernate),
      0x01 => Ok(Self::Active),
      0x02 => Ok(Self::LowPower),
      0x03 => Ok(Self::Locked),
      _ => Err(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use embassy_futures::block_on;

  use super::*;
  use crate::test_support::driver;
  use crate::GestureContext;

  #[test]
  fn scan_mode_round_trips_through_u8() {
    for mode in [ScanMode::Hibernate, ScanMode::Active, ScanMode::LowPower, ScanMode::Locked] {
      assert_eq!(ScanMode::try_from(u8::from(mode)), Ok(mode));
    }
    assert_eq!(ScanMode::try_from(0x10), Err(()));
  }

  #[test]
  fn low_power_command_layout() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);

    block_on(fts.set_scan_mode(ScanMode::LowPower, 0x00)).unwrap();

    assert_eq!(fts.i2c.writes, [vec![0xA0, 0x02, 0x00]]);
  }
}
