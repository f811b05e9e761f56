use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Cmd, Error, Fts, MAX_COMMAND_PAYLOAD};

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  M: RawMutex,
{
  /// Push a feature configuration to firmware.
  ///
  /// The payload format depends on the feature; for [`Feature::Gesture`] it is
  /// the full gesture mask.
  pub async fn set_feature(&mut self, feature: Feature, payload: &[u8]) -> Result<(), Error<E>> {
    let len = payload.len();
    if len >= MAX_COMMAND_PAYLOAD {
      return Err(Error::BufferOverflow);
    }
    let mut buf = [0u8; MAX_COMMAND_PAYLOAD];
    buf[0] = feature.into();
    buf[1..=len].copy_from_slice(payload);
    let res = self.write_command(Cmd::Feature, &buf[..=len]).await;
    if res.is_err() {
      error!("set feature {:?} failed", feature);
    }
    res
  }
}

/// Firmware feature selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feature {
  Glove = 0x00,
  Cover = 0x01,
  Charger = 0x02,
  Gesture = 0x03,
  Grip = 0x04,
  Stylus = 0x07,
}

impl From<Feature> for u8 {
  fn from(v: Feature) -> Self {
    v as u8
  }
}
