use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Feature, Fts, GestureMask, MaskAction, MASK_SIZE};

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  M: RawMutex,
{
  /// Arm or disarm gestures in the shared mask without talking to firmware.
  ///
  /// See [`crate::GestureContext::update_mask`].
  pub async fn update_gesture_mask(&self, delta: &[u8], action: MaskAction) -> Result<(), Error<E>> {
    self.gestures.update_mask(delta, action).await.map_err(Error::from)
  }

  /// Arm the gestures in `delta` and load the whole mask into firmware.
  ///
  /// With `None` the current mask is pushed as is, which is how a stale
  /// firmware configuration gets refreshed.
  pub async fn enable_gesture(&mut self, delta: Option<&[u8]>) -> Result<(), Error<E>> {
    debug!("enabling gestures");
    check_len(delta)?;
    let gestures = self.gestures;
    let mut state = gestures.lock_mask().await;
    if let Some(delta) = delta {
      state.mask.apply(delta, MaskAction::Enable)?;
      state.refresh = true;
    }
    self.push_mask(&state.mask).await?;
    state.refresh = false;
    debug!("gestures enabled: {:?}", state.mask);
    Ok(())
  }

  /// Disarm the gestures in `delta` and load the whole mask into firmware.
  ///
  /// With `None` firmware receives an all-zero mask, which disables every
  /// gesture on the controller. The mask kept in the context is left as it
  /// was so it can be restored later with [`Fts::enable_gesture`].
  pub async fn disable_gesture(&mut self, delta: Option<&[u8]>) -> Result<(), Error<E>> {
    debug!("disabling gestures");
    check_len(delta)?;
    let gestures = self.gestures;
    let mut state = gestures.lock_mask().await;
    match delta {
      Some(delta) => {
        state.mask.apply(delta, MaskAction::Disable)?;
        state.refresh = true;
        self.push_mask(&state.mask).await?;
        state.refresh = false;
      }
      None => self.push_mask(&GestureMask::new()).await?,
    }
    debug!("gestures disabled");
    Ok(())
  }

  /// Send `mask` with the gesture feature selector. Always the full
  /// [`MASK_SIZE`] bytes. Callers hold the mask lock.
  pub(crate) async fn push_mask(&mut self, mask: &GestureMask) -> Result<(), Error<E>> {
    trace!("pushing gesture mask {:?}", mask);
    self.set_feature(Feature::Gesture, mask.as_bytes()).await
  }
}

fn check_len<E>(delta: Option<&[u8]>) -> Result<(), Error<E>> {
  match delta {
    Some(d) if d.len() > MASK_SIZE => {
      error!("gesture mask size not valid: {} > {}", d.len(), MASK_SIZE);
      Err(Error::InvalidArgument)
    }
    _ => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use embassy_futures::block_on;

  use super::*;
  use crate::test_support::{driver, FakeBus, FakeError};
  use crate::GestureContext;

  #[test]
  fn enable_pushes_full_mask() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    block_on(ctx.update_mask(&[0, 0, 0x20], MaskAction::Enable)).unwrap();

    block_on(fts.enable_gesture(Some(&[0x06]))).unwrap();

    assert_eq!(fts.i2c.writes, [vec![0xA2, 0x03, 0x06, 0x00, 0x20, 0x00]]);
    assert_eq!(block_on(ctx.mask()).as_bytes(), &[0x06, 0, 0x20, 0]);
    assert!(!block_on(ctx.refresh_pending()));
  }

  #[test]
  fn enable_without_delta_refreshes_current_mask() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    block_on(ctx.update_mask(&[0x11, 0x22, 0x33, 0x44], MaskAction::Enable)).unwrap();

    block_on(fts.enable_gesture(None)).unwrap();

    assert_eq!(fts.i2c.writes, [vec![0xA2, 0x03, 0x11, 0x22, 0x33, 0x44]]);
  }

  #[test]
  fn disable_pushes_remaining_gestures() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    block_on(ctx.update_mask(&[0x0F, 0x01], MaskAction::Enable)).unwrap();

    block_on(fts.disable_gesture(Some(&[0x03]))).unwrap();

    assert_eq!(fts.i2c.writes, [vec![0xA2, 0x03, 0x0C, 0x01, 0x00, 0x00]]);
    assert_eq!(block_on(ctx.mask()).as_bytes(), &[0x0C, 0x01, 0, 0]);
  }

  #[test]
  fn disable_all_sends_zero_vector_and_keeps_mask() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    block_on(ctx.update_mask(&[0xAA, 0xBB], MaskAction::Enable)).unwrap();

    block_on(fts.disable_gesture(None)).unwrap();

    assert_eq!(fts.i2c.writes, [vec![0xA2, 0x03, 0x00, 0x00, 0x00, 0x00]]);
    assert_eq!(block_on(ctx.mask()).as_bytes(), &[0xAA, 0xBB, 0, 0]);
    assert!(block_on(ctx.refresh_pending()));
  }

  #[test]
  fn oversized_delta_is_rejected_before_bus() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);

    let result = block_on(fts.enable_gesture(Some(&[0xFF; MASK_SIZE + 1])));

    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(fts.i2c.writes.is_empty());
    assert!(block_on(ctx.mask()).is_empty());
  }

  #[test]
  fn transport_failure_keeps_refresh_pending_and_releases_lock() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    fts.i2c = FakeBus::failing_command(0xA2);
    block_on(ctx.update_mask(&[0x01], MaskAction::Enable)).unwrap();

    let result = block_on(fts.enable_gesture(Some(&[0x02])));

    assert_eq!(result, Err(Error::I2c(FakeError)));
    // Lock must be free again for these to complete.
    assert!(block_on(ctx.refresh_pending()));
    assert_eq!(block_on(ctx.mask()).as_bytes(), &[0x03, 0, 0, 0]);
  }

  #[test]
  fn failed_push_of_new_bits_marks_firmware_stale() {
    let ctx = GestureContext::new();
    let mut fts = driver(&ctx);
    fts.i2c = FakeBus::failing_command(0xA2);

    let result = block_on(fts.disable_gesture(Some(&[0x01])));

    assert_eq!(result, Err(Error::I2c(FakeError)));
    assert!(block_on(ctx.refresh_pending()));
  }

  #[test]
  fn host_update_maps_mask_errors() {
    let ctx = GestureContext::new();
    let fts = driver(&ctx);

    let result = block_on(fts.update_gesture_mask(&[0; MASK_SIZE + 1], MaskAction::Disable));

    assert_eq!(result, Err(Error::InvalidArgument));
  }
}
