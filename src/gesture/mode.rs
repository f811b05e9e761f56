use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::{Error as _, ErrorKind};
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Fts, InterruptLine};

/// Steps taken while entering gesture mode, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeStep {
  DisableInterrupt,
  PushMask,
  ScanMode,
  EnableInterrupt,
}

/// Failure while entering gesture mode.
///
/// `step` and `error` name the first step that failed. When the interrupt line
/// could not be restored afterwards either, `restore` carries that failure as
/// well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeError<E> {
  pub step: ModeStep,
  pub error: Error<E>,
  pub restore: Option<ErrorKind>,
}

impl<E> ModeError<E> {
  fn new(step: ModeStep, error: Error<E>) -> Self {
    Self { step, error, restore: None }
  }

  /// `true` if both a step and the interrupt restore failed.
  pub fn is_compound(&self) -> bool {
    self.restore.is_some()
  }
}

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  IRQ: InterruptLine,
  M: RawMutex,
{
  /// Put the controller into gesture mode.
  ///
  /// The host interrupt line is masked for the duration. The mask is pushed to
  /// firmware first when `force_refresh` is set or when it changed since the
  /// last push. Once the line was masked it is always unmasked again, even if
  /// an intermediate step failed.
  pub async fn enter_gesture_mode(&mut self, force_refresh: bool) -> Result<(), ModeError<E>> {
    let gestures = self.gestures;
    let mut failure: Option<ModeError<E>> = None;
    let mut step = ModeStep::DisableInterrupt;

    loop {
      trace!("gesture mode: {:?}", step);

      match step {
        ModeStep::DisableInterrupt => {
          if let Err(e) = self.irq.disable() {
            error!("gesture mode: cannot disable interrupt");
            return Err(ModeError::new(step, Error::InterruptDisable(e.kind())));
          }
          step = ModeStep::PushMask;
        }

        ModeStep::PushMask => {
          let mut state = gestures.lock_mask().await;
          if force_refresh || state.refresh {
            match self.push_mask(&state.mask).await {
              Ok(()) => {
                state.refresh = false;
                step = ModeStep::ScanMode;
              }
              Err(e) => {
                error!("gesture mode: mask push failed");
                failure = Some(ModeError::new(step, e));
                step = ModeStep::EnableInterrupt;
              }
            }
          } else {
            step = ModeStep::ScanMode;
          }
        }

        ModeStep::ScanMode => {
          let (mode, setting) = (self.config.gesture_scan, self.config.gesture_scan_setting);
          if let Err(e) = self.set_scan_mode(mode, setting).await {
            error!("gesture mode: scan mode command failed");
            failure = Some(ModeError::new(step, e));
          }
          step = ModeStep::EnableInterrupt;
        }

        ModeStep::EnableInterrupt => {
          let restored = self.irq.enable().map_err(|e| e.kind());
          if restored.is_err() {
            error!("gesture mode: cannot re-enable interrupt");
          }
          return match (failure, restored) {
            (None, Ok(())) => {
              debug!("gesture mode entered");
              Ok(())
            }
            (Some(failure), Ok(())) => Err(failure),
            (None, Err(kind)) => Err(ModeError::new(step, Error::InterruptEnable(kind))),
            (Some(failure), Err(kind)) => Err(ModeError { restore: Some(kind), ..failure }),
          };
        }
      }
    }
  }
}
