#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` gesture-mode driver core for STMicroelectronics FTS
//! (FingerTip) capacitive touch controllers.
//!
//! In gesture mode the controller drops to a low-power scan and only wakes the
//! host when one of the armed gesture shapes is drawn. This crate covers that
//! part of the driver:
//!
//! - Arming and disarming gesture IDs in a shared [`GestureMask`]
//! - Pushing the mask to firmware through the feature command
//! - Entering the low-power gesture scan with the host interrupt line masked
//!   around the transaction
//! - Decoding gesture events and pulling the drawn path out of the framebuffer
//!
//! Shared state lives in a [`GestureContext`] that the driver borrows, so the
//! interrupt path and host-facing code can use the same instance.
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use embedded_hal_async::i2c::{I2c, SevenBitAddress};
//! use fts_gesture::{Config, Fts, GestureContext, GestureMask, InterruptLine};
//!
//! static GESTURES: GestureContext<CriticalSectionRawMutex> = GestureContext::new();
//!
//! async fn example<I2C, IRQ, E>(i2c: I2C, irq: IRQ) -> Result<(), fts_gesture::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   IRQ: InterruptLine,
//! {
//!   let mut fts = Fts::new(i2c, irq, &GESTURES, Config::default());
//!   let mask = GestureMask::new().with_gesture(0x02).with_gesture(0x05);
//!   fts.enable_gesture(Some(mask.as_bytes())).await?;
//!   fts.enter_gesture_mode(false).await.map_err(|e| e.error)?;
//!   Ok(())
//! }
//! ```

#[macro_use]
mod fmt;

mod config;
mod control;
mod event;
mod gesture;
mod reg;
mod rw;
#[cfg(test)]
mod test_support;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::ErrorKind;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use control::*;
pub use event::*;
pub use gesture::*;
use reg::*;
pub use reg::{MASK_SIZE, MAX_COORD_PAIRS};

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// A gesture mask update was longer than [`MASK_SIZE`].
  InvalidArgument,
  /// The enable/disable selector was neither of the recognized values.
  InvalidMode(u8),
  /// The host interrupt line could not be disabled.
  InterruptDisable(ErrorKind),
  /// The host interrupt line could not be re-enabled.
  InterruptEnable(ErrorKind),
  /// The event passed to the decoder is not a user gesture report.
  InvalidEvent,
  /// Reading the gesture coordinates from the framebuffer failed.
  Decode(E),
  /// An operation attempted to write a buffer larger than the protocol allows.
  BufferOverflow,
}

impl<E> From<MaskError> for Error<E> {
  fn from(err: MaskError) -> Self {
    match err {
      MaskError::InvalidArgument => Error::InvalidArgument,
      MaskError::InvalidMode(v) => Error::InvalidMode(v),
    }
  }
}

/// Gesture-mode driver for an FTS touch controller.
///
/// The driver owns the I²C peripheral and the host interrupt line gate, and
/// borrows the [`GestureContext`] holding the armed-gesture mask and the last
/// decoded gesture path. Several drivers (or a driver and host-side readers)
/// may share one context.
pub struct Fts<'a, I, IRQ, M: RawMutex> {
  i2c: I,
  irq: IRQ,
  gestures: &'a GestureContext<M>,
  config: Config,
}

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  IRQ: InterruptLine,
  M: RawMutex,
{
  /// Create a new driver instance.
  ///
  /// Nothing is sent to the controller until one of the gesture operations is
  /// called.
  pub fn new(i2c: I, irq: IRQ, gestures: &'a GestureContext<M>, config: Config) -> Self {
    Self { i2c, irq, gestures, config }
  }

  /// Shared gesture state used by this driver.
  pub fn gestures(&self) -> &'a GestureContext<M> {
    self.gestures
  }

  /// Give back the bus and the interrupt line.
  pub fn release(self) -> (I, IRQ) {
    (self.i2c, self.irq)
  }
}
