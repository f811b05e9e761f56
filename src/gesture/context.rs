use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

use crate::{Coordinates, GestureMask, MaskAction, MaskError, MaskState};

/// Gesture state shared between the driver and host-facing code.
///
/// Holds the armed-gesture mask, the flag telling whether firmware still has
/// to be told about mask changes, and the path of the last decoded gesture.
/// Use `CriticalSectionRawMutex` when the context is a `static` shared across
/// tasks or interrupt priorities, `NoopRawMutex` when everything runs on one
/// executor.
pub struct GestureContext<M: RawMutex> {
  mask: Mutex<M, MaskState>,
  coordinates: BlockingMutex<M, RefCell<Coordinates>>,
}

impl<M: RawMutex> GestureContext<M> {
  pub const fn new() -> Self {
    Self {
      mask: Mutex::new(MaskState::new()),
      coordinates: BlockingMutex::new(RefCell::new(Coordinates::unavailable())),
    }
  }

  /// Arm or disarm the gestures set in `delta` without talking to firmware.
  ///
  /// `delta` covers the leading bytes of the mask; it may be shorter than
  /// [`crate::MASK_SIZE`] but not longer. The change is pushed on the next
  /// [`crate::Fts::enter_gesture_mode`].
  pub async fn update_mask(&self, delta: &[u8], action: MaskAction) -> Result<(), MaskError> {
    let mut state = self.mask.lock().await;
    debug!("updating gesture mask ({:?})", action);
    if let Err(e) = state.mask.apply(delta, action) {
      error!("gesture mask update rejected: {} bytes > {}", delta.len(), crate::MASK_SIZE);
      return Err(e);
    }
    state.refresh = true;
    trace!("gesture mask now {:?}", state.mask);
    Ok(())
  }

  /// Snapshot of the current mask.
  pub async fn mask(&self) -> GestureMask {
    self.mask.lock().await.mask
  }

  /// `true` when the mask changed since it was last pushed to firmware.
  pub async fn refresh_pending(&self) -> bool {
    self.mask.lock().await.refresh
  }

  /// `true` if at least one gesture ID is armed.
  pub async fn is_any_gesture_active(&self) -> bool {
    let state = self.mask.lock().await;
    match state.mask.first_active() {
      Some((index, byte)) => {
        debug!("active gestures found: mask[{}] = {:#x}", index, byte);
        true
      }
      None => {
        debug!("all gestures disabled");
        false
      }
    }
  }

  /// Copy of the last decoded gesture path.
  pub fn coordinates(&self) -> Coordinates {
    self.with_coordinates(|c| *c)
  }

  /// Run `f` against the last decoded gesture path without copying it.
  ///
  /// `f` runs inside the coordinates lock; keep it short.
  pub fn with_coordinates<R>(&self, f: impl FnOnce(&Coordinates) -> R) -> R {
    self.coordinates.lock(|c| f(&*c.borrow()))
  }

  pub(crate) async fn lock_mask(&self) -> MutexGuard<'_, M, MaskState> {
    self.mask.lock().await
  }

  pub(crate) fn publish(&self, coordinates: Coordinates) {
    self.coordinates.lock(|c| *c.borrow_mut() = coordinates);
  }

  pub(crate) fn invalidate_coordinates(&self) {
    self.coordinates.lock(|c| c.borrow_mut().invalidate());
  }
}

impl<M: RawMutex> Default for GestureContext<M> {
  fn default() -> Self {
    Self::new()
  }
}
