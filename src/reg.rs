/******************************************************************************
 * Refer to the FTS (FingerTip) host interface documentation from             *
 * STMicroelectronics for more information.                                   *
 * ========================================================================== *
 *                  FTS - Commands, Events & Gesture Memory Map               *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x49;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cmd {
  ScanMode = 0xA0,
  Feature = 0xA2,
  FrameBufferRead = 0xA6,
}

impl From<Cmd> for u8 {
  #[inline]
  fn from(c: Cmd) -> Self {
    c as u8
  }
}

/// Largest payload accepted after a command opcode.
pub(crate) const MAX_COMMAND_PAYLOAD: usize = 31;

/// Bytes the controller clocks out before framebuffer data.
pub(crate) const FRAMEBUFFER_DUMMY_BYTES: usize = 1;

// Event header (byte 0 id, byte 1 type, byte 2 gesture id, 3..5 offset, 5 pairs)
pub(crate) const EVT_ID_USER_REPORT: u8 = 0x23;
pub(crate) const EVT_TYPE_USER_GESTURE: u8 = 0x02;

/// Size in bytes of the gesture mask. Each bit arms one gesture ID.
pub const MASK_SIZE: usize = 4;

/// Maximum number of (x, y) pairs kept for a detected gesture.
pub const MAX_COORD_PAIRS: usize = 100;

/// Bytes in the framebuffer per coordinate pair (12-bit x and y, two bytes each).
pub(crate) const BYTES_PER_PAIR: usize = 4;
