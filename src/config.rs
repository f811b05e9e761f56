use crate::{ScanMode, I2C_ADDR};

/// Driver configuration.
///
/// # Example
/// ```no_run
/// use fts_gesture::{Config, ScanMode};
///
/// let config = Config::default()
///   .with_address(0x48)
///   .with_gesture_scan(ScanMode::LowPower, 0x01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// 7-bit I²C address of the controller.
  pub address: u8,
  /// Scan mode entered by [`crate::Fts::enter_gesture_mode`].
  pub gesture_scan: ScanMode,
  /// Setting byte sent along with the gesture scan mode.
  pub gesture_scan_setting: u8,
}

impl Config {
  pub const fn new(address: u8, gesture_scan: ScanMode, gesture_scan_setting: u8) -> Self {
    Self { address, gesture_scan, gesture_scan_setting }
  }

  pub const fn with_address(mut self, address: u8) -> Self {
    self.address = address;
    self
  }

  pub const fn with_gesture_scan(mut self, mode: ScanMode, setting: u8) -> Self {
    self.gesture_scan = mode;
    self.gesture_scan_setting = setting;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(I2C_ADDR, ScanMode::LowPower, 0)
  }
}
