use embedded_hal::digital::ErrorType;

/// Gate for the host interrupt line wired to the controller.
///
/// Implementations typically mask the GPIO interrupt (or the IRQ in the
/// interrupt controller) so that no event handling runs while the driver
/// reconfigures the controller.
pub trait InterruptLine: ErrorType {
  /// Stop delivering controller interrupts to the host.
  fn disable(&mut self) -> Result<(), Self::Error>;

  /// Resume delivering controller interrupts to the host.
  fn enable(&mut self) -> Result<(), Self::Error>;
}

impl<T: InterruptLine + ?Sized> InterruptLine for &mut T {
  #[inline]
  fn disable(&mut self) -> Result<(), Self::Error> {
    T::disable(self)
  }

  #[inline]
  fn enable(&mut self) -> Result<(), Self::Error> {
    T::enable(self)
  }
}
