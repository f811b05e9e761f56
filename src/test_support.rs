//! Fake collaborators for unit tests.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal::digital;
use embedded_hal_async::i2c::{self, Operation, SevenBitAddress};

use crate::{Cmd, Config, Fts, GestureContext, InterruptLine, FRAMEBUFFER_DUMMY_BYTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeError;

impl i2c::Error for FakeError {
  fn kind(&self) -> i2c::ErrorKind {
    i2c::ErrorKind::Other
  }
}

impl digital::Error for FakeError {
  fn kind(&self) -> digital::ErrorKind {
    digital::ErrorKind::Other
  }
}

/// I²C bus that records command writes and serves framebuffer reads.
#[derive(Debug, Default)]
pub(crate) struct FakeBus {
  /// Successful command writes, opcode included.
  pub writes: Vec<Vec<u8>>,
  /// Framebuffer addresses read from.
  pub reads: Vec<u16>,
  /// Payload lengths of framebuffer reads, dummy bytes excluded.
  pub read_lens: Vec<usize>,
  pub framebuffer_base: u16,
  pub framebuffer: Vec<u8>,
  pub fail_command: Option<u8>,
  pub fail_reads: bool,
  pending_read: Option<u16>,
}

impl FakeBus {
  pub fn with_framebuffer(base: u16, data: &[u8]) -> Self {
    Self { framebuffer_base: base, framebuffer: data.to_vec(), ..Self::default() }
  }

  pub fn failing_command(opcode: u8) -> Self {
    Self { fail_command: Some(opcode), ..Self::default() }
  }

  fn serve(&mut self, addr: u16, buf: &mut [u8]) {
    let (dummy, data) = buf.split_at_mut(FRAMEBUFFER_DUMMY_BYTES);
    dummy.fill(0xFF);
    let start = usize::from(addr - self.framebuffer_base);
    data.copy_from_slice(&self.framebuffer[start..start + data.len()]);
    self.reads.push(addr);
    self.read_lens.push(data.len());
  }
}

impl i2c::ErrorType for FakeBus {
  type Error = FakeError;
}

impl i2c::I2c<SevenBitAddress> for FakeBus {
  async fn transaction(&mut self, _address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    for op in operations {
      match op {
        Operation::Write(bytes) if bytes.first() == Some(&u8::from(Cmd::FrameBufferRead)) => {
          self.pending_read = Some(u16::from_be_bytes([bytes[1], bytes[2]]));
        }
        Operation::Write(bytes) => {
          if self.fail_command == bytes.first().copied() {
            return Err(FakeError);
          }
          self.writes.push(bytes.to_vec());
        }
        Operation::Read(buf) => {
          let addr = self.pending_read.take().ok_or(FakeError)?;
          if self.fail_reads {
            return Err(FakeError);
          }
          self.serve(addr, buf);
        }
      }
    }
    Ok(())
  }
}

/// Interrupt line gate counting calls.
#[derive(Debug, Default)]
pub(crate) struct FakeIrq {
  pub disabled: usize,
  pub enabled: usize,
  pub fail_disable: bool,
  pub fail_enable: bool,
}

impl digital::ErrorType for FakeIrq {
  type Error = FakeError;
}

impl InterruptLine for FakeIrq {
  fn disable(&mut self) -> Result<(), Self::Error> {
    self.disabled += 1;
    if self.fail_disable {
      return Err(FakeError);
    }
    Ok(())
  }

  fn enable(&mut self) -> Result<(), Self::Error> {
    self.enabled += 1;
    if self.fail_enable {
      return Err(FakeError);
    }
    Ok(())
  }
}

pub(crate) fn driver(ctx: &GestureContext<NoopRawMutex>) -> Fts<'_, FakeBus, FakeIrq, NoopRawMutex> {
  Fts::new(FakeBus::default(), FakeIrq::default(), ctx, Config::default())
}
