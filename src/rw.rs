use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Cmd, Error, Fts, FRAMEBUFFER_DUMMY_BYTES, MAX_COMMAND_PAYLOAD};
use crate::{BYTES_PER_PAIR, MAX_COORD_PAIRS};

const FRAMEBUFFER_WINDOW: usize = MAX_COORD_PAIRS * BYTES_PER_PAIR;

impl<'a, I, E, IRQ, M> Fts<'a, I, IRQ, M>
where
  I: I2c<SevenBitAddress, Error = E>,
  M: RawMutex,
{
  /// Send a command opcode followed by its payload in a single write.
  pub(crate) async fn write_command(&mut self, cmd: Cmd, data: &[u8]) -> Result<(), Error<E>> {
    let len = data.len();
    if len > MAX_COMMAND_PAYLOAD {
      return Err(Error::BufferOverflow);
    }
    let mut buf = [0u8; MAX_COMMAND_PAYLOAD + 1];
    buf[0] = cmd.into();
    buf[1..=len].copy_from_slice(data);
    self.i2c.write(self.config.address, &buf[..=len]).await.map_err(Error::I2c)
  }

  /// Read `buf.len()` bytes from the framebuffer starting at `offset`.
  ///
  /// The address goes out MSB first; the dummy byte the controller clocks out
  /// ahead of the data is dropped.
  pub(crate) async fn read_framebuffer(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Error<E>> {
    let len = buf.len();
    if len > FRAMEBUFFER_WINDOW {
      return Err(Error::BufferOverflow);
    }
    let addr = offset.to_be_bytes();
    let cmd = [Cmd::FrameBufferRead.into(), addr[0], addr[1]];
    let mut raw = [0u8; FRAMEBUFFER_DUMMY_BYTES + FRAMEBUFFER_WINDOW];
    let raw = &mut raw[..FRAMEBUFFER_DUMMY_BYTES + len];
    self.i2c.write_read(self.config.address, &cmd, raw).await.map_err(Error::I2c)?;
    buf.copy_from_slice(&raw[FRAMEBUFFER_DUMMY_BYTES..]);
    Ok(())
  }
}
