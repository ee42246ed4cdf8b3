//! The bus abstraction the transceiver management code programs against.

use crate::I2cResult;
use galaxy_types::TransceiverId;

/// A low-level I2C bus attached to the platform's transceivers.
///
/// Implementations own the routing from a transceiver slot to the
/// electrical bus segment it sits on (multiplexer setup, device
/// addressing). Callers open the bus once, select a transceiver, then
/// issue reads and writes against its management pages.
pub trait I2cBus {
    /// Human-readable bus name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Opens the underlying bus controller.
    fn open(&mut self) -> I2cResult<()>;

    /// Closes the bus controller. Safe to call on a closed bus.
    fn close(&mut self);

    /// Routes subsequent reads and writes to the given transceiver slot.
    fn select_transceiver(&mut self, slot: TransceiverId) -> I2cResult<()>;

    /// Reads `buf.len()` bytes starting at `offset` from device `addr` on
    /// the selected transceiver's segment.
    fn read(&mut self, addr: u8, offset: u8, buf: &mut [u8]) -> I2cResult<()>;

    /// Writes `buf` starting at `offset` to device `addr` on the selected
    /// transceiver's segment.
    fn write(&mut self, addr: u8, offset: u8, buf: &[u8]) -> I2cResult<()>;
}
