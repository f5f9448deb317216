/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

pub mod i2c;

#[cfg(test)]
pub mod mock_i2c_port;

/// A method of communicating with the sensor
pub trait SensorInterface {
    /// Interface error type
    type SensorError;

    /// Write the bytes provided to the device, starting at `register`.
    /// Implementations may bound the payload length and reject longer writes
    /// without touching the bus, as `I2cInterface` does.
    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::SensorError>;

    /// Read `recv_buf.len()` bytes from the device, starting at `register`
    fn read_register(&mut self, register: u8, recv_buf: &mut [u8]) -> Result<(), Self::SensorError>;
}

/// Lets a driver borrow an interface the caller keeps ownership of
impl<T: SensorInterface + ?Sized> SensorInterface for &mut T {
    type SensorError = T::SensorError;

    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::SensorError> {
        (**self).write_register(register, data)
    }

    fn read_register(&mut self, register: u8, recv_buf: &mut [u8]) -> Result<(), Self::SensorError> {
        (**self).read_register(register, recv_buf)
    }
}

pub use self::i2c::{I2cCommError, I2cInterface};
