/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

use super::SensorInterface;

/// register address plus the largest payload accepted in one write frame;
/// the driver itself only ever writes single configuration bytes
const WRITE_FRAME_LEN: usize = 8;

pub struct I2cInterface<I2C> {
    /// i2c port
    i2c_port: I2C,
    /// address for i2c communications with the sensor
    address: u8,
}

impl<I2C, CommE> I2cInterface<I2C>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE> +
        embedded_hal::blocking::i2c::WriteRead<Error = CommE>
{
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self {
            i2c_port: i2c,
            address: addr,
        }
    }
}

impl<I2C> I2cInterface<I2C> {
    /// 7-bit address this interface talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the i2c port
    pub fn free(self) -> I2C {
        self.i2c_port
    }

    #[cfg(test)]
    pub(crate) fn port_mut(&mut self) -> &mut I2C {
        &mut self.i2c_port
    }
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cCommError<E> {
    /// I2C bus error
    I2c(E),
    /// Register write payload of this many bytes does not fit in one frame
    FrameTooLong(usize),
}

impl<I2C, CommE> SensorInterface for I2cInterface<I2C>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE> +
        embedded_hal::blocking::i2c::WriteRead<Error = CommE>
{
    type SensorError = I2cCommError<CommE>;

    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::SensorError> {
        let frame_len = data.len() + 1;
        if frame_len > WRITE_FRAME_LEN {
            return Err(I2cCommError::FrameTooLong(data.len()));
        }
        let mut frame = [0u8; WRITE_FRAME_LEN];
        frame[0] = register;
        frame[1..frame_len].copy_from_slice(data);

        self.i2c_port
            .write(self.address, &frame[..frame_len])
            .map_err(I2cCommError::I2c)
    }

    fn read_register(&mut self, register: u8, recv_buf: &mut [u8]) -> Result<(), Self::SensorError> {
        self.i2c_port
            .write_read(self.address, &[register], recv_buf)
            .map_err(I2cCommError::I2c)
    }
}
