/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

use crate::constants::*;
use crate::debug_println;
use crate::interface::{I2cCommError, I2cInterface, SensorInterface};
use crate::{Error, ProbeError};

/// STHS34PF80 infrared presence and temperature sensor.
///
/// The device is probed and configured when the driver is built;
/// afterwards every getter re-reads the device registers.
pub struct Sths34pf80<SI> {
    pub(crate) sensor_interface: SI,
}

impl<SI, SE> Sths34pf80<SI>
    where
        SI: SensorInterface<SensorError = SE>,
{
    /// Verify the device identity over the interface provided,
    /// then select the fixed output data rate.
    pub fn new_with_interface(sensor_interface: SI) -> Result<Self, Error<SE>> {
        let mut inst = Self { sensor_interface };
        inst.verify_chip_id()?;
        inst.write_register(CTRL1, CTRL1_ODR_1HZ)?;
        debug_println!("ctrl1 odr {:x}", CTRL1_ODR_1HZ);
        Ok(inst)
    }

    /// Give back the sensor interface
    pub fn free(self) -> SI {
        self.sensor_interface
    }

    /// Is a person currently detected
    pub fn presence_status(&mut self) -> Result<bool, Error<SE>> {
        let status = self.read_register(STATUS)?;
        Ok(status & STATUS_PRESENCE_FLAG != 0)
    }

    /// Object temperature in degrees Celsius
    pub fn object_temperature(&mut self) -> Result<f32, Error<SE>> {
        let raw = self.object_temperature_raw()?;
        Ok(Self::raw_to_celsius(raw))
    }

    /// Ambient temperature in degrees Celsius
    pub fn ambient_temperature(&mut self) -> Result<f32, Error<SE>> {
        let raw = self.ambient_temperature_raw()?;
        Ok(Self::raw_to_celsius(raw))
    }

    /// Unscaled object temperature, as reported by the device
    pub fn object_temperature_raw(&mut self) -> Result<u16, Error<SE>> {
        self.read_raw_pair(TOBJECT_L, TOBJECT_H)
    }

    /// Unscaled ambient temperature, as reported by the device
    pub fn ambient_temperature_raw(&mut self) -> Result<u16, Error<SE>> {
        self.read_raw_pair(TAMBIENT_L, TAMBIENT_H)
    }

    /// Linear conversion; the raw value is treated as unsigned
    pub(crate) fn raw_to_celsius(raw: u16) -> f32 {
        (raw as f32) * TEMPERATURE_SCALE
    }

    fn verify_chip_id(&mut self) -> Result<(), Error<SE>> {
        let mut buf = [0u8; 1];
        self.sensor_interface
            .read_register(WHO_AM_I, &mut buf)
            .map_err(|e| {
                debug_println!("who_am_i read failed");
                Error::DeviceNotFound(ProbeError::Comm(e))
            })?;

        let chip_id = buf[0];
        debug_println!("who_am_i {:x}", chip_id);
        if chip_id != WHO_AM_I_VALUE {
            return Err(Error::DeviceNotFound(ProbeError::InvalidChipId(chip_id)));
        }
        Ok(())
    }

    /// Two single-byte reads, low byte first
    fn read_raw_pair(&mut self, low_reg: u8, high_reg: u8) -> Result<u16, Error<SE>> {
        let low = self.read_register(low_reg)?;
        let high = self.read_register(high_reg)?;
        Ok(((high as u16) << 8) | (low as u16))
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error<SE>> {
        let mut buf = [0u8; 1];
        self.sensor_interface
            .read_register(register, &mut buf)
            .map_err(Error::Comm)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<SE>> {
        self.sensor_interface
            .write_register(register, &[value])
            .map_err(Error::Comm)
    }
}

impl<I2C, CommE> Sths34pf80<I2cInterface<I2C>>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE> +
        embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
{
    /// Connect over i2c at the default address
    pub fn new(i2c: I2C) -> Result<Self, Error<I2cCommError<CommE>>> {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Connect over i2c at the address provided
    pub fn new_with_address(i2c: I2C, address: u8) -> Result<Self, Error<I2cCommError<CommE>>> {
        Self::new_with_interface(I2cInterface::new(i2c, address))
    }

    /// 7-bit i2c address in use
    pub fn address(&self) -> u8 {
        self.sensor_interface.address()
    }

    /// Give back the i2c port
    pub fn release(self) -> I2C {
        self.sensor_interface.free()
    }
}
