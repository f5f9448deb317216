/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

//! Driver for the ST STHS34PF80 infrared presence and temperature sensor.
//!
//! ```ignore
//! let mut sensor = Sths34pf80::new(i2c)?;
//! let present = sensor.presence_status()?;
//! let object_c = sensor.object_temperature()?;
//! let ambient_c = sensor.ambient_temperature()?;
//! ```

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod macros;

pub mod constants;
pub mod interface;
pub mod wrapper;

pub use constants::DEFAULT_ADDRESS;
pub use interface::{I2cCommError, I2cInterface, SensorInterface};
pub use wrapper::Sths34pf80;

/// All possible errors in this crate
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Sensor communication error
    Comm(E),

    /// No STHS34PF80 answered the identity probe
    DeviceNotFound(ProbeError<E>),
}

/// Why the identity probe failed
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError<E> {
    /// Invalid chip ID was read
    InvalidChipId(u8),
    /// The identity register could not be read
    Comm(E),
}

impl<E> Error<E> {
    /// Did construction fail because the device could not be identified
    pub fn is_device_not_found(&self) -> bool {
        match self {
            Error::DeviceNotFound(_) => true,
            Error::Comm(_) => false,
        }
    }
}
