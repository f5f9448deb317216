/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

//! STHS34PF80 register map and fixed conversion values

/// the i2c address normally used by STHS34PF80
pub const DEFAULT_ADDRESS: u8 = 0x5A;

/// Device identification register
pub const WHO_AM_I: u8 = 0x0F;
/// Value the identification register always reports
pub const WHO_AM_I_VALUE: u8 = 0xD3;

/// Control register 1: output data rate select, ODR[3:0]
pub const CTRL1: u8 = 0x20;
/// ODR[3:0] = 0011, 1 Hz
pub const CTRL1_ODR_1HZ: u8 = 0x03;

/// Status register
pub const STATUS: u8 = 0x23;
/// Presence detected
pub const STATUS_PRESENCE_FLAG: u8 = 0x01;

/// Object temperature, low byte
pub const TOBJECT_L: u8 = 0x26;
/// Object temperature, high byte
pub const TOBJECT_H: u8 = 0x27;

/// Ambient temperature, low byte
pub const TAMBIENT_L: u8 = 0x28;
/// Ambient temperature, high byte
pub const TAMBIENT_H: u8 = 0x29;

/// degrees Celsius per LSB of a raw temperature value
pub const TEMPERATURE_SCALE: f32 = 0.01;
