/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

use embedded_hal::blocking::i2c::{Write, WriteRead};
use std::collections::VecDeque;
use std::vec::Vec;

const MAX_FAKE_PACKET_SIZE: usize = 16;
const NUM_REGISTERS: usize = 256;

/// One frame written to the port
pub struct FakePacket {
    pub addr: u8,
    pub len: usize,
    pub buf: [u8; MAX_FAKE_PACKET_SIZE],
}

impl FakePacket {
    pub fn new_from_slice(addr: u8, slice: &[u8]) -> Self {
        let src_len = slice.len();
        let mut inst = Self {
            addr,
            len: src_len,
            buf: [0; MAX_FAKE_PACKET_SIZE],
        };
        inst.buf[..src_len].copy_from_slice(slice);
        inst
    }
}

/// An in-memory register file that answers register-addressed reads
pub struct FakeI2cPort {
    pub registers: [u8; NUM_REGISTERS],
    /// reads of these registers fail with a bus error
    pub failing_registers: Vec<u8>,
    /// writes fail with a bus error
    pub fail_writes: bool,
    /// every register read attempted, in order
    pub register_reads: Vec<u8>,
    pub sent_packets: VecDeque<FakePacket>,
    pub last_addr: Option<u8>,
}

impl FakeI2cPort {
    pub fn new() -> Self {
        FakeI2cPort {
            registers: [0; NUM_REGISTERS],
            failing_registers: Vec::new(),
            fail_writes: false,
            register_reads: Vec::new(),
            sent_packets: VecDeque::with_capacity(3),
            last_addr: None,
        }
    }

    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    pub fn fail_register(&mut self, register: u8) {
        self.failing_registers.push(register);
    }
}

impl Write for FakeI2cPort {
    type Error = ();

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.last_addr = Some(addr);
        if self.fail_writes {
            return Err(());
        }
        self.sent_packets.push_back(FakePacket::new_from_slice(addr, bytes));
        // register auto-increment from the first byte
        if let Some((&register, data)) = bytes.split_first() {
            for (i, byte) in data.iter().enumerate() {
                self.registers[(register as usize + i) % NUM_REGISTERS] = *byte;
            }
        }
        Ok(())
    }
}

impl WriteRead for FakeI2cPort {
    type Error = ();

    fn write_read(&mut self, addr: u8, send_buf: &[u8], recv_buf: &mut [u8]) -> Result<(), Self::Error> {
        self.last_addr = Some(addr);
        let register = send_buf.first().copied().ok_or(())?;
        self.register_reads.push(register);
        if self.failing_registers.contains(&register) {
            return Err(());
        }
        for (i, byte) in recv_buf.iter_mut().enumerate() {
            *byte = self.registers[(register as usize + i) % NUM_REGISTERS];
        }
        Ok(())
    }
}
