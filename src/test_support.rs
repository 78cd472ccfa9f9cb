//! Minimal peripherals shared across unit tests.

use crate::bus::Peripheral;

/// Flat byte array peripheral, addressed relative to its own base.
pub(crate) struct Ram {
    base: u16,
    data: Vec<u8>,
}

impl Ram {
    pub(crate) fn new(size: usize) -> Self {
        Ram { base: 0, data: vec![0u8; size] }
    }

    pub(crate) fn with_base(base: u16, size: usize) -> Self {
        Ram { base, data: vec![0u8; size] }
    }
}

impl Peripheral for Ram {
    fn on_load(&mut self, addr: u16) -> u8 {
        self.data[(addr - self.base) as usize]
    }

    fn on_store(&mut self, addr: u16, value: u8) {
        self.data[(addr - self.base) as usize] = value;
    }
}
