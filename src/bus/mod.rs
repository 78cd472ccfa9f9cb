#![doc = r#"
Bus module: the address-space dispatch fabric.

A `Bus` owns an interval map of disjoint `[lo, hi]` ranges, each bound to
a peripheral, plus a small most-recently-used cache of ranges because
consecutive CPU accesses almost always land in the same region as the
previous one.

Modules:
- interval_map: the ordered range container `load`/`store` search against.
- peripheral: the `Peripheral` trait peripherals implement.
"#]

pub mod interval_map;
pub mod peripheral;

use crate::error::AttachError;
use interval_map::{IntervalMap, RangeRef};
pub use peripheral::Peripheral;

/// Number of recently-hit ranges the bus remembers to short-circuit the
/// interval search. Two is enough to cover the common pattern of a CPU
/// bouncing between a zero-page operand and a program-counter fetch in
/// adjacent ROM.
const MRU_CAPACITY: usize = 2;

/// The 16-bit address-space dispatch fabric.
///
/// `load`/`store` never fail in a way the CPU must handle specially: an
/// unmapped access reads as `0xFF` and reports a miss, and an unmapped
/// write is silently dropped and reports a miss. Callers that care about
/// misses (e.g. for diagnostics) can inspect the returned `bool`.
pub struct Bus {
    map: IntervalMap<Box<dyn Peripheral>>,
    mru: Vec<RangeRef>,
    attached_count: usize,
}

impl Bus {
    pub fn new() -> Self {
        Bus {
            map: IntervalMap::new(),
            mru: Vec::with_capacity(MRU_CAPACITY),
            attached_count: 0,
        }
    }

    /// Number of peripherals currently attached.
    pub fn attached_count(&self) -> usize {
        self.attached_count
    }

    /// Attach `peripheral` over the closed range `[lo, hi]`.
    ///
    /// Calls `on_attach` once on success. Fails without mutating the bus if
    /// the range is invalid (`lo > hi`) or overlaps an already-attached range.
    pub fn attach(
        &mut self,
        mut peripheral: Box<dyn Peripheral>,
        lo: u16,
        hi: u16,
    ) -> Result<(), AttachError> {
        if lo > hi {
            return Err(AttachError::InvalidRange { lo, hi });
        }
        peripheral.on_attach();
        self.map
            .insert(lo, hi, peripheral)
            .map(|_| {
                self.attached_count += 1;
            })
            .map_err(|_| AttachError::Overlap { lo, hi })
    }

    fn find(&self, addr: u16) -> Option<RangeRef> {
        if let Some(hit) = self.mru.iter().find(|r| r.contains(addr)) {
            return Some(*hit);
        }
        self.map.search(addr)
    }

    fn remember(&mut self, range: RangeRef) {
        self.mru.retain(|r| r.index != range.index);
        self.mru.insert(0, range);
        self.mru.truncate(MRU_CAPACITY);
    }

    /// Read one byte. Returns `(0xFF, false)` for an unmapped address.
    pub fn load(&mut self, addr: u16) -> (u8, bool) {
        match self.find(addr) {
            Some(range) => {
                let value = self.map.get_mut(range).on_load(addr);
                self.remember(range);
                (value, true)
            }
            None => (0xFF, false),
        }
    }

    /// Write one byte. Returns `false` for an unmapped address, in which
    /// case the write is dropped.
    pub fn store(&mut self, addr: u16, value: u8) -> bool {
        match self.find(addr) {
            Some(range) => {
                self.map.get_mut(range).on_store(addr, value);
                self.remember(range);
                true
            }
            None => false,
        }
    }

    /// Convenience wrapper around [`Bus::load`] for callers that don't need
    /// the miss signal (most instruction execution paths).
    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        self.load(addr).0
    }

    /// Convenience wrapper around [`Bus::store`] for callers that don't need
    /// the miss signal.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.store(addr, value);
    }

    /// Read a little-endian 16-bit value at `addr`/`addr+1` (wrapping).
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
