//! Recording SPI / chip-select / delay doubles for host tests.
//!
//! All three share one [`BusTrace`] so tests can assert the interleaving of
//! chip-select edges and SPI frames. Enabled for downstream crates' tests
//! through the `mock` feature.

extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, SpiBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    CsLow,
    CsHigh,
    Frame(u8, u8),
    Flush,
}

#[derive(Default)]
struct TraceInner {
    ops: Vec<BusOp>,
    delay_ns: u64,
}

/// Shared, cloneable view of everything the doubles recorded.
#[derive(Clone, Default)]
pub struct BusTrace(Rc<RefCell<TraceInner>>);

impl BusTrace {
    pub fn ops(&self) -> Vec<BusOp> {
        self.0.borrow().ops.clone()
    }

    /// Only the SPI frames, in bus order.
    pub fn frames(&self) -> Vec<(u8, u8)> {
        self.0
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Frame(register, value) => Some((*register, *value)),
                _ => None,
            })
            .collect()
    }

    pub fn delay_ns(&self) -> u64 {
        self.0.borrow().delay_ns
    }

    pub fn clear(&self) {
        self.0.borrow_mut().ops.clear();
    }

    fn push(&self, op: BusOp) {
        self.0.borrow_mut().ops.push(op);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSpiError;

impl spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockSpi {
    trace: BusTrace,
    writes: usize,
    fail_on_write: Option<usize>,
}

impl MockSpi {
    /// Make the `n`th write (0-based) fail.
    pub fn fail_on_write(&mut self, n: usize) {
        self.fail_on_write = Some(n);
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockSpiError;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        unimplemented!("MAX7219 is write-only")
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_on_write == Some(index) {
            return Err(MockSpiError);
        }
        assert_eq!(words.len(), 2, "MAX7219 frames are two bytes");
        self.trace.push(BusOp::Frame(words[0], words[1]));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        unimplemented!("MAX7219 is write-only")
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        unimplemented!("MAX7219 is write-only")
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.trace.push(BusOp::Flush);
        Ok(())
    }
}

pub struct MockCs {
    trace: BusTrace,
}

impl digital::ErrorType for MockCs {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockCs {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(BusOp::CsLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.push(BusOp::CsHigh);
        Ok(())
    }
}

pub struct MockDelay {
    trace: BusTrace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.0.borrow_mut().delay_ns += u64::from(ns);
    }
}

/// A fresh SPI bus, CS pin and delay recording into one trace.
pub fn bus() -> (MockSpi, MockCs, MockDelay, BusTrace) {
    let trace = BusTrace::default();
    (
        MockSpi {
            trace: trace.clone(),
            writes: 0,
            fail_on_write: None,
        },
        MockCs {
            trace: trace.clone(),
        },
        MockDelay {
            trace: trace.clone(),
        },
        trace,
    )
}
