//! Recording mocks for pins and delays

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// Shift register line a mock pin stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
}

/// One pin write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub line: Line,
    pub high: bool,
}

impl PinEvent {
    pub fn new(line: Line, high: bool) -> Self {
        Self { line, high }
    }
}

/// Everything the hardware saw, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    Pin(PinEvent),
    DelayNs(u32),
}

/// Shared, ordered record of pin writes and delays
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<TraceEvent>>>);

impl Trace {
    fn push(&self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.0.borrow().clone()
    }

    pub fn pin_events(&self) -> Vec<PinEvent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TraceEvent::Pin(p) => Some(p),
                TraceEvent::DelayNs(_) => None,
            })
            .collect()
    }

    pub fn delays_ns(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TraceEvent::DelayNs(ns) => Some(ns),
                TraceEvent::Pin(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that records every write
pub struct MockPin {
    pub line: Line,
    trace: Trace,
    failing: bool,
}

impl MockPin {
    pub fn new(line: Line, trace: &Trace) -> Self {
        Self {
            line,
            trace: trace.clone(),
            failing: false,
        }
    }

    /// A pin whose every write fails
    pub fn failing(line: Line, trace: &Trace) -> Self {
        Self {
            failing: true,
            ..Self::new(line, trace)
        }
    }

    fn write(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.failing {
            return Err(MockPinError);
        }
        self.trace.push(TraceEvent::Pin(PinEvent::new(self.line, high)));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

/// Delay that returns immediately and records the requested duration
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.trace.push(TraceEvent::DelayNs(ns));
    }
}

/// Decode the byte frames a real 74HC595 chain would have latched
///
/// Samples the data line on each clock rising edge and groups the bits
/// between latch rising edges.
pub fn latched_frames(trace: &Trace) -> Vec<Vec<u8>> {
    let mut frames = Vec::new();
    let mut bits: Vec<bool> = Vec::new();
    let mut data = false;

    for event in trace.pin_events() {
        match (event.line, event.high) {
            (Line::Data, level) => data = level,
            (Line::Clock, true) => bits.push(data),
            (Line::Latch, true) => {
                let frame = bits
                    .chunks(8)
                    .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
                    .collect();
                frames.push(frame);
                bits.clear();
            }
            _ => {}
        }
    }

    frames
}
