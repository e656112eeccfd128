//! Shared test doubles for the integration tests
//!
//! Shared handles (`Rc<RefCell<_>>`) let a test keep inspecting a
//! collaborator after the monitor has taken ownership of its clone.

use std::cell::RefCell;
use std::rc::Rc;

use sagwatch_core::{AnalogSource, PixelStrand, ReportSink, Rgb};

/// Analog input that replays a script, then repeats the last sample.
pub struct ScriptedSource {
    samples: Vec<u16>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty(), "script needs at least one sample");
        Self {
            samples: samples.to_vec(),
            pos: 0,
        }
    }
}

impl AnalogSource for ScriptedSource {
    fn read(&mut self) -> u16 {
        let idx = self.pos.min(self.samples.len() - 1);
        self.pos += 1;
        self.samples[idx]
    }
}

/// Serial sink that records every line.
#[derive(Clone, Default)]
pub struct SharedSink(Rc<RefCell<Vec<String>>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl ReportSink for SharedSink {
    fn write_line(&mut self, line: &str) {
        self.0.borrow_mut().push(line.to_string());
    }
}

/// One operation issued to a pixel strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandOp {
    Brightness(u8),
    Pixel(Rgb),
    Flush,
}

/// Pixel strand that records every operation.
#[derive(Clone, Default)]
pub struct SharedStrand(Rc<RefCell<Vec<StrandOp>>>);

impl SharedStrand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors flushed to the hardware, in order.
    pub fn flushed_colors(&self) -> Vec<Rgb> {
        let ops = self.0.borrow();
        let mut staged = None;
        let mut flushed = Vec::new();
        for op in ops.iter() {
            match op {
                StrandOp::Pixel(color) => staged = Some(*color),
                StrandOp::Flush => {
                    if let Some(color) = staged {
                        flushed.push(color);
                    }
                }
                StrandOp::Brightness(_) => {}
            }
        }
        flushed
    }
}

impl PixelStrand for SharedStrand {
    fn set_brightness(&mut self, level: u8) {
        self.0.borrow_mut().push(StrandOp::Brightness(level));
    }
    fn set_pixel(&mut self, color: Rgb) {
        self.0.borrow_mut().push(StrandOp::Pixel(color));
    }
    fn flush(&mut self) {
        self.0.borrow_mut().push(StrandOp::Flush);
    }
}
