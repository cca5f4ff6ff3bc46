//! Console bridge device.
//!
//! The reference [`Device`] implementation: three memory-mapped registers
//! that connect a 6502 program's character I/O to a host console. BASIC's
//! CHROUT/CHRIN loops poll exactly this surface.

use super::Device;
use parking_lot::Mutex;
use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default address of the output-data register (write-only).
pub const DEFAULT_OUTPUT_DATA: u16 = 0xF001;
/// Default address of the input-status register (read-only).
pub const DEFAULT_INPUT_STATUS: u16 = 0xF004;
/// Default address of the input-data register (read-only).
pub const DEFAULT_INPUT_DATA: u16 = 0xF005;

/// Memory-mapped console bridge.
///
/// ## Register Map
///
/// | Address (default) | Register    | Access | Behavior |
/// |-------------------|-------------|--------|----------|
/// | 0xF001            | OutputData  | W      | Byte is appended to the output sink and handed to the output callback, eagerly |
/// | 0xF004            | InputStatus | R      | 1 if at least one buffered input byte is available, else 0 |
/// | 0xF005            | InputData   | R      | Pops one byte from the input FIFO; consults the fallback source when empty; else 0 |
///
/// Writes to InputStatus/InputData are no-ops; reads from OutputData return 0.
///
/// ## Threading
///
/// The input FIFO and output sink are lock-guarded and shared through
/// cloneable handles, so a producer thread may [`ConsoleInput::submit`]
/// while the CPU thread reads, and an observer may drain output while the
/// bus owns the bridge. Everything else in the core is single-threaded by
/// contract.
///
/// # Example
///
/// ```rust
/// use mos6502::{ConsoleBridge, Device};
///
/// let mut console = ConsoleBridge::new();
/// let output = console.output_handle();
///
/// console.submit_input("HI");
/// assert_eq!(console.read(0xF004), 1);       // input available
/// assert_eq!(console.read(0xF005), b'H');    // FIFO order
///
/// console.write(0xF001, b'!');
/// assert_eq!(output.to_string_lossy(), "!");
/// ```
pub struct ConsoleBridge {
    output_data: u16,
    input_status: u16,
    input_data: u16,

    input: Arc<Mutex<VecDeque<u8>>>,
    output: Arc<Mutex<Vec<u8>>>,

    // Invoked per byte as it is written; the sink itself is always appended.
    on_output: Option<Box<dyn FnMut(u8)>>,

    // Consulted by InputData reads when the FIFO is empty. Behind a lock
    // because Device::read takes &self.
    fallback: Mutex<Option<Box<dyn FnMut() -> Option<u8>>>>,
}

impl ConsoleBridge {
    /// Creates a bridge at the default addresses 0xF001/0xF004/0xF005.
    pub fn new() -> Self {
        Self::with_addresses(DEFAULT_OUTPUT_DATA, DEFAULT_INPUT_STATUS, DEFAULT_INPUT_DATA)
    }

    /// Creates a bridge with custom register addresses.
    pub fn with_addresses(output_data: u16, input_status: u16, input_data: u16) -> Self {
        Self {
            output_data,
            input_status,
            input_data,
            input: Arc::new(Mutex::new(VecDeque::new())),
            output: Arc::new(Mutex::new(Vec::new())),
            on_output: None,
            fallback: Mutex::new(None),
        }
    }

    /// Appends each codepoint of `text` (truncated to its low byte) to the
    /// input FIFO.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mos6502::{ConsoleBridge, Device};
    ///
    /// let console = ConsoleBridge::new();
    /// console.submit_input("OK");
    /// assert_eq!(console.read(0xF005), b'O');
    /// assert_eq!(console.read(0xF005), b'K');
    /// assert_eq!(console.read(0xF005), 0); // empty, no fallback
    /// ```
    pub fn submit_input(&self, text: &str) {
        let mut queue = self.input.lock();
        for ch in text.chars() {
            queue.push_back(ch as u8);
        }
    }

    /// Number of buffered input bytes not yet consumed by the CPU.
    pub fn pending_input(&self) -> usize {
        self.input.lock().len()
    }

    /// Returns a cloneable, thread-safe handle to the input FIFO.
    ///
    /// Lets a producer thread keep feeding keystrokes after the bridge has
    /// been attached to (and is owned by) the bus.
    pub fn input_handle(&self) -> ConsoleInput {
        ConsoleInput {
            queue: Arc::clone(&self.input),
        }
    }

    /// Returns a cloneable, thread-safe handle to the output sink.
    pub fn output_handle(&self) -> ConsoleOutput {
        ConsoleOutput {
            buffer: Arc::clone(&self.output),
        }
    }

    /// Sets a callback invoked with every byte written to OutputData.
    ///
    /// The byte is delivered eagerly, before the write returns; the internal
    /// sink is appended either way.
    pub fn set_output_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_output = Some(Box::new(callback));
    }

    /// Sets the fallback input source consulted when the FIFO is empty.
    ///
    /// An InputData read with an empty FIFO calls the source; `Some(byte)`
    /// is consumed and returned to the CPU, `None` reads as 0.
    pub fn set_input_fallback<F>(&mut self, source: F)
    where
        F: FnMut() -> Option<u8> + 'static,
    {
        *self.fallback.lock() = Some(Box::new(source));
    }
}

impl Default for ConsoleBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for ConsoleBridge {
    fn handles(&self, addr: u16) -> bool {
        addr == self.output_data || addr == self.input_status || addr == self.input_data
    }

    fn read(&self, addr: u16) -> u8 {
        if addr == self.input_status {
            if self.input.lock().is_empty() {
                0
            } else {
                1
            }
        } else if addr == self.input_data {
            if let Some(byte) = self.input.lock().pop_front() {
                return byte;
            }
            match self.fallback.lock().as_mut().and_then(|source| source()) {
                Some(byte) => byte,
                None => 0,
            }
        } else {
            // OutputData is write-only
            0
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == self.output_data {
            self.output.lock().push(value);
            if let Some(callback) = self.on_output.as_mut() {
                callback(value);
            }
        }
        // InputStatus and InputData are read-only; writes are dropped
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Cloneable producer handle to a [`ConsoleBridge`] input FIFO.
#[derive(Clone)]
pub struct ConsoleInput {
    queue: Arc<Mutex<VecDeque<u8>>>,
}

impl ConsoleInput {
    /// Appends each codepoint of `text` (low byte) to the FIFO.
    pub fn submit(&self, text: &str) {
        let mut queue = self.queue.lock();
        for ch in text.chars() {
            queue.push_back(ch as u8);
        }
    }

    /// Appends a single raw byte to the FIFO.
    pub fn push_byte(&self, byte: u8) {
        self.queue.lock().push_back(byte);
    }

    /// Number of buffered bytes not yet consumed.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// True if no buffered input remains.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

/// Cloneable observer handle to a [`ConsoleBridge`] output sink.
#[derive(Clone)]
pub struct ConsoleOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl ConsoleOutput {
    /// Copies the bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// The output so far, decoded as UTF-8 with replacement.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Drains and returns the buffered output.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }
}
