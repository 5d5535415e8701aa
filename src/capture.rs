//! Bit rows and the capture buffer filled by the upstream demodulator.
//!
//! A capture window holds every row the pulse-width demodulator produced
//! between two reset gaps. Rows are filled bit-by-bit as pulses arrive and
//! are treated as immutable once the buffer is handed to the decoder, which
//! only ever reads it. Several device decoders may scan the same buffer
//! concurrently for this reason.

use heapless::Vec;

/// Maximum number of bits a row can hold.
///
/// A well-formed frame is 25 bits, but noisy captures can run longer before
/// the demodulator gives up on a row; bits past this capacity are dropped.
pub const MAX_ROW_BITS: usize = 64;

/// Maximum number of rows a capture window can hold.
pub const MAX_ROWS: usize = 50;

const ROW_BYTES: usize = MAX_ROW_BITS / 8;

/// One demodulated repetition of the transmitted frame.
///
/// Bits are packed most-significant-bit first. Bits beyond the row length
/// are kept at zero, so equality over the packed bytes is equality over the
/// meaningful bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    bytes: [u8; ROW_BYTES],
    len: usize,
}

impl Row {
    /// Create an empty row.
    pub const fn new() -> Self {
        Self {
            bytes: [0; ROW_BYTES],
            len: 0,
        }
    }

    /// Create a row from packed bytes, keeping the first `len` bits.
    pub fn from_bytes(r: &[u8], len: usize) -> Self {
        let mut row = Self::new();
        row.len = len.min(MAX_ROW_BITS).min(r.len() * 8);

        let bytes = row.len.div_ceil(8);
        row.bytes[..bytes].copy_from_slice(&r[..bytes]);

        // Clear the unused bits of a partial trailing byte.
        let spare = row.len % 8;
        if spare != 0 {
            row.bytes[bytes - 1] &= 0xFF << (8 - spare);
        }

        row
    }

    /// Append a bit, dropping it if the row is full.
    pub fn push(&mut self, bit: bool) {
        if self.len == MAX_ROW_BITS {
            return;
        }

        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }

        self.len += 1;
    }

    /// The number of bits in this row.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this row holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at position `i`, if in range.
    pub fn bit(&self, i: usize) -> Option<bool> {
        (i < self.len).then(|| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    /// The packed bytes holding this row's bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len.div_ceil(8)]
    }
}

/// One capture window of demodulated rows.
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
    rows: Vec<Row, MAX_ROWS>,
}

impl RowBuffer {
    /// Create an empty capture.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row, returning it unchanged if the capture is full.
    pub fn push(&mut self, row: Row) -> Result<(), Row> {
        self.rows.push(row)
    }

    /// The rows of this capture, in arrival order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The number of rows in this capture.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this capture holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
