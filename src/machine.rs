//! Internal finite-state machine for driving the decoder by hand.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::decode`] for the one-call interface
//! covering the common case.
//!
//! # Architecture
//!
//! All states are represented by a zero-size, non-copy token. Once the data
//! for a stage is ready, transition to the next state by calling the token's
//! `advance` method. This returns a successor state token, along with any
//! extracted data. Only the initial state, re-exported for convenience as
//! [`Decoder`], can be constructed.
//!
//! The pipeline is linear: select a repeated row from the capture, check the
//! sync marker, demodulate the twelve line-code pairs, validate the fixed
//! field, then extract the identifier. A stage error means the capture does
//! not carry a valid transmission from this device. Foreign and corrupted
//! transmissions are frequent and expected, so there is nothing to recover
//! or retry; discard the capture and move on.

pub mod frame;
pub mod select;
pub mod symbol;

/// Entrypoint to the finite-state machine.
pub type Decoder = select::SelectRow;

/// Bits in one well-formed row.
///
/// Over the air the packet is 128 bits, but pulse-width demodulation
/// collapses the trailing 32-bit sync run into a single output bit: 100
/// demodulated bits at 4 per output bit give 25.
pub const FRAME_BITS: usize = 25;

/// Bytes of a packed frame image.
pub const FRAME_BYTES: usize = 4;

/// Number of line-code IOs in a frame.
pub const IO_COUNT: usize = 12;

/// Minimum occurrences of the selected row; the device repeats each packet
/// at least four times.
pub const MIN_REPEATS: usize = 4;
