//! Convenience interface for decoding captures.
//!
//! [`decode`] drives the finite-state machine in [`crate::machine`] over one
//! capture window, publishing a successful reading to a [`Report`] receiver
//! and collapsing every validation failure into a single "no match" result.
//! The receiver sees a reading only after every stage has passed; rejected
//! captures publish nothing.

use log::{debug, trace};
use thiserror::Error;

use crate::capture::RowBuffer;
use crate::machine::{
    Decoder,
    frame::{FixedFieldError, IdentifierError, SyncCheckError},
    select::SelectRowError,
    symbol::DecodeSymbolsError,
};
use crate::pulse::QUORUM_A160;

/// A decoded transmission from the sensor.
///
/// The device transmits only when its reed switch transitions from closed
/// to open, so a reading always reports an opening event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading<'a> {
    /// Capture timestamp, formatted by the caller.
    pub time: &'a str,
    /// Model label of the transmitting device.
    pub model: &'static str,
    /// The 5-bit DIP-switch identifier.
    pub id: u8,
}

/// Receive readings from the decoder.
///
/// The receiver is handed at most one reading per capture, and only when
/// every validation stage has passed; there is no partially-valid reading.
pub trait Report {
    /// Accept a validated reading.
    fn report(&mut self, reading: Reading<'_>);
}

/// Reasons a capture fails to decode.
///
/// Never surfaced past this module: every variant means "not this protocol
/// or corrupted", and the receiver sees large volumes of foreign
/// transmissions by design.
#[derive(Debug, Error)]
enum Rejection {
    #[error(transparent)]
    Select(#[from] SelectRowError),
    #[error(transparent)]
    Sync(#[from] SyncCheckError),
    #[error(transparent)]
    Symbols(#[from] DecodeSymbolsError),
    #[error(transparent)]
    FixedField(#[from] FixedFieldError),
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

/// Decode one capture window, publishing to a receiver.
///
/// Returns whether a reading was published. `false` means the capture does
/// not carry a valid transmission from this device; this is the expected
/// outcome for most captures and never a fatal condition. Each capture is
/// decoded exactly once, with no retry and no state carried between calls.
pub fn decode(r: &RowBuffer, time: &str, o: &mut impl Report) -> bool {
    match run(r) {
        Ok(id) => {
            debug!("{}: id {id}", QUORUM_A160.name);

            o.report(Reading {
                time,
                model: QUORUM_A160.model,
                id,
            });

            true
        }
        Err(rejection) => {
            trace!("{}: no match: {rejection}", QUORUM_A160.name);

            false
        }
    }
}

fn run(r: &RowBuffer) -> Result<u8, Rejection> {
    let (image, successor) = Decoder::advance(r)?;
    let successor = successor.advance(image)?;
    let (frame, successor) = successor.advance(image)?;
    let successor = successor.advance(frame.fixed)?;
    let id = successor.advance(frame.identifier)?;

    Ok(id)
}
