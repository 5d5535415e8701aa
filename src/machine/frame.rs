//! States validating frame alignment and extracting the frame's fields.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

use super::FRAME_BYTES;
use super::symbol::{DecodeSymbols, Symbol};

/// Required value of the seven fixed IOs.
pub const FIXED_FIELD: u8 = 0b0110000;

/// An error checking the sync marker.
#[derive(Debug, Error)]
pub enum SyncCheckError {
    /// The trailing sync bit is clear.
    #[error("Sync marker bit is not set.")]
    Misaligned,
}

/// State token to check the sync marker of a selected row.
#[derive(Debug)]
pub struct SyncCheck(pub(super) ());

impl SyncCheck {
    /// Transition to another state by checking the trailing sync marker.
    ///
    /// The 32-bit over-the-air sync run survives demodulation as a single
    /// set bit after the twelve line-code pairs; a clear bit means the row
    /// is misaligned or truncated.
    ///
    /// Returns the successor state token.
    pub fn advance(self, r: [u8; FRAME_BYTES]) -> Result<DecodeSymbols, SyncCheckError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FrameImage {
            _io: [u8; 3],
            tail: u8,
        }

        bitfield! {
            struct Tail(u8) {
                [7] sync,
            }
        }

        let FrameImage { tail, .. } = zerocopy::transmute!(r);

        if !Tail(tail).sync() {
            Err(SyncCheckError::Misaligned)?;
        }

        Ok(DecodeSymbols(()))
    }
}

/// An error validating the fixed field.
#[derive(Debug, Error)]
pub enum FixedFieldError {
    /// A floating level on a line the device always drives.
    #[error("Floating level at IO {0} of the fixed field.")]
    Floating(u8),
    /// The accumulated value is not the constant the device transmits.
    #[error("Fixed field holds {0:#09b}, expected 0b0110000.")]
    Mismatch(u8),
}

/// State token to validate the seven fixed IOs.
#[derive(Debug)]
pub struct FixedField(pub(super) ());

impl FixedField {
    /// Transition to another state by validating the fixed IOs.
    ///
    /// Symbols accumulate most-significant first, low as 0 and high as 1,
    /// and must equal [`FIXED_FIELD`]. The device never floats these lines.
    ///
    /// Returns the successor state token.
    pub fn advance(self, r: [Symbol; 7]) -> Result<IdentifierField, FixedFieldError> {
        let mut value = 0;

        for (i, symbol) in r.iter().enumerate() {
            value <<= 1;

            match symbol {
                Symbol::Low => {}
                Symbol::High => value |= 1,
                Symbol::Floating => Err(FixedFieldError::Floating(i as u8))?,
            }
        }

        if value != FIXED_FIELD {
            Err(FixedFieldError::Mismatch(value))?;
        }

        Ok(IdentifierField(()))
    }
}

/// An error extracting the identifier.
#[derive(Debug, Error)]
pub enum IdentifierError {
    /// A driven-high level on a line the device wires low or leaves
    /// floating.
    #[error("Driven-high level at IO {0} of the identifier field.")]
    High(u8),
}

/// State token to extract the DIP-switch identifier.
#[derive(Debug)]
pub struct IdentifierField(pub(super) ());

impl IdentifierField {
    /// Transition out of the machine by extracting the identifier.
    ///
    /// Each identifier IO reflects one DIP switch: low for a switch set to
    /// 1, floating for 0, with IO `i` driving identifier bit `i`. The
    /// device never drives these lines high.
    ///
    /// Returns the 5-bit identifier.
    pub fn advance(self, r: [Symbol; 5]) -> Result<u8, IdentifierError> {
        let mut id = 0;

        for (i, symbol) in r.iter().enumerate() {
            match symbol {
                Symbol::Low => id |= 1 << i,
                Symbol::Floating => {}
                Symbol::High => Err(IdentifierError::High(i as u8))?,
            }
        }

        Ok(id)
    }
}
