//! State demodulating the three-level line code.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

use super::{FRAME_BYTES, IO_COUNT, frame::FixedField};

/// One three-level line-code symbol.
///
/// The device encodes each IO as two pulses: two short for a line wired
/// low, two long for a line driven high, one short then one long for a line
/// left floating. Pulse-width demodulation turns those into the 2-bit
/// patterns `11`, `00`, and `10`. The fourth pattern, `01`, encodes nothing
/// and marks corruption or a non-conforming transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Line wired low (`11`).
    Low,
    /// Line driven high (`00`).
    High,
    /// Line left unconnected (`10`).
    Floating,
}

impl Symbol {
    /// Decode a 2-bit line-code pair, if it maps to a symbol.
    pub fn demodulate(pair: u8) -> Option<Self> {
        match pair {
            0b11 => Some(Self::Low),
            0b00 => Some(Self::High),
            0b10 => Some(Self::Floating),
            _ => None,
        }
    }
}

/// The twelve demodulated IOs of a frame, split by domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoFrame {
    /// The five DIP-switch identifier IOs.
    pub identifier: [Symbol; 5],
    /// The seven factory-fixed IOs.
    pub fixed: [Symbol; 7],
}

/// An error demodulating symbols.
#[derive(Debug, Error)]
pub enum DecodeSymbolsError {
    /// A 2-bit pair with no symbol mapping.
    #[error("Undefined line-code pair at IO {0}.")]
    Undefined(u8),
}

/// State token to demodulate the line-code pairs of a selected row.
#[derive(Debug)]
pub struct DecodeSymbols(pub(super) ());

impl DecodeSymbols {
    /// Transition to another state by demodulating the twelve line-code
    /// pairs, most-significant-bit first.
    ///
    /// Returns the demodulated IOs, and a successor state token.
    pub fn advance(
        self,
        r: [u8; FRAME_BYTES],
    ) -> Result<(IoFrame, FixedField), DecodeSymbolsError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FrameImage {
            io: [u8; 3],
            _tail: u8,
        }

        bitfield! {
            struct IoByte(u8) {
                [6..8] first: u8,
                [4..6] second: u8,
                [2..4] third: u8,
                [0..2] fourth: u8,
            }
        }

        let FrameImage { io, .. } = zerocopy::transmute!(r);

        let mut symbols = [Symbol::Low; IO_COUNT];

        for (k, byte) in io.iter().enumerate() {
            let byte = IoByte(*byte);
            let pairs = [byte.first(), byte.second(), byte.third(), byte.fourth()];

            for (j, pair) in pairs.into_iter().enumerate() {
                let i = 4 * k + j;

                symbols[i] =
                    Symbol::demodulate(pair).ok_or(DecodeSymbolsError::Undefined(i as u8))?;
            }
        }

        let frame = IoFrame {
            identifier: symbols[..5].try_into().unwrap(),
            fixed: symbols[5..].try_into().unwrap(),
        };

        Ok((frame, FixedField(())))
    }
}
