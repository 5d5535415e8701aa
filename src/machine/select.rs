//! State selecting the transmitted row from a capture.

use thiserror::Error;

use crate::capture::RowBuffer;

use super::{FRAME_BITS, FRAME_BYTES, MIN_REPEATS, frame::SyncCheck};

/// An error selecting a row.
#[derive(Debug, Error)]
pub enum SelectRowError {
    /// Too few rows to hold the expected repetitions.
    #[error("Capture holds fewer than 4 rows.")]
    Truncated,
    /// No row of the expected length recurred often enough.
    #[error("No 25-bit row repeated 4 times.")]
    NoRepeatedRow,
}

/// State token to select a repeated row.
#[derive(Debug)]
pub struct SelectRow;

impl SelectRow {
    /// Transition to another state by selecting a repeated row.
    ///
    /// Scans the capture for a 25-bit row that is bit-for-bit identical to
    /// at least three others, by pairwise comparison over the packed bytes.
    ///
    /// Returns the packed image of the selected row, and a successor state
    /// token.
    pub fn advance(r: &RowBuffer) -> Result<([u8; FRAME_BYTES], SyncCheck), SelectRowError> {
        let rows = r.rows();

        if rows.len() < MIN_REPEATS {
            Err(SelectRowError::Truncated)?;
        }

        let row = rows
            .iter()
            .filter(|row| row.len() == FRAME_BITS)
            .find(|row| rows.iter().filter(|other| other == row).count() >= MIN_REPEATS)
            .ok_or(SelectRowError::NoRepeatedRow)?;

        let mut image = [0; FRAME_BYTES];
        image.copy_from_slice(row.as_bytes());

        Ok((image, SyncCheck(())))
    }
}
