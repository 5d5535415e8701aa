//! Declared pulse-timing contract with the upstream demodulator.
//!
//! The A-160 keys its carrier on and off with a pulse-width line code: a
//! short pulse is nominally 500 µs, a long pulse three times that. None of
//! these parameters are consumed by the decoding logic itself; they describe
//! the demodulation the upstream collaborator must perform for
//! [`crate::decode`] to receive well-formed rows.

/// Nominal width of a short pulse, in microseconds.
pub const NOMINAL_BIT_WIDTH_US: u32 = 500;

/// Timing parameters for an on-off-keying pulse-width demodulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// Nominal width of a short pulse ('1') [µs].
    pub short_us: u32,
    /// Nominal width of a long pulse ('0') [µs].
    pub long_us: u32,
    /// Maximum gap before end of message [µs].
    pub reset_us: u32,
    /// Maximum gap before a new row of bits [µs].
    pub gap_us: u32,
    /// Maximum deviation from nominal widths; zero for raw matching [µs].
    pub tolerance_us: u32,
    /// Number of leading bits for the demodulator to strip.
    pub leading_bits: u32,
}

/// A device this crate can decode: display name, reporting label, timing
/// contract, and the field names of the reported record.
#[derive(Debug, Clone, Copy)]
pub struct Device {
    /// Short display name.
    pub name: &'static str,
    /// Model label carried on readings.
    pub model: &'static str,
    /// Demodulation the upstream collaborator must perform.
    pub timing: PulseTiming,
    /// Field names of the reported record.
    pub fields: &'static [&'static str],
}

/// The Quorum A-160 window/door sensor (model HS-103, FCC ID KHB-HS103-113).
///
/// Transmits around 433.7 MHz, only when the reed switch transitions from
/// closed to open.
pub const QUORUM_A160: Device = Device {
    name: "Quorum Window/Door Sensor",
    model: "Quorum A-160 Window/Door Sensor Model HS-103",
    timing: PulseTiming {
        short_us: NOMINAL_BIT_WIDTH_US,
        long_us: 3 * NOMINAL_BIT_WIDTH_US,
        reset_us: 32 * NOMINAL_BIT_WIDTH_US,
        gap_us: 5 * NOMINAL_BIT_WIDTH_US,
        tolerance_us: 0,
        leading_bits: 0,
    },
    fields: &["time", "model", "id"],
};
