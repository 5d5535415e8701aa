#![no_std]

//! A decoder for the Quorum A-160 wireless window/door sensor protocol.
//!
//! The A-160 (model HS-103) transmits on roughly 433.7 MHz when its reed
//! switch opens, repeating a 128-bit on-off-keyed packet at least four times.
//! After pulse-width demodulation each repetition arrives as a 25-bit row:
//! twelve 2-bit line-code pairs carrying the device's IO levels, then a
//! single trailing sync marker bit. This crate validates those rows and
//! extracts the 5-bit identifier set on the device's DIP switches.
//!
//! Most users should begin with [`decode::decode`], which drives one capture
//! window through the full pipeline and publishes a successful reading to a
//! [`decode::Report`] receiver. Applications needing finer control over
//! decoder internals (such as those running on embedded systems) can drive
//! the finite-state machine in the [`machine`] module directly.
//!
//! Sample acquisition and pulse-width demodulation are external
//! collaborators: an upstream demodulator fills a [`capture::RowBuffer`]
//! according to the timing contract declared in [`pulse`], and this crate
//! takes it from there.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `serde`: derive `Serialize` for readings.

pub mod capture;
pub mod decode;
pub mod machine;
pub mod pulse;
