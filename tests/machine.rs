use mullion::capture::{Row, RowBuffer};
use mullion::machine::frame::{FIXED_FIELD, FixedFieldError, IdentifierError, SyncCheckError};
use mullion::machine::select::SelectRowError;
use mullion::machine::symbol::{DecodeSymbolsError, Symbol};
use mullion::machine::{Decoder, FRAME_BITS, IO_COUNT, MIN_REPEATS};

const REFERENCE_ROW: &str = "1010111011110000111111111";

fn capture(bits: &str, copies: usize) -> RowBuffer {
    let mut row = Row::new();
    for bit in bits.chars() {
        row.push(bit == '1');
    }

    let mut buffer = RowBuffer::new();
    for _ in 0..copies {
        buffer.push(row).unwrap();
    }
    buffer
}

#[test]
fn frame_constants() {
    assert_eq!(FRAME_BITS, 25);
    assert_eq!(IO_COUNT, 12);
    assert_eq!(MIN_REPEATS, 4);
    assert_eq!(FIXED_FIELD, 48);
}

#[test]
fn demodulate_line_code() {
    assert_eq!(Symbol::demodulate(0b11), Some(Symbol::Low));
    assert_eq!(Symbol::demodulate(0b00), Some(Symbol::High));
    assert_eq!(Symbol::demodulate(0b10), Some(Symbol::Floating));
    assert_eq!(Symbol::demodulate(0b01), None);
}

#[test]
fn drive_machine_by_hand() {
    let buffer = capture(REFERENCE_ROW, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();
    assert_eq!(image, [0xae, 0xf0, 0xff, 0x80]);

    let state = state.advance(image).unwrap();
    let (frame, state) = state.advance(image).unwrap();

    use Symbol::{Floating, High, Low};
    assert_eq!(frame.identifier, [Floating, Floating, Low, Floating, Low]);
    assert_eq!(frame.fixed, [Low, High, High, Low, Low, Low, Low]);

    let state = state.advance(frame.fixed).unwrap();
    let id = state.advance(frame.identifier).unwrap();
    assert_eq!(id, 20);
}

#[test]
fn select_requires_four_rows() {
    let buffer = capture(REFERENCE_ROW, 3);

    assert!(matches!(
        Decoder::advance(&buffer),
        Err(SelectRowError::Truncated)
    ));
}

#[test]
fn select_ignores_wrong_length_rows() {
    let buffer = capture(&REFERENCE_ROW[..24], 4);

    assert!(matches!(
        Decoder::advance(&buffer),
        Err(SelectRowError::NoRepeatedRow)
    ));
}

#[test]
fn sync_check_rejects_clear_marker() {
    let mut bits = REFERENCE_ROW.to_string();
    bits.replace_range(24..25, "0");
    let buffer = capture(&bits, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();

    assert!(matches!(
        state.advance(image),
        Err(SyncCheckError::Misaligned)
    ));
}

#[test]
fn symbols_reject_undefined_pair() {
    let mut bits = REFERENCE_ROW.to_string();
    bits.replace_range(6..8, "01");
    let buffer = capture(&bits, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();
    let state = state.advance(image).unwrap();

    assert!(matches!(
        state.advance(image),
        Err(DecodeSymbolsError::Undefined(3))
    ));
}

#[test]
fn fixed_field_rejects_other_values() {
    // Inverting the last fixed IO turns 0110000 into 0110001.
    let mut bits = REFERENCE_ROW.to_string();
    bits.replace_range(22..24, "00");
    let buffer = capture(&bits, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();
    let state = state.advance(image).unwrap();
    let (frame, state) = state.advance(image).unwrap();

    assert!(matches!(
        state.advance(frame.fixed),
        Err(FixedFieldError::Mismatch(0b0110001))
    ));
}

#[test]
fn fixed_field_rejects_floating_level() {
    let mut bits = REFERENCE_ROW.to_string();
    bits.replace_range(12..14, "10");
    let buffer = capture(&bits, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();
    let state = state.advance(image).unwrap();
    let (frame, state) = state.advance(image).unwrap();

    assert!(matches!(
        state.advance(frame.fixed),
        Err(FixedFieldError::Floating(1))
    ));
}

#[test]
fn identifier_rejects_driven_high_level() {
    let mut bits = REFERENCE_ROW.to_string();
    bits.replace_range(4..6, "00");
    let buffer = capture(&bits, 4);

    let (image, state) = Decoder::advance(&buffer).unwrap();
    let state = state.advance(image).unwrap();
    let (frame, state) = state.advance(image).unwrap();
    let state = state.advance(frame.fixed).unwrap();

    assert!(matches!(
        state.advance(frame.identifier),
        Err(IdentifierError::High(2))
    ));
}
