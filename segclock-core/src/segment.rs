//! Seven-segment encoding
//!
//! Segment bytes are active-low: a cleared bit lights its segment.
//! The most significant bit carries the decimal point segment.

/// Segment patterns for the digits 0-9
pub const SEGMENT_MAP: [u8; 10] = [0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x82, 0xF8, 0x80, 0x90];

/// All segments off
pub const BLANK_SEGMENTS: u8 = 0xFF;

/// Mask that clears the decimal point bit
pub const DECIMAL_POINT_MASK: u8 = 0x7F;

/// Content of one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// A decimal digit; values above 9 render as blank
    Value(u8),
    /// Nothing lit
    #[default]
    Blank,
}

impl Digit {
    /// Map 0-9 to a digit and anything else to blank
    pub const fn from_value(value: u8) -> Self {
        if value <= 9 {
            Digit::Value(value)
        } else {
            Digit::Blank
        }
    }

    /// Numeric value, if this digit is renderable
    pub const fn value(&self) -> Option<u8> {
        match *self {
            Digit::Value(v) if v <= 9 => Some(v),
            _ => None,
        }
    }

    /// ASCII character for log output (space when blank)
    pub const fn as_char(&self) -> char {
        match self.value() {
            Some(v) => (b'0' + v) as char,
            None => ' ',
        }
    }
}

/// Encode a digit into its segment byte
pub const fn encode(digit: Digit, decimal_point: bool) -> u8 {
    let segments = match digit.value() {
        Some(v) => SEGMENT_MAP[v as usize],
        None => BLANK_SEGMENTS,
    };

    if decimal_point {
        segments & DECIMAL_POINT_MASK
    } else {
        segments
    }
}
