//! Four digits plus decimal points for one refresh frame

use heapless::String;

use crate::config::DIGIT_COUNT;
use crate::segment::{self, Digit};

/// Contents of one frame, derived fresh on every refresh pass
///
/// Two decimal points exist on the shield layout:
/// - `dp_after_0`: the voltage point, "3.30"
/// - `dp_after_1`: the minutes/seconds separator, "02.05"
///
/// The separator is carried by the second digit's segment byte, so it
/// lights up between the minute and second pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitQuad {
    /// Digits from left to right
    pub digits: [Digit; DIGIT_COUNT],
    /// Decimal point lit on the first digit
    pub dp_after_0: bool,
    /// Decimal point lit on the second digit
    pub dp_after_1: bool,
}

impl DigitQuad {
    /// A frame with nothing lit
    pub const BLANK: Self = Self {
        digits: [Digit::Blank; DIGIT_COUNT],
        dp_after_0: false,
        dp_after_1: false,
    };

    /// Check if the decimal point of a position is lit
    ///
    /// The last two positions never carry a point.
    pub fn decimal_point(&self, pos: usize) -> bool {
        match pos {
            0 => self.dp_after_0,
            1 => self.dp_after_1,
            _ => false,
        }
    }

    /// Segment byte for a position, blank when out of range
    pub fn segment_byte(&self, pos: usize) -> u8 {
        match self.digits.get(pos) {
            Some(&digit) => segment::encode(digit, self.decimal_point(pos)),
            None => segment::BLANK_SEGMENTS,
        }
    }

    /// Segment bytes for every position, left to right
    pub fn segment_bytes(&self) -> [u8; DIGIT_COUNT] {
        core::array::from_fn(|pos| self.segment_byte(pos))
    }

    /// Human-readable frame text, e.g. "02.05" or "3.30 "
    ///
    /// Blank digits render as spaces and a lit point follows its digit.
    pub fn render(&self) -> String<8> {
        let mut text = String::new();
        for (pos, digit) in self.digits.iter().enumerate() {
            // Capacity covers four digits and four points
            let _ = text.push(digit.as_char());
            if self.decimal_point(pos) {
                let _ = text.push('.');
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(digits: [u8; 4], dp_after_0: bool, dp_after_1: bool) -> DigitQuad {
        DigitQuad {
            digits: digits.map(Digit::from_value),
            dp_after_0,
            dp_after_1,
        }
    }

    #[test]
    fn test_render_time() {
        let q = quad([0, 2, 0, 5], false, true);
        assert_eq!(q.render().as_str(), "02.05");
    }

    #[test]
    fn test_render_voltage() {
        let q = quad([3, 3, 0, 10], true, false);
        assert_eq!(q.render().as_str(), "3.30 ");
    }

    #[test]
    fn test_render_blank() {
        assert_eq!(DigitQuad::BLANK.render().as_str(), "    ");
        assert_eq!(DigitQuad::default(), DigitQuad::BLANK);
    }

    #[test]
    fn test_decimal_points() {
        let q = quad([1, 2, 3, 4], true, true);
        assert!(q.decimal_point(0));
        assert!(q.decimal_point(1));
        assert!(!q.decimal_point(2));
        assert!(!q.decimal_point(3));
        assert!(!q.decimal_point(4));
    }

    #[test]
    fn test_segment_bytes() {
        let q = quad([0, 2, 0, 5], false, true);
        assert_eq!(q.segment_bytes(), [0xC0, 0xA4 & 0x7F, 0xC0, 0x92]);

        let q = quad([3, 3, 0, 10], true, false);
        assert_eq!(q.segment_bytes(), [0xB0 & 0x7F, 0xB0, 0xC0, 0xFF]);
    }

    #[test]
    fn test_segment_byte_out_of_range() {
        assert_eq!(DigitQuad::BLANK.segment_byte(7), 0xFF);
    }
}
