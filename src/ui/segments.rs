//! Raw segment encodings for a 4-digit, 7-segment display.
//!
//! Each cell is one byte:
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---
//!      D    .DP
//!
//! Bit 0 = A, 1 = B, 2 = C, 3 = D, 4 = E, 5 = F, 6 = G, 7 = DP/colon
//! ```
//! Letters are approximations; a 7-segment cell cannot draw a true R or Y.

/// Number of cells on the display.
pub const CELLS: usize = 4;

/// One complete display image, leftmost cell first.
pub type Frame = [u8; CELLS];

pub const SEG_A: u8 = 0b0000_0001;
pub const SEG_B: u8 = 0b0000_0010;
pub const SEG_C: u8 = 0b0000_0100;
pub const SEG_D: u8 = 0b0000_1000;
pub const SEG_E: u8 = 0b0001_0000;
pub const SEG_F: u8 = 0b0010_0000;
pub const SEG_G: u8 = 0b0100_0000;

/// Decimal digits 0-9.
pub const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_B | SEG_C | SEG_F | SEG_G,                         // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,                 // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

const BLANK: u8 = 0;
const LOWER_R: u8 = SEG_E | SEG_G;
const LOWER_D: u8 = SEG_B | SEG_C | SEG_D | SEG_E | SEG_G;
const UPPER_Y: u8 = SEG_B | SEG_C | SEG_D | SEG_F | SEG_G;
const UPPER_E: u8 = SEG_A | SEG_D | SEG_E | SEG_F | SEG_G;
const UPPER_C: u8 = SEG_A | SEG_D | SEG_E | SEG_F;
const DASH: u8 = SEG_G;

/// Named screens the display can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// All segments off.
    Blank,
    /// "rdY " - back to idle after the host's DONE.
    Ready,
    /// "rEC " - recording in progress.
    Recording,
    /// "----" - stopped, waiting for the host.
    Waiting,
}

/// View → frame table, indexed by `View as usize`.
const FRAMES: [Frame; 4] = [
    [BLANK, BLANK, BLANK, BLANK],
    [LOWER_R, LOWER_D, UPPER_Y, BLANK],
    [LOWER_R, UPPER_E, UPPER_C, BLANK],
    [DASH, DASH, DASH, DASH],
];

impl View {
    /// The literal frame for this view.
    pub const fn frame(self) -> Frame {
        FRAMES[self as usize]
    }
}

/// Encode `value` as four decimal cells.
///
/// Values above 9999 keep their last four digits. Without
/// `leading_zeros`, zeros to the left of the first significant digit are
/// blanked, but the rightmost cell always shows a digit.
pub fn number_frame(value: u16, leading_zeros: bool) -> Frame {
    let mut frame = [BLANK; CELLS];
    let mut rest = value % 10_000;
    for (i, cell) in frame.iter_mut().enumerate().rev() {
        let digit = (rest % 10) as usize;
        let significant = rest > 0 || i == CELLS - 1;
        if leading_zeros || significant {
            *cell = DIGITS[digit];
        }
        rest /= 10;
    }
    frame
}
