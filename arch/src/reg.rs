use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Indexed addressing forms. Their codes sit above 0xF7 so they never collide
/// with a plain `%XX` register in the low range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Index {
    #[strum(to_string = "%IX")]
    Ix = 0xF8,
    #[strum(to_string = "%IY")]
    Iy = 0xF9,
    #[strum(to_string = "@IX")]
    IxInd = 0xFA,
    #[strum(to_string = "@IY")]
    IyInd = 0xFB,
    #[strum(to_string = "@IX+")]
    IxPostInc = 0xFC,
    #[strum(to_string = "@IY+")]
    IyPostInc = 0xFD,
    #[strum(to_string = "@-IX")]
    IxPreDec = 0xFE,
    #[strum(to_string = "@-IY")]
    IyPreDec = 0xFF,
}

impl Index {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(&self) -> u8 {
        (*self).into()
    }
}
