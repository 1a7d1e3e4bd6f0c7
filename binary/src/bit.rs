use bytemuck::{CheckedBitPattern, NoUninit};

/// The value of a single pixel in a binary image.
///
/// The representation is a single byte with exactly two permitted values, `0x00` for `Off` and
/// `0xff` for `On`. A slice of bits can thus be viewed as bytes for free, while the reverse
/// direction is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(CheckedBitPattern, NoUninit)]
#[repr(u8)]
pub enum Bit {
    #[default]
    Off = 0x00,
    On = 0xff,
}

impl Bit {
    /// The conventional name of `Off` when rendering.
    pub const BLACK: Self = Bit::Off;
    /// The conventional name of `On` when rendering.
    pub const WHITE: Self = Bit::On;

    /// The one other value.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Bit::Off => Bit::On,
            Bit::On => Bit::Off,
        }
    }

    /// The byte stored for this value.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Interpret a stored byte, if it is one of the two sentinels.
    pub fn from_byte(byte: u8) -> Option<Self> {
        bytemuck::checked::try_cast(byte).ok()
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Bit::On)
    }
}

impl From<bool> for Bit {
    fn from(on: bool) -> Self {
        if on {
            Bit::On
        } else {
            Bit::Off
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_on()
    }
}
