use crate::RGB8;

/// Decode a packed `0xRRGGBB` color. Bits above 23 are ignored.
#[inline]
pub const fn unpack(packed: u32) -> RGB8 {
    RGB8 {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    }
}
