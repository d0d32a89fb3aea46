use super::*;

pub const UNPACKED_SET: u8 = 0x00;
pub const UNPACKED_CLEAR: u8 = 0xff;

/// Expand a packed 1bpp bitmap (MSB first) into an 8bpp grey image.
/// Set bits become black, clear bits become white.
pub fn unpack_mono(image: &impl ConstImage) -> ImageBuffer {
    assert_eq!(image.format(), ImageFormat::Mono1Bpp);

    let mut unpacked = ImageBuffer::new(ImageFormat::Mono8Bpp, image.width(), image.height(), None);
    for y in 0..image.height() {
        let packed_row = image.row(y);
        let row = unpacked.mut_row(y);
        for (x, dst) in row.iter_mut().enumerate() {
            let bit = (packed_row[x / 8] >> (7 - x % 8)) & 0x1;
            *dst = if bit == 1 { UNPACKED_SET } else { UNPACKED_CLEAR };
        }
    }

    unpacked
}
