use crate::image::*;

/// Pack an 8bpp grey image into 1bpp rows, 8 pixels per byte, leftmost pixel in the MSB.
/// Bits past the image width in the last byte of a row stay zero.
pub fn pack_msb_first<F>(image: &impl ConstImage, pitch: Option<i32>, is_set: F) -> ImageBuffer
where
    F: Fn(u8) -> bool,
{
    assert_eq!(image.format(), ImageFormat::Mono8Bpp, "Only 8bpp input can be packed");

    let mut packed = ImageBuffer::new(ImageFormat::Mono1Bpp, image.width(), image.height(), pitch);

    for y in 0..image.height() {
        let row = image.row(y);
        let packed_row = packed.mut_row(y);
        for (x, &grey) in row.iter().enumerate() {
            if is_set(grey) {
                packed_row[x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    packed
}
