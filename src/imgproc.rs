pub mod bitpack;
pub mod threshold;

use log::debug;

use crate::image::{ConstImage, ImageBuffer, ImageFormat, Size};
use threshold::Threshold;

/// Geometry of the LVGL monochrome asset. Inputs are stretched to it.
pub const TARGET_SIZE: Size = Size {
    width: 128,
    height: 64,
};

#[derive(Clone, Copy, Debug)]
pub struct MonoImgprocOptions {
    pub image_size: Size,
    // fixed at LVGL_THRESHOLD
    pub(crate) threshold: Threshold,
}

impl Default for MonoImgprocOptions {
    fn default() -> Self {
        MonoImgprocOptions {
            image_size: TARGET_SIZE,
            threshold: threshold::LVGL_THRESHOLD,
        }
    }
}

/// Grey to 1bpp stage. Bit-exact, independent of decoding and resampling.
pub struct MonoImgproc {
    options: MonoImgprocOptions,
}

impl MonoImgproc {
    pub fn new(options: MonoImgprocOptions) -> Self {
        MonoImgproc { options }
    }

    /// Returns a continuous 1bpp bitmap, `height * ceil(width / 8)` bytes long.
    pub fn process(&self, input_grey_img: &impl ConstImage) -> ImageBuffer {
        assert_eq!(input_grey_img.format(), ImageFormat::Mono8Bpp);
        assert_eq!(
            input_grey_img.size(),
            self.options.image_size,
            "input must already be resized"
        );

        let threshold = self.options.threshold;
        let t_start = std::time::Instant::now();
        let packed = bitpack::pack_msb_first(input_grey_img, None, |v| threshold.is_foreground(v));
        debug!(
            "Packed {} grey image into {} bytes, threshold {}, cost {:?}",
            input_grey_img.size(),
            packed.data().len(),
            threshold.level(),
            t_start.elapsed()
        );

        packed
    }
}
