use crate::image::{ImageBuffer, Size};

mod file;

// Source that produces fixed-size grey (8bpp) images.
// Decoding, grey conversion and resampling all live behind this trait, so the
// packing stage never depends on the imaging library.
pub trait Source {
    fn frame_size(&self) -> Size;
    fn get_frame(&mut self) -> anyhow::Result<ImageBuffer>;
}

pub use file::ImageFileSource;
