use std::path::{Path, PathBuf};

use anyhow::Context;
use image as imagex; // external, for IO
use log::debug;

use super::Source;
use crate::image::*;

pub const RESIZE_FILTER: imagex::imageops::FilterType = imagex::imageops::FilterType::Lanczos3;

/// Decodes an image file, converts it to grey and stretches it to `size`.
/// The aspect ratio is not preserved. Resampled values are only as exact as
/// the `image` crate's Lanczos3 filter.
pub struct ImageFileSource {
    path: PathBuf,
    size: Size,
}

impl ImageFileSource {
    pub fn new(path: impl AsRef<Path>, size: Size) -> Self {
        assert!(size.width > 0 && size.height > 0, "invalid target size {}", size);
        ImageFileSource {
            path: path.as_ref().to_path_buf(),
            size,
        }
    }
}

impl Source for ImageFileSource {
    fn frame_size(&self) -> Size {
        self.size
    }

    fn get_frame(&mut self) -> anyhow::Result<ImageBuffer> {
        let t_start = std::time::Instant::now();
        let img_x = imagex::io::Reader::open(&self.path)
            .with_context(|| format!("Cannot open input image {}", self.path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Cannot read input image {}", self.path.display()))?
            .decode()
            .with_context(|| format!("Cannot decode image {}", self.path.display()))?;
        debug!(
            "Decoded {}: {}x{} {:?}",
            self.path.display(),
            img_x.width(),
            img_x.height(),
            img_x.color()
        );

        let grey_x = img_x.into_luma8();
        let resized_x = imagex::imageops::resize(
            &grey_x,
            self.size.width as u32,
            self.size.height as u32,
            RESIZE_FILTER,
        );
        debug!("Resized to {}, cost {:?}", self.size, t_start.elapsed());

        Ok(ImageBuffer::from_vec(
            ImageFormat::Mono8Bpp,
            resized_x.into_raw(),
            self.size.width,
            self.size.height,
        ))
    }
}
