use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image as imagex; // external, for IO
use log::{debug, info, warn};

use super::image::{convert, ConstImage, ConstImageView, ImageFormat, Size};
use super::imgproc::{MonoImgproc, MonoImgprocOptions};
use super::lvgl::{self, LvglImage};
use super::source::{ImageFileSource, Source};

pub const DEFAULT_NAME: &str = "img_icon";
pub const DEFAULT_OUTPUT_DIR: &str = "main/include";

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub name: String,
    /// Also save the thresholded bitmap as a black/white image here.
    pub preview_path: Option<PathBuf>,
    /// Base of the default output path. The process working directory when unset.
    pub working_dir: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        ConvertOptions {
            input_path: input_path.into(),
            output_path: None,
            name: DEFAULT_NAME.to_string(),
            preview_path: None,
            working_dir: None,
        }
    }

    /// `main/include/<name>.h` unless an output path was given.
    pub fn resolved_output_path(&self) -> PathBuf {
        if let Some(p) = &self.output_path {
            return p.clone();
        }
        let default_dir = match &self.working_dir {
            Some(base) => base.join(DEFAULT_OUTPUT_DIR),
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };
        default_dir.join(format!("{}.h", self.name))
    }

    fn source_name(&self) -> String {
        self.input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.to_string_lossy().into_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub size: Size,
    pub data_size: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Converted {} -> {}", self.input_path.display(), self.output_path.display())?;
        write!(f, "Image size: {}, Data size: {} bytes", self.size, self.data_size)
    }
}

pub struct App<S> {
    source: S,
    options: ConvertOptions,
    mono_imgproc: MonoImgproc,
}

impl App<ImageFileSource> {
    pub fn from_file(options: ConvertOptions) -> Self {
        let imgproc_options = MonoImgprocOptions::default();
        let source = ImageFileSource::new(&options.input_path, imgproc_options.image_size);
        App::new(source, options)
    }
}

impl<S: Source> App<S> {
    pub fn new(source: S, options: ConvertOptions) -> Self {
        let mono_imgproc = MonoImgproc::new(MonoImgprocOptions {
            image_size: source.frame_size(),
            ..Default::default()
        });
        App {
            source,
            options,
            mono_imgproc,
        }
    }

    /// Decode, pack and render. Nothing is written to the filesystem.
    pub fn render(&mut self) -> anyhow::Result<LvglImage> {
        if !lvgl::is_c_identifier(&self.options.name) {
            warn!(
                "Name {:?} is not a valid C identifier, the generated header will not compile",
                self.options.name
            );
        }

        let t_start = std::time::Instant::now();
        let grey_img = self.source.get_frame()?;
        let t_got_frame = std::time::Instant::now();

        let bitmap = self.mono_imgproc.process(&grey_img);
        let t_imgproc = std::time::Instant::now();

        let lvgl_image = LvglImage::new(&self.options.name, &self.options.source_name(), &bitmap);
        debug!(
            "Rendered {}. Cost: get frame: {:?}, imgproc: {:?}",
            lvgl_image.name(),
            t_got_frame - t_start,
            t_imgproc - t_got_frame
        );
        Ok(lvgl_image)
    }

    pub fn run(&mut self) -> anyhow::Result<ConversionReport> {
        let lvgl_image = self.render()?;
        let output_path = self.options.resolved_output_path();

        write_atomically(&output_path, lvgl_image.to_string().as_bytes())?;
        info!("Wrote {} ({} bytes of image data)", output_path.display(), lvgl_image.data_size());

        if let Some(preview_path) = &self.options.preview_path {
            let size = lvgl_image.size();
            let bitmap = ConstImageView::new(
                ImageFormat::Mono1Bpp,
                lvgl_image.data(),
                size.width,
                size.height,
                None,
            );
            save_preview(&bitmap, preview_path)?;
        }

        Ok(ConversionReport {
            input_path: self.options.input_path.clone(),
            output_path,
            size: lvgl_image.size(),
            data_size: lvgl_image.data_size(),
        })
    }
}

fn save_preview(bitmap: &impl ConstImage, path: &Path) -> anyhow::Result<()> {
    let unpacked = convert::unpack_mono(bitmap);
    let (width, height) = (unpacked.width() as u32, unpacked.height() as u32);
    let preview_x = imagex::GrayImage::from_raw(width, height, unpacked.into_vec())
        .context("Preview buffer does not match its size")?;
    create_parent_dir(path)?;
    preview_x
        .save(path)
        .with_context(|| format!("Cannot write preview {}", path.display()))?;
    info!("Wrote preview {}", path.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Write through a sibling temporary file and rename it into place, so a
/// failed write never leaves a truncated file at `path`.
pub fn write_atomically(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    create_parent_dir(path)?;

    let file_name = path
        .file_name()
        .with_context(|| format!("Output path {} has no file name", path.display()))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = (|| -> std::io::Result<()> {
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, path)
    })();
    if let Err(err) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("Cannot write {}", path.display()));
    }
    Ok(())
}
