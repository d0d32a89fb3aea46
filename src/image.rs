#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Mono1Bpp, // mono, 1 bit per pixel, MSB is the leftmost pixel
    Mono8Bpp, // grey, 8 bits per pixel
}

impl ImageFormat {
    pub fn bpp(&self) -> i32 {
        match self {
            Self::Mono1Bpp => 1,
            Self::Mono8Bpp => 8,
        }
    }
}

pub fn minimum_pitch(bpp: i32, width: i32) -> i32 {
    (width * bpp + 7) / 8
}

#[derive(Clone, Copy, Debug)]
pub struct ImageHeader {
    format: ImageFormat,
    width: i32,
    pitch: i32,
    height: i32,
}

impl ImageHeader {
    pub fn new(format: ImageFormat, data_len: usize, width: i32, height: i32, pitch: Option<i32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        assert!(
            pitch >= minimum_pitch,
            "invalid pitch {} for width {} with format {:?}",
            pitch,
            width,
            format
        );
        assert!(
            width > 0 && height > 0,
            "invalid width {} and height {}",
            width,
            height
        );
        assert!(
            data_len >= (height * pitch) as usize,
            "invalid data len {} for height {} and pitch {}",
            data_len,
            height,
            pitch
        );
        ImageHeader {
            format,
            width,
            pitch,
            height,
        }
    }
}

pub trait HasImageHeader {
    fn header(&self) -> ImageHeader;
}

pub trait ConstImage: HasImageHeader {
    fn data(&self) -> &[u8];

    fn bpp(&self) -> i32 {
        self.header().format.bpp()
    }
    fn format(&self) -> ImageFormat {
        self.header().format
    }
    fn width(&self) -> i32 {
        self.header().width
    }
    fn height(&self) -> i32 {
        self.header().height
    }
    fn pitch(&self) -> i32 {
        self.header().pitch
    }
    fn is_continuous(&self) -> bool {
        self.pitch() == minimum_pitch(self.bpp(), self.width())
    }
    fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }
    /// Bytes of one row, without the padding past the minimum pitch.
    fn row(&self, y: i32) -> &[u8] {
        assert!(y >= 0 && y < self.height(), "row {} out of range", y);
        let start = (y * self.pitch()) as usize;
        let len = minimum_pitch(self.bpp(), self.width()) as usize;
        &self.data()[start..start + len]
    }
    /// All rows concatenated, i.e. the data with any pitch padding stripped.
    fn to_continuous_vec(&self) -> Vec<u8> {
        (0..self.height()).flat_map(|y| self.row(y).iter().copied()).collect()
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u8];

    fn mut_row(&mut self, y: i32) -> &mut [u8] {
        assert!(y >= 0 && y < self.height(), "row {} out of range", y);
        let start = (y * self.pitch()) as usize;
        let len = minimum_pitch(self.bpp(), self.width()) as usize;
        &mut self.mut_data()[start..start + len]
    }

    fn fill(&mut self, val: u8) {
        self.mut_data().fill(val);
    }
}

#[derive(Debug)]
pub struct ConstImageView<'a> {
    header: ImageHeader,
    data: &'a [u8],
}

impl<'a> ConstImageView<'a> {
    pub fn new(format: ImageFormat, data: &'a [u8], width: i32, height: i32, pitch: Option<i32>) -> Self {
        let header = ImageHeader::new(format, data.len(), width, height, pitch);
        ConstImageView { header, data }
    }
}

impl<'a> HasImageHeader for ConstImageView<'a> {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl<'a> ConstImage for ConstImageView<'a> {
    fn data(&self) -> &[u8] {
        self.data
    }
}

#[derive(Debug)]
pub struct ImageBuffer {
    data: Vec<u8>,
    header: ImageHeader,
}

impl ImageBuffer {
    pub fn new(format: ImageFormat, width: i32, height: i32, pitch: Option<i32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        let data = vec![0; (pitch * height) as usize];
        let header = ImageHeader::new(format, data.len(), width, height, Some(pitch));
        Self { data, header }
    }

    /// Takes ownership of continuous (unpadded) pixel data.
    pub fn from_vec(format: ImageFormat, data: Vec<u8>, width: i32, height: i32) -> Self {
        let header = ImageHeader::new(format, data.len(), width, height, None);
        Self { data, header }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl HasImageHeader for ImageBuffer {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

pub mod convert;
