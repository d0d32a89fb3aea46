/// Splits grey levels into foreground (dark, set bit) and background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    level: u8,
}

impl Threshold {
    /// `level` itself is still foreground.
    pub(crate) const fn new(level: u8) -> Self {
        Threshold { level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_foreground(&self, grey: u8) -> bool {
        grey <= self.level
    }
}

pub const LVGL_THRESHOLD: Threshold = Threshold::new(128);
