use std::fmt;

use crate::image::{ConstImage, ImageFormat, Size};

const BYTES_PER_LINE: usize = 16;

/// A packed 1bpp bitmap bound to a C symbol, rendered as an LVGL v8 header
/// through its `Display` impl.
///
/// The data array opens directly on the first line of literals and each full
/// line ends in `,` with no trailing space. Headers from the older Python
/// `convert_image.py` script had a blank line after `[] = {` and a trailing
/// `", "` on every full line. The C is equivalent, only a text diff differs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LvglImage {
    name: String,
    source_name: String,
    size: Size,
    data: Vec<u8>,
}

impl LvglImage {
    pub fn new(name: &str, source_name: &str, bitmap: &impl ConstImage) -> Self {
        assert_eq!(bitmap.format(), ImageFormat::Mono1Bpp);
        LvglImage {
            name: name.to_string(),
            source_name: source_name.to_string(),
            size: bitmap.size(),
            data: bitmap.to_continuous_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Prefix of the include guard and the size macros.
    pub fn macro_prefix(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Display for LvglImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let prefix = self.macro_prefix();
        let (w, h) = (self.size.width, self.size.height);

        writeln!(f, "/*")?;
        writeln!(f, " * Generated from {}", self.source_name)?;
        writeln!(f, " * Size: {}x{} pixels", w, h)?;
        writeln!(f, " * Format: Monochrome (1 bit per pixel)")?;
        writeln!(f, " */")?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}_H", prefix)?;
        writeln!(f, "#define {}_H", prefix)?;
        writeln!(f)?;
        writeln!(f, "#include \"lvgl.h\"")?;
        writeln!(f)?;
        writeln!(f, "#define {}_WIDTH {}", prefix, w)?;
        writeln!(f, "#define {}_HEIGHT {}", prefix, h)?;
        writeln!(f)?;
        writeln!(f, "/* Image data in LVGL format */")?;
        writeln!(f, "static const uint8_t {}_data[] = {{", name)?;
        let line_count = self.data.len().div_ceil(BYTES_PER_LINE);
        for (line_idx, line) in self.data.chunks(BYTES_PER_LINE).enumerate() {
            write!(f, "    ")?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "0x{:02X}", byte)?;
            }
            if line_idx + 1 < line_count {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "/* LVGL image descriptor for LVGL v8 */")?;
        writeln!(f, "static const lv_img_dsc_t {} = {{", name)?;
        writeln!(f, "    .header.cf = LV_IMG_CF_ALPHA_1BIT,")?;
        writeln!(f, "    .header.always_zero = 0,")?;
        writeln!(f, "    .header.reserved = 0,")?;
        writeln!(f, "    .header.w = {},", w)?;
        writeln!(f, "    .header.h = {},", h)?;
        writeln!(f, "    .data_size = {},", self.data.len())?;
        writeln!(f, "    .data = {}_data,", name)?;
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "/* Declare the image for external use */")?;
        writeln!(f, "LV_IMG_DECLARE({});", name)?;
        writeln!(f)?;
        writeln!(f, "#endif /* {}_H */", prefix)
    }
}

/// Whether `name` can be used as a C identifier as-is.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ConstImageView;

    fn small_image(name: &str, data: &[u8], width: i32, height: i32) -> LvglImage {
        let view = ConstImageView::new(ImageFormat::Mono1Bpp, data, width, height, None);
        LvglImage::new(name, "logo.png", &view)
    }

    #[test]
    fn test_render_small() {
        let img = small_image("logo", &[0x80, 0x0f], 16, 1);
        let expected = "\
/*
 * Generated from logo.png
 * Size: 16x1 pixels
 * Format: Monochrome (1 bit per pixel)
 */

#ifndef LOGO_H
#define LOGO_H

#include \"lvgl.h\"

#define LOGO_WIDTH 16
#define LOGO_HEIGHT 1

/* Image data in LVGL format */
static const uint8_t logo_data[] = {
    0x80, 0x0F
};

/* LVGL image descriptor for LVGL v8 */
static const lv_img_dsc_t logo = {
    .header.cf = LV_IMG_CF_ALPHA_1BIT,
    .header.always_zero = 0,
    .header.reserved = 0,
    .header.w = 16,
    .header.h = 1,
    .data_size = 2,
    .data = logo_data,
};

/* Declare the image for external use */
LV_IMG_DECLARE(logo);

#endif /* LOGO_H */
";
        assert_eq!(img.to_string(), expected);
    }

    #[test]
    fn test_sixteen_literals_per_line() {
        let data: Vec<u8> = (0..40).collect();
        let img = small_image("ramp", &data, 8, 40);
        let rendered = img.to_string();
        let lines: Vec<&str> = rendered
            .lines()
            .skip_while(|l| !l.starts_with("static const uint8_t"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches("0x").count(), 16);
        assert_eq!(lines[1].matches("0x").count(), 16);
        assert_eq!(lines[2].matches("0x").count(), 8);
        assert!(lines[0].starts_with("    0x00, 0x01,"));
        assert!(lines[0].ends_with("0x0F,"));
        assert!(lines[1].ends_with("0x1F,"));
        assert_eq!(lines[2], "    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27");
    }

    #[test]
    fn test_full_geometry_render() {
        let data = vec![0xabu8; 1024];
        let img = small_image("img_icon", &data, 128, 64);
        let rendered = img.to_string();
        assert_eq!(img.data_size(), 1024);
        assert_eq!(rendered.matches("0xAB").count(), 1024);
        assert!(rendered.contains("#ifndef IMG_ICON_H\n#define IMG_ICON_H\n"));
        assert!(rendered.contains("#define IMG_ICON_WIDTH 128\n#define IMG_ICON_HEIGHT 64\n"));
        assert!(rendered.contains("static const uint8_t img_icon_data[] = {\n"));
        assert!(rendered.contains("    .data_size = 1024,\n"));
        assert!(rendered.contains("LV_IMG_DECLARE(img_icon);"));
        assert!(rendered.ends_with("#endif /* IMG_ICON_H */\n"));
        assert!(!rendered.contains("0xAB\n    "), "only the last literal may lack a comma");
        assert!(rendered.contains("0xAB\n};"));
        assert_eq!(rendered.matches('{').count(), rendered.matches('}').count());
    }

    #[test]
    fn test_padded_bitmap_flattened() {
        let data: Vec<u8> = vec![0x01, 0xee, 0x02, 0xee];
        let view = ConstImageView::new(ImageFormat::Mono1Bpp, data.as_slice(), 8, 2, Some(2));
        let img = LvglImage::new("pad", "pad.png", &view);
        assert_eq!(img.data(), &[0x01, 0x02]);
    }

    #[test]
    fn test_c_identifier() {
        assert!(is_c_identifier("img_icon"));
        assert!(is_c_identifier("_x9"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("9lives"));
        assert!(!is_c_identifier("my-icon"));
        assert!(!is_c_identifier("ïcon"));
    }
}
