pub mod app;
pub mod image;
pub mod imgproc;
pub mod lvgl;
pub mod source;
