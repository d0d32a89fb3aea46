use clap::Parser;
use std::path::PathBuf;

use img2lvgl::app::{App, ConvertOptions, DEFAULT_NAME};

/// Convert an image into a 128x64 monochrome LVGL C header
#[derive(Parser, Debug)]
struct Args {
    /// Input image file (PNG, JPEG, ...)
    input: PathBuf,

    /// Output C header file [default: main/include/<NAME>.h]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Variable name used for the image symbols
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,

    /// Also save the thresholded bitmap as an image, for checking the result
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let options = ConvertOptions {
        input_path: args.input,
        output_path: args.output,
        name: args.name,
        preview_path: args.preview,
        working_dir: None,
    };
    let report = App::from_file(options).run()?;
    println!("{}", report);

    Ok(())
}
