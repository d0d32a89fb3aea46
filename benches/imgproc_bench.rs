use img2lvgl::image::{ConstImageView, ImageFormat};
use img2lvgl::imgproc::{self, MonoImgproc, MonoImgprocOptions};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bitpack_bench(c: &mut Criterion) {
    c.bench_function("Pack 1bpp, 1k*1k", |b| {
        let grey = vec![42u8; 1000 * 1000];
        let img = ConstImageView::new(ImageFormat::Mono8Bpp, grey.as_slice(), 1000, 1000, None);
        b.iter(|| black_box(imgproc::bitpack::pack_msb_first(&img, Some(128), |v| v <= 128)));
    });
    c.bench_function("Threshold and pack, 128*64", |b| {
        let grey: Vec<u8> = (0..128 * 64).map(|i| (i % 256) as u8).collect();
        let img = ConstImageView::new(ImageFormat::Mono8Bpp, grey.as_slice(), 128, 64, None);
        let mono_imgproc = MonoImgproc::new(MonoImgprocOptions::default());
        b.iter(|| black_box(mono_imgproc.process(&img)));
    });
}

criterion_group!(benches, bitpack_bench);
criterion_main!(benches);
