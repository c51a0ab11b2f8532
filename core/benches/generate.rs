use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use picross_core::{ColorMatch, PuzzleGenerator, RgbaImage};

/// Checkerboard-ish image where roughly a third of the pixels are transparent.
fn image_data(width: u32, height: u32) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let alpha = if (x * 7 + y * 3) % 3 == 0 { 0 } else { 255 };
            [(x % 256) as u8, (y % 256) as u8, 128, alpha]
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let color_match = ColorMatch::default();
    let mut group = c.benchmark_group("generate");

    for side in [10u32, 25, 50] {
        let data = image_data(side, side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &data, |b, data| {
            b.iter(|| {
                let image = RgbaImage::new(side, side, data).unwrap();
                black_box(image.generate(black_box(&color_match)).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
