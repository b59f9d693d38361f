#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use criterion::Criterion;
use mandelbrot::MandelbrotRenderer;
use num::Complex;

fn bench_render(c: &mut Criterion) {
    let renderer = MandelbrotRenderer::new(
        320,
        240,
        Complex::new(-2.5, -1.25),
        Complex::new(1.0, 1.25),
        500,
    )
    .unwrap();
    let threads = num_cpus::get();
    c.bench_function("render 320x240x500 all cores", move |b| {
        b.iter(|| renderer.render(threads))
    });

    let renderer = MandelbrotRenderer::new(
        320,
        240,
        Complex::new(-2.5, -1.25),
        Complex::new(1.0, 1.25),
        500,
    )
    .unwrap();
    c.bench_function("render 320x240x500 single thread", move |b| {
        b.iter(|| renderer.render(1))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
