use criterion::{criterion_group, criterion_main, Criterion};
use fractal_canvas::{
    render_serial, render_tiled, Canvas, ColorizerKind, KernelKind, RenderJob, Viewport,
};

const SIZE: u32 = 256;
const MAX_ITERATIONS: u32 = 64;

fn mandelbrot_job(workers: u32) -> RenderJob {
    RenderJob::new(
        KernelKind::Mandelbrot,
        ColorizerKind::Greyscale,
        MAX_ITERATIONS,
        Viewport::identity(),
        SIZE,
        SIZE,
        workers,
    )
    .unwrap()
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    let serial_job = mandelbrot_job(1);
    group.bench_function("serial_mandelbrot_256", |b| {
        let mut canvas = Canvas::new(SIZE, SIZE).unwrap();
        b.iter(|| render_serial(&serial_job, &mut canvas).unwrap());
    });

    for workers in [2, 4, 8] {
        let job = mandelbrot_job(workers);
        group.bench_function(format!("tiled_mandelbrot_256_w{}", workers), |b| {
            let mut canvas = Canvas::new(SIZE, SIZE).unwrap();
            b.iter(|| render_tiled(&job, &mut canvas).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pass);
criterion_main!(benches);
