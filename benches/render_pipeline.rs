use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use escape_time_canvas::{
    EscapeTimeAlgorithm, FractalKind, HueCycleColourMap, RenderConfig, render_raster_parallel,
    render_raster_serial,
};
use std::hint::black_box;

fn bench_render_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline");
    group.sample_size(20);

    for kind in FractalKind::ALL.iter().copied() {
        let config = match RenderConfig::new(kind, 820, 540, 1.2) {
            Ok(config) => config,
            Err(err) => panic!("reference config rejected: {err}"),
        };
        let algorithm = EscapeTimeAlgorithm::new(&config);
        let colour_map = HueCycleColourMap::new(config.palette(), config.max_iterations());

        group.bench_with_input(BenchmarkId::new("serial", kind), &config, |b, config| {
            b.iter(|| {
                render_raster_serial(black_box(config.viewport()), &algorithm, &colour_map)
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", kind), &config, |b, config| {
            b.iter(|| {
                render_raster_parallel(black_box(config.viewport()), &algorithm, &colour_map)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
