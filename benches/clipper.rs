use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use line_clipper::clipper::{clip, ClipRect, Segment};

fn demo_rect() -> ClipRect {
    ClipRect::new(-200.0, -100.0, 200.0, 100.0).unwrap()
}

fn benchmark_single_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_segment");
    let rect = demo_rect();

    for (name, segment) in [
        ("accepted", Segment::from_coords(0.0, 0.0, 50.0, 50.0)),
        ("rejected", Segment::from_coords(300.0, 300.0, 400.0, 400.0)),
        ("partial_one_side", Segment::from_coords(-300.0, -50.0, 0.0, 0.0)),
        ("partial_both_sides", Segment::from_coords(-300.0, 0.0, 300.0, 0.0)),
        ("corner_miss", Segment::from_coords(-150.0, 400.0, -500.0, 50.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("clip", name), &segment, |b, seg| {
            b.iter(|| clip(black_box(*seg), black_box(&rect)));
        });
    }

    group.finish();
}

fn benchmark_many_segments(c: &mut Criterion) {
    let rect = demo_rect();

    // A fan of segments through and around the rectangle
    let segments: Vec<Segment> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0 - 400.0;
                let y = row as f32 * 30.0 - 300.0;
                Segment::from_coords(x, y, -x * 0.5, 250.0 - y)
            })
        })
        .collect();

    c.bench_function("clip_400_segments", |b| {
        b.iter(|| {
            for seg in &segments {
                black_box(clip(black_box(*seg), &rect));
            }
        });
    });
}

criterion_group!(benches, benchmark_single_segment, benchmark_many_segments);
criterion_main!(benches);
