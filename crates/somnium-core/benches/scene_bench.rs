use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use somnium_core::{hash_seed, palette_for, shape_for, VisualizationScene};

fn bench_hash_seed(c: &mut Criterion) {
    c.bench_function("hash_seed", |b| {
        b.iter(|| hash_seed(black_box("a long dream element about dark water")))
    });
}

fn bench_shape_for(c: &mut Criterion) {
    let palette = palette_for("confusing");
    c.bench_function("shape_for", |b| {
        b.iter(|| shape_for(black_box("dark forest"), 1280, 720, palette))
    });
}

fn bench_scene_tick(c: &mut Criterion) {
    let elements: Vec<String> = ["water", "flying", "teeth", "mirror", "bridge"]
        .iter()
        .map(|e| e.to_string())
        .collect();
    let scene = VisualizationScene::new(&elements, Some("sad"), 1280, 720);

    c.bench_function("scene_tick", |b| {
        b.iter(|| scene.tick(black_box(1.5)))
    });
}

criterion_group!(benches, bench_hash_seed, bench_shape_for, bench_scene_tick);
criterion_main!(benches);
