#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for full-frame scene composition.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aldea::animation::SceneState;
use aldea::framebuffer::Framebuffer;
use aldea::scene::VillageScene;

fn frame_composition_benchmark(c: &mut Criterion) {
    let scene = VillageScene::new();
    let state = SceneState::new();
    let mut fb = Framebuffer::new(scene.width(), scene.height())
        .expect("framebuffer creation should succeed");

    c.bench_function("compose_frame", |b| {
        b.iter(|| {
            scene
                .render(black_box(&state), &mut fb)
                .expect("frame composition should succeed");
        });
    });
}

fn animated_sequence_benchmark(c: &mut Criterion) {
    let scene = VillageScene::new();
    let mut fb = Framebuffer::new(scene.width(), scene.height())
        .expect("framebuffer creation should succeed");

    c.bench_function("tick_and_compose_60_frames", |b| {
        b.iter(|| {
            let mut state = SceneState::new();
            for _ in 0..60 {
                state.tick(scene.width() as f32);
                scene
                    .render(&state, &mut fb)
                    .expect("frame composition should succeed");
            }
        });
    });
}

criterion_group!(benches, frame_composition_benchmark, animated_sequence_benchmark);
criterion_main!(benches);
