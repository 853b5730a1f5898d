//! Benchmarks for keyframe sampling and full-pose evaluation.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};

use marrow::animation::tracks::KeyframeTrack;
use marrow::{Animation, Animator, BoneRegistry, ChannelSource, ClipSource, SourceNode};

const BONE_COUNT: usize = 64;
const KEY_COUNT: usize = 32;
const DURATION_TICKS: f32 = 48.0;

fn keyed_channel(name: &str, seed: f32) -> ChannelSource {
    let times: Vec<f32> = (0..KEY_COUNT)
        .map(|i| DURATION_TICKS * i as f32 / (KEY_COUNT - 1) as f32)
        .collect();
    let translations: Vec<Vec3> = (0..KEY_COUNT)
        .map(|i| Vec3::new(seed + i as f32 * 0.1, seed * 0.5, 0.0))
        .collect();
    let rotations: Vec<Quat> = (0..KEY_COUNT)
        .map(|i| Quat::from_rotation_y(seed * 0.01 + i as f32 * 0.05))
        .collect();

    ChannelSource {
        node_name: name.to_string(),
        translations: KeyframeTrack::new(times.clone(), translations),
        rotations: KeyframeTrack::new(times, rotations),
        scales: KeyframeTrack::new(vec![0.0], vec![Vec3::ONE]),
    }
}

/// A single chain of `BONE_COUNT` bones, every node animated. Built leaf-up.
fn chain_clip(registry: &mut BoneRegistry) -> Arc<Animation> {
    let mut root = SourceNode {
        name: format!("bone_{}", BONE_COUNT - 1),
        transform: Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)),
        children: Vec::new(),
    };
    for i in (0..BONE_COUNT - 1).rev() {
        root = SourceNode {
            name: format!("bone_{i}"),
            transform: if i == 0 {
                Mat4::IDENTITY
            } else {
                Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))
            },
            children: vec![root],
        };
    }

    let channels = (0..BONE_COUNT)
        .map(|i| keyed_channel(&format!("bone_{i}"), i as f32))
        .collect();

    let source = ClipSource {
        name: "bench".to_string(),
        duration_ticks: DURATION_TICKS,
        ticks_per_second: 24.0,
        channels,
        root: Some(root),
    };
    Arc::new(Animation::load(source, registry).expect("bench clip loads"))
}

fn bench_track_sample(c: &mut Criterion) {
    let channel = keyed_channel("probe", 1.0);

    c.bench_function("track_sample_vec3", |b| {
        let mut time = 0.0_f32;
        b.iter(|| {
            time = (time + 0.7) % DURATION_TICKS;
            black_box(channel.translations.sample(black_box(time)))
        });
    });

    c.bench_function("track_sample_quat", |b| {
        let mut time = 0.0_f32;
        b.iter(|| {
            time = (time + 0.7) % DURATION_TICKS;
            black_box(channel.rotations.sample(black_box(time)))
        });
    });
}

fn bench_pose_evaluation(c: &mut Criterion) {
    let mut registry = BoneRegistry::new();
    let clip = chain_clip(&mut registry);

    c.bench_function("bone_local_transform", |b| {
        let bone = &clip.bones()[BONE_COUNT / 2];
        let mut time = 0.0_f32;
        b.iter(|| {
            time = (time + 0.7) % DURATION_TICKS;
            black_box(bone.local_transform(black_box(time)))
        });
    });

    c.bench_function("animator_update_64_bones", |b| {
        let mut animator = Animator::with_animation(clip.clone());
        b.iter(|| {
            animator.update(black_box(1.0 / 60.0));
            black_box(animator.final_bone_matrices().len())
        });
    });
}

criterion_group!(benches, bench_track_sample, bench_pose_evaluation);
criterion_main!(benches);
