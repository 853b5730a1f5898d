use std::sync::Arc;

use glam::Mat4;

use crate::animation::clip::Animation;
use crate::animation::hierarchy::{NodeIndex, SkeletonHierarchy};

/// Per-instance playback state: the bound clip, the playback clock, and the
/// final bone matrix palette consumed by the skinning shader.
///
/// [`update`](Self::update) advances the clock in clip ticks, wraps it
/// modulo the clip duration, and walks the hierarchy to rewrite the palette
/// in place. Palette entries whose bones are not visited by a frame's walk
/// keep their last-written value; callers must not assume entries reset
/// between frames.
///
/// Single-threaded: the renderer reads
/// [`final_bone_matrices`](Self::final_bone_matrices) after `update` returns
/// for the frame, with no synchronization in between.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    current: Option<Arc<Animation>>,
    current_time_ticks: f32,
    final_bone_matrices: Vec<Mat4>,
    paused: bool,
}

impl Animator {
    /// An animator with no clip bound. [`update`](Self::update) is a no-op
    /// until [`set_animation`](Self::set_animation) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_animation(animation: Arc<Animation>) -> Self {
        let mut animator = Self::new();
        animator.set_animation(animation);
        animator
    }

    /// Binds a clip and restarts playback from tick 0.
    ///
    /// The palette is sized to the clip's registered bone count, established
    /// once here and reused every frame without reallocation. Rebinding to a
    /// clip over the same skeleton keeps existing entries until the next
    /// update overwrites them.
    pub fn set_animation(&mut self, animation: Arc<Animation>) {
        self.final_bone_matrices
            .resize(animation.bone_count(), Mat4::IDENTITY);
        self.current = Some(animation);
        self.current_time_ticks = 0.0;
    }

    /// Unbinds the current clip. The palette keeps its last-written pose.
    pub fn clear_animation(&mut self) {
        self.current = None;
        self.current_time_ticks = 0.0;
    }

    /// Advances playback by `dt` seconds and recomputes the palette.
    ///
    /// No-op when no clip is bound, playback is paused, or the clip has a
    /// non-positive duration.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        let Some(animation) = self.current.clone() else {
            return;
        };
        let duration = animation.duration_ticks();
        if duration <= 0.0 {
            return;
        }

        self.current_time_ticks += animation.ticks_per_second() * dt;
        self.current_time_ticks = self.current_time_ticks.rem_euclid(duration);

        self.calculate_bone_transform(&animation, SkeletonHierarchy::ROOT, Mat4::IDENTITY);
    }

    /// Recursive hierarchy walk accumulating global transforms.
    ///
    /// Animated nodes override their bind pose with the interpolated bone
    /// transform; static nodes pass their bind transform through. A node
    /// with a bone table entry writes `global * offset` into its palette
    /// slot; nodes without one (attachment points, group nodes) are
    /// legitimately skipped.
    fn calculate_bone_transform(
        &mut self,
        animation: &Animation,
        node_index: NodeIndex,
        parent_transform: Mat4,
    ) {
        let node = animation.hierarchy().node(node_index);

        let local = match animation.find_bone(node.name()) {
            Some(bone) => bone.local_transform(self.current_time_ticks),
            None => node.bind_local_transform(),
        };
        let global = parent_transform * local;

        if let Some(info) = animation.bone_info().get(node.name()) {
            // Ids are dense in the snapshot the palette was sized from.
            self.final_bone_matrices[info.id] = global * info.offset;
        }

        for &child in node.children() {
            self.calculate_bone_transform(animation, child, global);
        }
    }

    /// The skinning palette, one matrix per registered bone, ready for
    /// upload as a shader uniform array.
    #[inline]
    #[must_use]
    pub fn final_bone_matrices(&self) -> &[Mat4] {
        &self.final_bone_matrices
    }

    #[inline]
    #[must_use]
    pub fn has_animation(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    #[must_use]
    pub fn animation(&self) -> Option<&Arc<Animation>> {
        self.current.as_ref()
    }

    /// Playback position in clip ticks, always within `[0, duration)`.
    #[inline]
    #[must_use]
    pub fn current_time_ticks(&self) -> f32 {
        self.current_time_ticks
    }

    /// Duration of the bound clip in ticks, if one is bound.
    #[inline]
    #[must_use]
    pub fn duration_ticks(&self) -> Option<f32> {
        self.current.as_deref().map(Animation::duration_ticks)
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Gates time advancement without unbinding the clip.
    #[inline]
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
