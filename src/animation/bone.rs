use glam::{Mat4, Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;

/// One animated skeletal joint: three keyframe tracks plus the palette slot
/// assigned by the owning clip's [`BoneRegistry`](crate::BoneRegistry).
///
/// The three tracks are evaluated independently: an importer may emit five
/// translation keys next to a single rotation key, and each track holds or
/// blends on its own schedule.
#[derive(Debug, Clone)]
pub struct Bone {
    name: String,
    id: usize,
    translations: KeyframeTrack<Vec3>,
    rotations: KeyframeTrack<Quat>,
    scales: KeyframeTrack<Vec3>,
}

impl Bone {
    #[must_use]
    pub fn new(
        name: String,
        id: usize,
        translations: KeyframeTrack<Vec3>,
        rotations: KeyframeTrack<Quat>,
        scales: KeyframeTrack<Vec3>,
    ) -> Self {
        debug_assert!(
            !translations.is_empty() && !rotations.is_empty() && !scales.is_empty(),
            "every track needs at least one keyframe"
        );
        Self {
            name,
            id,
            translations,
            rotations,
            scales,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index into the final bone matrix palette, stable for the lifetime of
    /// the owning clip.
    #[inline]
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn translations(&self) -> &KeyframeTrack<Vec3> {
        &self.translations
    }

    #[inline]
    #[must_use]
    pub fn rotations(&self) -> &KeyframeTrack<Quat> {
        &self.rotations
    }

    #[inline]
    #[must_use]
    pub fn scales(&self) -> &KeyframeTrack<Vec3> {
        &self.scales
    }

    /// Local transform at `time_ticks`, composed translation * rotation *
    /// scale.
    ///
    /// Evaluation is pure: clips are shared immutably across animators, so
    /// the result is returned rather than cached on the bone.
    #[must_use]
    pub fn local_transform(&self, time_ticks: f32) -> Mat4 {
        let translation = self.translations.sample(time_ticks);
        let rotation = self.rotations.sample(time_ticks);
        let scale = self.scales.sample(time_ticks);
        Mat4::from_scale_rotation_translation(scale, rotation, translation)
    }
}
