use glam::{Quat, Vec3};
use log::{error, warn};
use rustc_hash::FxHashMap;

use crate::animation::bone::Bone;
use crate::animation::hierarchy::{SkeletonHierarchy, SourceNode};
use crate::animation::registry::{BoneInfo, BoneRegistry};
use crate::animation::tracks::{KeyframeTrack, TrackKind};
use crate::errors::{LoadError, Result};

/// Tick rate assumed when the source clip leaves it unspecified (zero, per
/// interchange-format convention).
const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// Keyframe data for one animated node, as produced by the asset importer.
#[derive(Debug, Clone)]
pub struct ChannelSource {
    /// Name of the hierarchy node this channel drives.
    pub node_name: String,
    pub translations: KeyframeTrack<Vec3>,
    pub rotations: KeyframeTrack<Quat>,
    pub scales: KeyframeTrack<Vec3>,
}

/// A pre-parsed animation clip plus the node hierarchy it animates.
///
/// Produced by the external importer collaborator; this crate does not read
/// any file format itself.
#[derive(Debug, Clone)]
pub struct ClipSource {
    pub name: String,
    /// Clip length in its native time unit.
    pub duration_ticks: f32,
    /// Ticks per real-time second; zero means unspecified.
    pub ticks_per_second: f32,
    pub channels: Vec<ChannelSource>,
    pub root: Option<SourceNode>,
}

/// One playable clip: the mirrored bind hierarchy, one [`Bone`] per animated
/// channel, and the bone table snapshot taken at load time.
///
/// Immutable after [`load`](Animation::load); share between animators with
/// `Arc`. Many animators reading one clip concurrently is safe precisely
/// because nothing here is mutated during playback.
#[derive(Debug, Clone)]
pub struct Animation {
    name: String,
    duration_ticks: f32,
    ticks_per_second: f32,
    bones: Vec<Bone>,
    hierarchy: SkeletonHierarchy,
    bone_info: FxHashMap<String, BoneInfo>,
}

impl Animation {
    /// Builds a clip from importer output, resolving channel names against
    /// the shared registry.
    ///
    /// New bone names get the next free palette slot with an identity offset
    /// placeholder; names already registered by the mesh-skinning loader
    /// keep their slot and offset matrix. Failures are logged and returned;
    /// slots allocated before a failure stay allocated (ids are never rolled
    /// back).
    pub fn load(source: ClipSource, registry: &mut BoneRegistry) -> Result<Self> {
        let Some(root) = source.root else {
            error!("animation clip '{}' has no root hierarchy node", source.name);
            return Err(LoadError::MissingRootNode { clip: source.name });
        };
        if source.channels.is_empty() {
            error!("animation clip '{}' has no channels", source.name);
            return Err(LoadError::NoChannels { clip: source.name });
        }

        let ticks_per_second = if source.ticks_per_second > 0.0 {
            source.ticks_per_second
        } else {
            warn!(
                "animation clip '{}' has no tick rate, assuming {DEFAULT_TICKS_PER_SECOND}",
                source.name
            );
            DEFAULT_TICKS_PER_SECOND
        };

        let hierarchy = SkeletonHierarchy::from_source(&root);

        let mut bones = Vec::with_capacity(source.channels.len());
        for channel in source.channels {
            Self::validate_channel(&source.name, &channel)?;
            let id = registry.resolve_or_insert(&channel.node_name)?;
            bones.push(Bone::new(
                channel.node_name,
                id,
                channel.translations,
                channel.rotations,
                channel.scales,
            ));
        }

        Ok(Self {
            name: source.name,
            duration_ticks: source.duration_ticks,
            ticks_per_second,
            bones,
            hierarchy,
            bone_info: registry.snapshot(),
        })
    }

    fn validate_channel(clip: &str, channel: &ChannelSource) -> Result<()> {
        let empty_track = if channel.translations.is_empty() {
            Some(TrackKind::Translation)
        } else if channel.rotations.is_empty() {
            Some(TrackKind::Rotation)
        } else if channel.scales.is_empty() {
            Some(TrackKind::Scale)
        } else {
            None
        };

        if let Some(track) = empty_track {
            error!(
                "channel '{}' in clip '{clip}' has an empty {track} track",
                channel.node_name
            );
            return Err(LoadError::EmptyTrack {
                clip: clip.to_string(),
                bone: channel.node_name.clone(),
                track,
            });
        }
        Ok(())
    }

    /// Linear search over the clip's animated bones. Skeletons run tens to
    /// low hundreds of bones, so a map is not worth the indirection.
    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|bone| bone.name() == name)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn duration_ticks(&self) -> f32 {
        self.duration_ticks
    }

    #[inline]
    #[must_use]
    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    #[inline]
    #[must_use]
    pub fn hierarchy(&self) -> &SkeletonHierarchy {
        &self.hierarchy
    }

    /// The animated bones, one per source channel.
    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// The bone table snapshot taken at load time.
    #[inline]
    #[must_use]
    pub fn bone_info(&self) -> &FxHashMap<String, BoneInfo> {
        &self.bone_info
    }

    /// Number of registered bones at load time; ids in the snapshot are
    /// dense in `0..bone_count()`, so this is also the palette size.
    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_info.len()
    }
}
