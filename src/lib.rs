//! Skeletal animation core.
//!
//! Loads bone hierarchies and keyframe channels handed over by an external
//! asset importer, and evaluates them into a flattened array of final bone
//! matrices for GPU vertex skinning:
//!
//! - [`KeyframeTrack`]: ordered timestamped samples with lerp/slerp blending
//! - [`Bone`]: three tracks per named joint, composed into a TRS transform
//! - [`Animation`]: one playable clip (hierarchy, bones, bone table snapshot)
//! - [`BoneRegistry`]: the shared name→palette-slot table
//! - [`Animator`]: the per-frame playback clock and recursive pose walk
//!
//! Rendering, scene management and asset parsing are external collaborators;
//! the only output surface is [`Animator::final_bone_matrices`], a `Mat4`
//! slice meant for direct upload as a shader uniform array.

pub mod animation;
pub mod errors;

pub use animation::{
    Animation, Animator, Bone, BoneInfo, BoneRegistry, ChannelSource, ClipSource, HierarchyNode,
    Interpolate, KeySample, KeyframeTrack, MAX_BONES, NodeIndex, SkeletonHierarchy, SourceNode,
    TrackKind,
};
pub use errors::{LoadError, Result};
