//! The skeletal animation pipeline, leaf modules first:
//!
//! - tracks: keyframe storage and interpolation for one bone property
//! - bone: one joint's three tracks composed into a local TRS transform
//! - hierarchy: the immutable bind-pose node tree mirrored from the source
//! - registry: the shared bone-name→palette-slot table
//! - clip: the loaded, shareable animation asset
//! - animator: per-frame pose evaluation into the final matrix palette

pub mod animator;
pub mod bone;
pub mod clip;
pub mod hierarchy;
pub mod registry;
pub mod tracks;
pub mod values;

pub use animator::Animator;
pub use bone::Bone;
pub use clip::{Animation, ChannelSource, ClipSource};
pub use hierarchy::{HierarchyNode, NodeIndex, SkeletonHierarchy, SourceNode};
pub use registry::{BoneInfo, BoneRegistry, MAX_BONES};
pub use tracks::{KeySample, KeyframeTrack, TrackKind};
pub use values::Interpolate;
