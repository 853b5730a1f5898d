use glam::Mat4;
use log::error;
use rustc_hash::FxHashMap;

use crate::errors::{LoadError, Result};

/// Hard ceiling on distinct bones: the size of the skinning-palette uniform
/// array the vertex shader is compiled against.
pub const MAX_BONES: usize = 100;

/// Registry entry for one bone: palette slot plus the inverse bind matrix.
#[derive(Debug, Clone, Copy)]
pub struct BoneInfo {
    /// Index into the final bone matrix palette.
    pub id: usize,
    /// Transforms a vertex from bind-pose model space into bone-local space.
    /// Identity until the mesh-skinning loader records the real matrix.
    pub offset: Mat4,
}

/// The bone-name→slot table shared between the mesh-skinning loader and
/// animation loading.
///
/// Ids are handed out densely starting at 0 and never reused; entries are
/// never removed. Whichever loader sees a bone name first allocates its
/// slot; the mesh path then fills in the offset matrix, the animation path
/// tags its [`Bone`](crate::Bone)s with the id. The registry is mutated only
/// on the loading path; clips keep an immutable [`snapshot`](Self::snapshot)
/// for playback, so playback never touches it.
#[derive(Debug, Clone, Default)]
pub struct BoneRegistry {
    entries: FxHashMap<String, BoneInfo>,
    next_id: usize,
}

impl BoneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette slot for `name`, allocating the next free id with an identity
    /// offset placeholder if the name is new.
    ///
    /// Fails without allocating once [`MAX_BONES`] names are registered.
    pub fn resolve_or_insert(&mut self, name: &str) -> Result<usize> {
        if let Some(info) = self.entries.get(name) {
            return Ok(info.id);
        }
        if self.next_id >= MAX_BONES {
            error!("bone '{name}' does not fit the {MAX_BONES}-slot skinning palette");
            return Err(LoadError::CapacityExceeded {
                bone: name.to_string(),
                max: MAX_BONES,
            });
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            name.to_string(),
            BoneInfo {
                id,
                offset: Mat4::IDENTITY,
            },
        );
        Ok(id)
    }

    /// Records the inverse bind matrix for `name`, allocating a slot first if
    /// the mesh loader sees the bone before any animation channel does.
    /// The id of an existing entry is never reassigned.
    pub fn set_offset(&mut self, name: &str, offset: Mat4) -> Result<usize> {
        let id = self.resolve_or_insert(name)?;
        if let Some(info) = self.entries.get_mut(name) {
            info.offset = offset;
        }
        Ok(id)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoneInfo> {
        self.entries.get(name)
    }

    /// Number of registered bones; also the next id to be handed out.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.next_id
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_id == 0
    }

    /// Copy of the table for a clip to keep at load time.
    #[must_use]
    pub fn snapshot(&self) -> FxHashMap<String, BoneInfo> {
        self.entries.clone()
    }
}
