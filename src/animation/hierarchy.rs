use glam::Mat4;
use smallvec::SmallVec;

/// One node of the source asset's hierarchy, as handed over by the importer.
/// Owns its children; there are no parent back-references.
#[derive(Debug, Clone)]
pub struct SourceNode {
    pub name: String,
    /// Local bind-pose transform relative to the parent node.
    pub transform: Mat4,
    pub children: Vec<SourceNode>,
}

/// Index of a node within a [`SkeletonHierarchy`] arena.
pub type NodeIndex = usize;

/// One node of the mirrored bind-pose hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    name: String,
    bind_local_transform: Mat4,
    children: SmallVec<[NodeIndex; 8]>,
}

impl HierarchyNode {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rest-state local transform, used when no animation channel overrides
    /// this node.
    #[inline]
    #[must_use]
    pub fn bind_local_transform(&self) -> Mat4 {
        self.bind_local_transform
    }

    /// Child node indices, in source order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// Immutable mirror of the source asset's node hierarchy.
///
/// # Design Principles
///
/// - Nodes live in an arena addressed by index, with children stored as
///   index lists. No parent back-pointers: the pose walk passes the
///   accumulated parent transform down as an argument instead.
/// - Every source node is mirrored, animated bone or not; static nodes
///   (attachment points, group nodes) contribute their bind transform to
///   their descendants' global transforms.
/// - Construction is depth-first and preserves source child order exactly.
#[derive(Debug, Clone)]
pub struct SkeletonHierarchy {
    nodes: Vec<HierarchyNode>,
}

impl SkeletonHierarchy {
    /// The root node's arena index.
    pub const ROOT: NodeIndex = 0;

    /// Mirrors the source tree into an arena. The root lands at index 0.
    #[must_use]
    pub fn from_source(root: &SourceNode) -> Self {
        let mut nodes = Vec::new();
        Self::mirror(root, &mut nodes);
        Self { nodes }
    }

    fn mirror(src: &SourceNode, nodes: &mut Vec<HierarchyNode>) -> NodeIndex {
        let index = nodes.len();
        nodes.push(HierarchyNode {
            name: src.name.clone(),
            bind_local_transform: src.transform,
            children: SmallVec::new(),
        });
        for child in &src.children {
            let child_index = Self::mirror(child, nodes);
            nodes[index].children.push(child_index);
        }
        index
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[Self::ROOT]
    }

    #[inline]
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &HierarchyNode {
        &self.nodes[index]
    }

    /// All nodes in depth-first order, root first.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
