//! Box collision geometry
//!
//! Static geometry is supplied to the resolver as batches of axis-aligned
//! boxes. Each box expands into 12 triangles through a fixed corner table,
//! two per face, wound so that every normal points out of the box.

use serde::{Deserialize, Serialize};

use super::primitives::{Triangle, AABB};
use crate::foundation::math::Vec3;
use crate::physics::error::CollisionError;

/// Corner indices (see [`AABB::corners`]) of the 12 box triangles
///
/// Faces in order: +Z, -Z, -X, +X, +Y, -Y. Every triangle is wound so its
/// normal points out of the box.
pub const BOX_TRIANGLE_INDICES: [[usize; 3]; 12] = [
    [3, 1, 0],
    [3, 2, 1],
    [4, 6, 7],
    [4, 5, 6],
    [0, 5, 4],
    [0, 1, 5],
    [7, 2, 3],
    [7, 6, 2],
    [2, 5, 1],
    [2, 6, 5],
    [7, 0, 4],
    [7, 3, 0],
];

/// Side of a box that blocks movement
///
/// A triangle only stops a sweep travelling along its normal, so the
/// winding decides whether the mover is kept in or kept out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxOrientation {
    /// Outward normals: the box keeps a mover inside it (room bounds)
    #[default]
    Containment,
    /// Inward normals: the box keeps a mover out of it (furniture)
    Solid,
}

/// The 12 triangles of a box with the requested orientation
pub fn box_triangles(aabb: &AABB, orientation: BoxOrientation) -> [Triangle; 12] {
    let corners = aabb.corners();
    BOX_TRIANGLE_INDICES.map(|[i0, i1, i2]| match orientation {
        BoxOrientation::Containment => Triangle::new(corners[i0], corners[i1], corners[i2]),
        BoxOrientation::Solid => Triangle::new(corners[i0], corners[i2], corners[i1]),
    })
}

/// A read-only source of box batches tracked by the resolver
pub trait BoxBatchSource: Send + Sync {
    /// Boxes in world space
    fn box_batches(&self) -> &[AABB];

    /// Which side of every box blocks movement
    fn orientation(&self) -> BoxOrientation;

    /// Number of triangles this source contributes
    fn triangle_count(&self) -> usize {
        self.box_batches().len() * BOX_TRIANGLE_INDICES.len()
    }

    /// Number of zero-area triangles among them
    fn degenerate_triangle_count(&self) -> usize {
        self.box_batches()
            .iter()
            .flat_map(|aabb| box_triangles(aabb, self.orientation()))
            .filter(Triangle::is_degenerate)
            .count()
    }
}

/// Boxes owned in memory, one per model part
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxMesh {
    boxes: Vec<AABB>,
    orientation: BoxOrientation,
}

impl BoxMesh {
    /// Wraps already-built world-space boxes
    pub fn from_aabbs(boxes: Vec<AABB>, orientation: BoxOrientation) -> Self {
        Self { boxes, orientation }
    }

    /// Builds one bounding box per vertex group, scaled into world units
    ///
    /// Groups are usually the parts of a loaded model; `scale` matches the
    /// uniform scale the model is drawn with.
    pub fn from_vertex_groups(
        groups: &[Vec<Vec3>],
        scale: f32,
        orientation: BoxOrientation,
    ) -> Result<Self, CollisionError> {
        let boxes = groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                AABB::from_points(group)
                    .map(|aabb| aabb.scaled(scale))
                    .ok_or(CollisionError::EmptyVertexGroup { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Built {} collision boxes from vertex groups (scale {})", boxes.len(), scale);
        Ok(Self { boxes, orientation })
    }

    /// Appends a box
    pub fn push(&mut self, aabb: AABB) {
        self.boxes.push(aabb);
    }

    /// Number of boxes
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the mesh has no boxes
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl BoxBatchSource for BoxMesh {
    fn box_batches(&self) -> &[AABB] {
        &self.boxes
    }

    fn orientation(&self) -> BoxOrientation {
        self.orientation
    }
}
