use cgmath::Point3;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::VoxelId;

/// Corner order of a face before winding: (0,0), (+u,0), (+u,+v), (0,+v).
///
/// Each entry says whether the corner sits at the far end of the u and v axes.
const CORNERS: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

/// An axis-aligned rectangle on the boundary between solid and empty voxels.
///
/// A face lies in the plane `coordinate[axis] == plane` and covers
/// `[u, u + width) x [v, v + height)` of the two remaining axes, where the in-plane
/// axes are `(axis + 1) % 3` and `(axis + 2) % 3`. All coordinates are chunk-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Identifier of the voxels this face belongs to
    pub block_id: VoxelId,
    /// Which way the face points
    pub side: BlockSide,
    /// Position of the face along its normal axis
    pub plane: usize,
    /// Start of the face along the first in-plane axis
    pub u: usize,
    /// Start of the face along the second in-plane axis
    pub v: usize,
    /// Extent along the first in-plane axis
    pub width: usize,
    /// Extent along the second in-plane axis
    pub height: usize,
}

impl Face {
    /// Creates the 1x1 face on `side` of the voxel at (x, y, z).
    pub fn unit(x: usize, y: usize, z: usize, block_id: VoxelId, side: BlockSide) -> Self {
        let position = [x, y, z];
        let (axis, u_axis, v_axis) = axes(side.axis());
        Face {
            block_id,
            side,
            plane: position[axis] + usize::from(side.is_positive()),
            u: position[u_axis],
            v: position[v_axis],
            width: 1,
            height: 1,
        }
    }

    /// The normal axis followed by the two in-plane axes.
    pub fn axes(&self) -> (usize, usize, usize) {
        axes(self.side.axis())
    }

    /// Corner selectors in emission order.
    ///
    /// Positive faces run counter-clockwise when viewed from the side their normal
    /// points to; negative faces use the reverse order so both wind outward.
    pub fn winding(&self) -> [(bool, bool); 4] {
        if self.side.is_positive() {
            CORNERS
        } else {
            [CORNERS[0], CORNERS[3], CORNERS[2], CORNERS[1]]
        }
    }

    /// The in-plane coordinates of a corner.
    pub fn corner_uv(&self, far_u: bool, far_v: bool) -> (usize, usize) {
        (
            self.u + if far_u { self.width } else { 0 },
            self.v + if far_v { self.height } else { 0 },
        )
    }

    /// The chunk-local position of a corner.
    pub fn corner(&self, far_u: bool, far_v: bool) -> Point3<usize> {
        let (axis, u_axis, v_axis) = self.axes();
        let (corner_u, corner_v) = self.corner_uv(far_u, far_v);
        let mut position = [0; 3];
        position[axis] = self.plane;
        position[u_axis] = corner_u;
        position[v_axis] = corner_v;
        position.into()
    }

    /// All four corners in emission order.
    pub fn corners(&self) -> [Point3<usize>; 4] {
        self.winding().map(|(far_u, far_v)| self.corner(far_u, far_v))
    }
}

#[inline]
pub(crate) fn axes(axis: usize) -> (usize, usize, usize) {
    (axis, (axis + 1) % 3, (axis + 2) % 3)
}
