//! Per-vertex ambient occlusion.
//!
//! Each face corner looks at the layer of voxels directly in front of the face
//! and counts three of them as potential occluders: the voxel just outside the
//! face along u, the one just outside along v, and the diagonal between them.
//! The result is `1 - solid / 3`, so a corner reads 1, 2/3, 1/3 or 0. Samples
//! outside the chunk are never solid.

use super::face::Face;
use crate::voxels::chunk::Chunk;

/// Ambient occlusion of the face's corners, in [`Face::winding`] order.
pub fn face_ambient_occlusion(chunk: &Chunk, face: &Face) -> [f32; 4] {
    face.winding()
        .map(|(far_u, far_v)| corner_ambient_occlusion(chunk, face, far_u, far_v))
}

/// Ambient occlusion of one corner of `face`.
pub fn corner_ambient_occlusion(chunk: &Chunk, face: &Face, far_u: bool, far_v: bool) -> f32 {
    let (axis, u_axis, v_axis) = face.axes();
    let air_layer = if face.side.is_positive() {
        face.plane as i32
    } else {
        face.plane as i32 - 1
    };

    let (corner_u, corner_v) = face.corner_uv(far_u, far_v);
    let (u_out, u_in) = outside_inside(corner_u as i32, far_u);
    let (v_out, v_in) = outside_inside(corner_v as i32, far_v);

    let solid_at = |u: i32, v: i32| {
        let mut position = [0; 3];
        position[axis] = air_layer;
        position[u_axis] = u;
        position[v_axis] = v;
        chunk.is_block_solid(position[0], position[1], position[2])
    };

    let occluders = [
        solid_at(u_out, v_in),
        solid_at(u_in, v_out),
        solid_at(u_out, v_out),
    ]
    .into_iter()
    .filter(|&solid| solid)
    .count();

    1.0 - occluders as f32 / 3.0
}

/// Voxel coordinates just outside and just inside a face edge at `corner`.
#[inline]
fn outside_inside(corner: i32, far: bool) -> (i32, i32) {
    if far {
        (corner, corner - 1)
    } else {
        (corner - 1, corner)
    }
}
