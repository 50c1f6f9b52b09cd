//! Mesh data structures produced by the mesh builder.
//!
//! [`MeshData`] keeps every vertex attribute in its own flat array so hosts can
//! upload them as separate buffers. [`MeshData::interleaved`] packs the same
//! data into [`Vertex`] records for hosts that prefer a single buffer.

use cgmath::Vector3;

/// A single interleaved vertex.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Normal: 3x f32 (12 bytes)
/// - Ambient occlusion: f32 (4 bytes)
/// - Color: 3x f32 (12 bytes)
///
/// Total size: 40 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position relative to the mesh origin
    pub position: [f32; 3],
    /// Unit normal of the face this vertex belongs to
    pub normal: [f32; 3],
    /// Ambient occlusion in `[0, 1]`, 1 being fully lit
    pub ambient_occlusion: f32,
    /// RGB color of the voxel type
    pub color: [f32; 3],
}

/// Renderer-agnostic triangle mesh.
///
/// All per-vertex arrays are aligned: the normal, occlusion and color at vertex
/// `i` describe the position at vertex `i`. Quads are stored as four vertices
/// and two triangles `(0, 1, 2), (0, 2, 3)`, so the vertex count is always a
/// multiple of 4 and the index count a multiple of 6.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Flat XYZ vertex positions
    pub vertices: Vec<f32>,
    /// Triangle indices into the vertex arrays
    pub indices: Vec<u32>,
    /// Flat XYZ normals, one per vertex
    pub normals: Vec<f32>,
    /// One ambient occlusion value per vertex
    pub ambient_occlusion: Vec<f32>,
    /// Flat RGB colors, one per vertex
    pub colors: Vec<f32>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of quads.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Returns `true` if the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a quad.
    ///
    /// # Arguments
    /// * `corners` - The four corner positions, already in winding order
    /// * `normal` - The normal shared by all four vertices
    /// * `ambient_occlusion` - Per-corner occlusion, in the same order as `corners`
    /// * `color` - The color shared by all four vertices
    pub fn push_quad(
        &mut self,
        corners: [[f32; 3]; 4],
        normal: Vector3<f32>,
        ambient_occlusion: [f32; 4],
        color: [f32; 3],
    ) {
        let base = self.vertex_count() as u32;

        for (corner, occlusion) in corners.iter().zip(ambient_occlusion) {
            self.vertices.extend_from_slice(corner);
            self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            self.ambient_occlusion.push(occlusion);
            self.colors.extend_from_slice(&color);
        }

        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Appends another mesh, translating its positions by `offset`.
    ///
    /// The appended indices are rebased so they keep referring to the appended
    /// vertices.
    pub fn append(&mut self, other: &MeshData, offset: Vector3<f32>) {
        let base = self.vertex_count() as u32;

        self.vertices.extend(
            other
                .vertices
                .chunks_exact(3)
                .flat_map(|p| [p[0] + offset.x, p[1] + offset.y, p[2] + offset.z]),
        );
        self.indices.extend(other.indices.iter().map(|index| index + base));
        self.normals.extend_from_slice(&other.normals);
        self.ambient_occlusion
            .extend_from_slice(&other.ambient_occlusion);
        self.colors.extend_from_slice(&other.colors);
    }

    /// Packs the per-vertex arrays into interleaved [`Vertex`] records.
    pub fn interleaved(&self) -> Vec<Vertex> {
        (0..self.vertex_count())
            .map(|i| Vertex {
                position: [
                    self.vertices[i * 3],
                    self.vertices[i * 3 + 1],
                    self.vertices[i * 3 + 2],
                ],
                normal: [
                    self.normals[i * 3],
                    self.normals[i * 3 + 1],
                    self.normals[i * 3 + 2],
                ],
                ambient_occlusion: self.ambient_occlusion[i],
                color: [
                    self.colors[i * 3],
                    self.colors[i * 3 + 1],
                    self.colors[i * 3 + 2],
                ],
            })
            .collect()
    }

    /// Raw bytes of the position array.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index array.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
