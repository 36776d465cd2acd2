use glam::Vec3;

use crate::ring::Ring;

/// Triangle mesh produced by the generator.
///
/// Invariant: every index in `triangles` is `< vertices.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Append another mesh, rebasing its indices onto this buffer.
    pub fn append(&mut self, other: &MeshBuffer) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }

    /// Axis-aligned bounds as (min, max), `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Vertex positions as raw bytes (tightly packed `f32 x, y, z`).
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle indices as raw bytes (`u32`, three per triangle).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub(crate) fn max_index(&self) -> Option<u32> {
        self.triangles.iter().flatten().copied().max()
    }

    fn indices_in_bounds(&self) -> bool {
        self.max_index()
            .map_or(true, |max| (max as usize) < self.vertices.len())
    }
}

/// Stitch consecutive rings into a closed tube.
///
/// Emits `2 * N * (rings - 1)` triangles for `N`-vertex rings. Panics if the
/// rings do not all share the same vertex count.
pub fn build_tube(rings: &[Ring]) -> MeshBuffer {
    let Some(first) = rings.first() else {
        return MeshBuffer::new();
    };

    let n = first.resolution();
    assert!(
        rings.iter().all(|ring| ring.resolution() == n),
        "all rings of a stem must share one resolution"
    );

    let vertices: Vec<Vec3> = rings
        .iter()
        .flat_map(|ring| ring.vertices.iter().copied())
        .collect();

    let n = n as u32;
    let count = vertices.len() as u32;
    let mut triangles = Vec::with_capacity(2 * (count.saturating_sub(n)) as usize);

    for i in 0..count.saturating_sub(n) {
        triangles.push([i + n - 1, i + n, i]);
        triangles.push([i + n, i + 1, i]);
    }

    let mesh = MeshBuffer {
        vertices,
        triangles,
    };
    debug_assert!(mesh.indices_in_bounds());
    mesh
}

/// Duplicate vertices so every triangle corner is unique (faceted normals).
pub fn flat_shade(mesh: &MeshBuffer) -> MeshBuffer {
    let vertices: Vec<Vec3> = mesh
        .triangles
        .iter()
        .flat_map(|tri| tri.iter().map(|&i| mesh.vertices[i as usize]))
        .collect();

    let triangles = (0..mesh.triangles.len() as u32)
        .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
        .collect();

    MeshBuffer {
        vertices,
        triangles,
    }
}

/// Merge meshes into one buffer.
pub fn concat<'a, I>(meshes: I) -> MeshBuffer
where
    I: IntoIterator<Item = &'a MeshBuffer>,
{
    let mut combined = MeshBuffer::new();
    for mesh in meshes {
        combined.append(mesh);
    }
    debug_assert!(combined.indices_in_bounds());
    combined
}
