//! # Mesh Data Structure
//!
//! Polygonal mesh made of an append-only vertex sequence and a sequence of
//! faces that reference vertices by index.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered ring of vertex indices. The order fixes the winding, and with it
/// the outward normal via the right-hand rule.
pub type Face = Vec<u32>;

/// Undirected edge key, smaller index first.
pub type EdgeKey = (u32, u32);

/// How often an undirected edge is traversed in each direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeUse {
    /// Traversals from the smaller index to the larger one
    pub forward: usize,
    /// Traversals from the larger index to the smaller one
    pub backward: usize,
}

impl EdgeUse {
    /// Total number of faces using this edge.
    #[inline]
    pub fn total(&self) -> usize {
        self.forward + self.backward
    }
}

/// A polygon mesh with vertices and faces.
///
/// Vertices are identified by their position in the sequence and are only
/// ever appended, so indices handed out by [`Mesh::add_vertex`] stay valid as
/// the mesh grows. Faces may be triangles, quads or longer rings.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMesh")]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Faces as index rings
    faces: Vec<Face>,
}

/// Unchecked wire form of [`Mesh`]; decoding goes through
/// [`Mesh::from_parts`] so a deserialized mesh is always valid.
#[derive(Deserialize)]
struct RawMesh {
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
}

impl TryFrom<RawMesh> for Mesh {
    type Error = MeshError;

    fn try_from(raw: RawMesh) -> Result<Self, Self::Error> {
        Mesh::from_parts(raw.vertices, raw.faces)
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Builds a mesh from raw parts, rejecting out-of-range or degenerate faces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let result = Mesh::from_parts(vec![DVec3::ZERO], vec![vec![0, 1, 2]]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<Face>) -> Result<Self, MeshError> {
        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Splits the mesh back into its vertex and face sequences.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<Face>) {
        (self.vertices, self.faces)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face given as an ordered ring of vertex indices.
    pub fn add_face(&mut self, face: impl Into<Face>) {
        self.faces.push(face.into());
    }

    /// Adds a triangle by vertex indices.
    ///
    /// Indices are not checked here; call [`Mesh::validate`] once the mesh
    /// is assembled.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push(vec![v0, v1, v2]);
    }

    /// Overwrites the face at `index`, keeping its slot in the sequence.
    pub(crate) fn replace_face(&mut self, index: usize, face: Face) {
        self.faces[index] = face;
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Returns true if every face is a triangle.
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(|face| face.len() == 3)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every face has at least 3 vertices
    /// - All face indices are valid
    /// - No face repeats a vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::DegenerateFace { face: face_index });
            }

            if let Some(&index) = face.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::InvalidIndex {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }

            for (k, a) in face.iter().enumerate() {
                if face[k + 1..].contains(a) {
                    return Err(MeshError::DegenerateFace { face: face_index });
                }
            }
        }

        Ok(())
    }

    /// Counts, for every undirected edge, how often it is traversed in each
    /// direction across all faces.
    pub fn edge_uses(&self) -> BTreeMap<EdgeKey, EdgeUse> {
        let mut uses: BTreeMap<EdgeKey, EdgeUse> = BTreeMap::new();

        for face in &self.faces {
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                let entry = uses.entry((a.min(b), a.max(b))).or_default();
                if a < b {
                    entry.forward += 1;
                } else {
                    entry.backward += 1;
                }
            }
        }

        uses
    }

    /// Returns true if the mesh is a closed, consistently wound surface.
    ///
    /// Every undirected edge must be shared by exactly two faces that
    /// traverse it in opposite directions.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty()
            && self
                .edge_uses()
                .values()
                .all(|edge| edge.forward == 1 && edge.backward == 1)
    }

    /// Computes the unit normal of a face using Newell's method.
    ///
    /// Returns zero for degenerate faces.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        let mut normal = DVec3::ZERO;

        for (k, &a) in face.iter().enumerate() {
            let current = self.vertices[a as usize];
            let next = self.vertices[face[(k + 1) % face.len()] as usize];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
        }

        normal.normalize_or_zero()
    }

    /// Returns the centroid of a face.
    pub fn face_centroid(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        if face.is_empty() {
            return DVec3::ZERO;
        }
        let sum: DVec3 = face.iter().map(|&i| self.vertices[i as usize]).sum();
        sum / face.len() as f64
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns the bounding box as `[x_min, x_max, y_min, y_max, z_min, z_max]`.
    ///
    /// This is the layout [`create_box`](crate::primitives::create_box) takes,
    /// so the bounds of a loaded model can be turned straight into its
    /// bounding-box overlay.
    pub fn bounds(&self) -> [f64; 6] {
        let (min, max) = self.bounding_box();
        [min.x, max.x, min.y, max.y, min.z, max.z]
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, shifting its face indices past this mesh's
    /// vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for face in &other.faces {
            self.faces.push(face.iter().map(|&i| i + offset).collect());
        }
    }

    /// Returns a triangle-only copy of the mesh.
    ///
    /// Each n-gon becomes a fan around its first vertex, preserving winding.
    /// Vertices are shared unchanged.
    pub fn triangulate(&self) -> Mesh {
        let triangle_count = self
            .faces
            .iter()
            .map(|face| face.len().saturating_sub(2))
            .sum();
        let mut result = Mesh::with_capacity(self.vertices.len(), triangle_count);
        result.vertices.extend_from_slice(&self.vertices);

        for face in &self.faces {
            for k in 1..face.len().saturating_sub(1) {
                result.add_triangle(face[0], face[k], face[k + 1]);
            }
        }

        result
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports fan-triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::new();
        for face in &self.faces {
            for k in 1..face.len().saturating_sub(1) {
                result.extend_from_slice(&[face[0], face[k], face[k + 1]]);
            }
        }
        result
    }

    /// Exports faces as a size-prefixed polygon cell list.
    ///
    /// Each face is written as its vertex count followed by its indices:
    /// `[n, i0, .., in-1, m, j0, ..]`. Retained-mode renderers take polygon
    /// cells in this layout.
    pub fn cell_array(&self) -> Vec<u32> {
        let len = self.faces.iter().map(|face| face.len() + 1).sum();
        let mut result = Vec::with_capacity(len);
        for face in &self.faces {
            result.push(face.len() as u32);
            result.extend_from_slice(face);
        }
        result
    }
}
