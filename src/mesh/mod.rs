//! Triangle mesh with per-vertex positions, texture coordinates and normals.
//!
//! Faces reference positions and texture coordinates through separate typed
//! indices. Normals have no index of their own: the normal of a face corner is
//! looked up with its *vertex* index, so a valid mesh has exactly one normal
//! per position. [`Mesh::validate`] enforces that along with index bounds.

mod loader;
mod obj;

pub use obj::parse_obj;

use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// 0-based index into [`Mesh::positions`] (and [`Mesh::normals`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexIndex(pub usize);

/// 0-based index into [`Mesh::texture_coords`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureIndex(pub usize);

/// One corner of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceVertex {
    pub vertex: VertexIndex,
    pub texture: TextureIndex,
}

impl FaceVertex {
    pub fn new(vertex: usize, texture: usize) -> Self {
        Self {
            vertex: VertexIndex(vertex),
            texture: TextureIndex(texture),
        }
    }

    /// Index of this corner's normal. Normals are stored per vertex, so this
    /// is always the vertex index.
    #[inline]
    pub fn normal(&self) -> usize {
        self.vertex.0
    }
}

/// A triangle, as three corners in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [FaceVertex; 3],
}

impl Face {
    pub fn new(vertices: [FaceVertex; 3]) -> Self {
        Self { vertices }
    }

    /// Face whose vertex and texture-coordinate indices coincide.
    pub fn uniform(a: usize, b: usize, c: usize) -> Self {
        Self::new([
            FaceVertex::new(a, a),
            FaceVertex::new(b, b),
            FaceVertex::new(c, c),
        ])
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    texture_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Assembles a mesh without checking it; see [`Mesh::validate`].
    pub fn new(
        positions: Vec<Vec3>,
        texture_coords: Vec<Vec2>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            positions,
            texture_coords,
            normals,
            faces,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn texture_coords(&self) -> &[Vec2] {
        &self.texture_coords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Checks that every face index is in range and that there is one normal
    /// per vertex.
    pub fn validate(&self) -> Result<()> {
        if self.faces.is_empty() {
            return Ok(());
        }
        if self.normals.len() != self.positions.len() {
            return Err(RenderError::NormalCountMismatch {
                vertices: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        for corner in self.faces.iter().flat_map(|f| f.vertices.iter()) {
            if corner.vertex.0 >= self.positions.len() {
                return Err(RenderError::IndexOutOfRange {
                    kind: "vertex",
                    index: corner.vertex.0,
                    len: self.positions.len(),
                });
            }
            if corner.texture.0 >= self.texture_coords.len() {
                return Err(RenderError::IndexOutOfRange {
                    kind: "texture coordinate",
                    index: corner.texture.0,
                    len: self.texture_coords.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![Vec3::ZERO, Vec3::RIGHT, Vec3::UP],
            vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            vec![Vec3::FORWARD; 3],
            vec![Face::uniform(0, 1, 2)],
        )
    }

    #[test]
    fn valid_mesh_passes() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn normal_index_is_vertex_index() {
        let corner = FaceVertex::new(4, 9);
        assert_eq!(corner.normal(), 4);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let mut mesh = triangle();
        mesh.faces.push(Face::new([
            FaceVertex::new(0, 0),
            FaceVertex::new(1, 1),
            FaceVertex::new(3, 2),
        ]));
        assert!(matches!(
            mesh.validate(),
            Err(RenderError::IndexOutOfRange {
                kind: "vertex",
                index: 3,
                len: 3
            })
        ));
    }

    #[test]
    fn out_of_range_texture_is_rejected() {
        let mut mesh = triangle();
        mesh.faces[0].vertices[2].texture = TextureIndex(5);
        assert!(matches!(
            mesh.validate(),
            Err(RenderError::IndexOutOfRange {
                kind: "texture coordinate",
                ..
            })
        ));
    }

    #[test]
    fn normal_count_must_match_vertex_count() {
        let mut mesh = triangle();
        mesh.normals.pop();
        assert!(matches!(
            mesh.validate(),
            Err(RenderError::NormalCountMismatch {
                vertices: 3,
                normals: 2
            })
        ));
    }
}
