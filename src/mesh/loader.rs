//! OBJ loading through `tobj`.
//!
//! `tobj` resolves separate position/texture/normal indices into one unified
//! index per corner, which satisfies the one-normal-per-vertex layout
//! directly. All objects and groups in the file are merged into one mesh.

use std::path::Path;

use tracing::{info, warn};

use super::{Face, Mesh};
use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

impl Mesh {
    /// Loads an OBJ file with `tobj`, triangulating polygons.
    ///
    /// Unlike [`Mesh::from_obj_file`], this honours the normal index of each
    /// face corner and accepts quads and n-gons. Every object must carry
    /// texture coordinates and normals.
    pub fn load_with_tobj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        };
        let (models, materials) = tobj::load_obj(path, &options)?;
        if let Err(e) = materials {
            warn!(error = %e, "Ignoring material library");
        }

        let mut positions = Vec::new();
        let mut texture_coords = Vec::new();
        let mut normals = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let m = &model.mesh;
            if m.texcoords.is_empty() || m.normals.is_empty() {
                return Err(RenderError::MalformedMesh(format!(
                    "object `{}` has no texture coordinates or normals",
                    model.name
                )));
            }

            let base = positions.len();
            positions.extend(
                m.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            texture_coords.extend(m.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));
            normals.extend(
                m.normals
                    .chunks_exact(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2])),
            );
            faces.extend(m.indices.chunks_exact(3).map(|tri| {
                Face::uniform(
                    base + tri[0] as usize,
                    base + tri[1] as usize,
                    base + tri[2] as usize,
                )
            }));
        }

        let mesh = Mesh::new(positions, texture_coords, normals, faces);
        mesh.validate()?;
        info!(
            path = %path.display(),
            objects = models.len(),
            vertices = mesh.positions().len(),
            faces = mesh.faces().len(),
            "Loaded mesh with tobj"
        );
        Ok(mesh)
    }
}
