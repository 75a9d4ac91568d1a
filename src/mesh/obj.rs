//! Line-oriented Wavefront OBJ parser.
//!
//! Understands four record types:
//!
//! ```text
//! v  x y z        position (extra components ignored)
//! vt u v          texture coordinate (extra components ignored)
//! vn x y z        normal
//! f  i/j i/j i/j  triangle; 1-based position/texture indices, a third
//!                 `/k` normal index is accepted and ignored
//! ```
//!
//! Any other leading token (comments, groups, materials, ...) is skipped.

use std::path::Path;

use tracing::{debug, info};

use super::{Face, FaceVertex, Mesh};
use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Parses OBJ text into a validated [`Mesh`].
///
/// # Errors
///
/// [`RenderError::MalformedMesh`] for unparsable numbers, faces that are not
/// triangles, missing texture slots, non-positive indices, or faces present
/// without any `v`/`vt`/`vn` records. Index-range and normal-count problems
/// are reported by [`Mesh::validate`].
pub fn parse_obj(source: &str) -> Result<Mesh> {
    let mut positions = Vec::new();
    let mut texture_coords = Vec::new();
    let mut normals = Vec::new();
    let mut faces = Vec::new();
    let mut skipped = 0usize;

    for (number, line) in source.lines().enumerate() {
        let line_no = number + 1;
        let mut tokens = line.split_whitespace();
        let Some(kind) = tokens.next() else {
            continue;
        };
        match kind {
            "v" => {
                let [x, y, z] = parse_floats::<3>(tokens, line_no, "v")?;
                positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = parse_floats::<2>(tokens, line_no, "vt")?;
                texture_coords.push(Vec2::new(u, v));
            }
            "vn" => {
                let [x, y, z] = parse_floats::<3>(tokens, line_no, "vn")?;
                normals.push(Vec3::new(x, y, z));
            }
            "f" => faces.push(parse_face(tokens, line_no)?),
            _ => skipped += 1,
        }
    }

    if !faces.is_empty() {
        for (records, name) in [
            (positions.len(), "v"),
            (texture_coords.len(), "vt"),
            (normals.len(), "vn"),
        ] {
            if records == 0 {
                return Err(RenderError::MalformedMesh(format!(
                    "faces present but no `{name}` records"
                )));
            }
        }
    }

    debug!(
        positions = positions.len(),
        texture_coords = texture_coords.len(),
        normals = normals.len(),
        faces = faces.len(),
        skipped,
        "Parsed OBJ records"
    );

    let mesh = Mesh::new(positions, texture_coords, normals, faces);
    mesh.validate()?;
    Ok(mesh)
}

impl Mesh {
    /// Reads and parses an OBJ file with [`parse_obj`].
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = parse_obj(&source)?;
        info!(
            path = %path.display(),
            vertices = mesh.positions().len(),
            faces = mesh.faces().len(),
            "Loaded mesh"
        );
        Ok(mesh)
    }
}

/// Reads the first `N` floats of a record; further components are ignored.
fn parse_floats<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
    record: &str,
) -> Result<[f32; N]> {
    let mut out = [0.0f32; N];
    for value in out.iter_mut() {
        let token = tokens.next().ok_or_else(|| {
            RenderError::MalformedMesh(format!(
                "line {line_no}: `{record}` needs {N} components"
            ))
        })?;
        *value = token.parse().map_err(|_| {
            RenderError::MalformedMesh(format!("line {line_no}: invalid number `{token}`"))
        })?;
    }
    Ok(out)
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>, line_no: usize) -> Result<Face> {
    let corners = tokens
        .map(|token| parse_corner(token, line_no))
        .collect::<Result<Vec<_>>>()?;
    let vertices: [FaceVertex; 3] = corners.try_into().map_err(|corners: Vec<_>| {
        RenderError::MalformedMesh(format!(
            "line {line_no}: face has {} vertices, expected 3",
            corners.len()
        ))
    })?;
    Ok(Face::new(vertices))
}

/// Parses `i/j` or `i/j/k` into 0-based vertex and texture indices.
fn parse_corner(token: &str, line_no: usize) -> Result<FaceVertex> {
    let mut parts = token.split('/');
    let vertex = parse_index(parts.next(), token, line_no)?;
    let texture = parse_index(parts.next(), token, line_no)?;
    Ok(FaceVertex::new(vertex, texture))
}

fn parse_index(part: Option<&str>, token: &str, line_no: usize) -> Result<usize> {
    let part = part.filter(|p| !p.is_empty()).ok_or_else(|| {
        RenderError::MalformedMesh(format!(
            "line {line_no}: face vertex `{token}` needs vertex/texture indices"
        ))
    })?;
    match part.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(RenderError::MalformedMesh(format!(
            "line {line_no}: invalid index `{part}` in `{token}`"
        ))),
    }
}
