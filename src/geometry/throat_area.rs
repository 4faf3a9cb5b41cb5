//! Throat cross-sectional area models.
//!
//! Each model maps per-throat input fields to one area per throat and has no
//! side effects.

use std::f64::consts::FRAC_PI_4;

use crate::math::polygon_2d::polygon_area_2d;
use crate::math::{rotate_and_chop, Point3, Vector3};

/// Axis the throat normals are rotated onto before the polygon is flattened.
pub const REFERENCE_AXIS: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Area of a circular throat cross-section: `π/4 · d²`.
#[must_use]
pub fn cylinder(diameter: &[f64]) -> Vec<f64> {
    diameter.iter().map(|d| FRAC_PI_4 * d * d).collect()
}

/// Area of a square throat cross-section: `d²`.
#[must_use]
pub fn cuboid(diameter: &[f64]) -> Vec<f64> {
    diameter.iter().map(|d| d * d).collect()
}

/// Area of each throat polygon, projected onto the plane normal to the
/// throat's normal vector.
///
/// The vertex loop is rotated so that the normal lies along
/// [`REFERENCE_AXIS`], the out-of-plane coordinate is dropped and the
/// shoelace area is taken regardless of winding. A throat with two or fewer
/// vertices, no usable normal, or non-finite coordinates has zero area.
#[must_use]
pub fn voronoi(offset_vertices: &[Vec<Point3>], normals: &[Vector3]) -> Vec<f64> {
    offset_vertices
        .iter()
        .enumerate()
        .map(|(throat, verts)| {
            if verts.len() <= 2 {
                tracing::trace!(throat, vertices = verts.len(), "degenerate throat polygon");
                return 0.0;
            }
            let Some(flat) = normals
                .get(throat)
                .and_then(|normal| rotate_and_chop(verts, normal, &REFERENCE_AXIS))
            else {
                tracing::trace!(throat, "throat has no usable normal");
                return 0.0;
            };
            let area = polygon_area_2d(&flat);
            if area.is_finite() {
                area
            } else {
                0.0
            }
        })
        .collect()
}
