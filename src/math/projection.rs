use std::f64::consts::PI;

use nalgebra::Unit;

use super::{Point2, Point3, Rotation3, Vector3, TOLERANCE};

/// Returns the rotation that maps the direction of `from` onto the direction
/// of `to`.
///
/// Opposite directions are handled with a half-turn about an axis
/// perpendicular to `from`. Returns `None` if either vector is zero-length or
/// not finite.
#[must_use]
pub fn rotation_between(from: &Vector3, to: &Vector3) -> Option<Rotation3> {
    if !is_usable(from) || !is_usable(to) {
        return None;
    }
    if let Some(rot) = Rotation3::rotation_between(from, to) {
        return Some(rot);
    }

    // Antiparallel: pick the coordinate axis least aligned with `from`.
    let a = from.abs();
    let helper = if a.x <= a.y && a.x <= a.z {
        Vector3::x()
    } else if a.y <= a.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    let perp = from.cross(&helper);
    Some(Rotation3::from_axis_angle(&Unit::new_normalize(perp), PI))
}

/// Rotates a 3D vertex loop so that `normal` aligns with `axis`, then drops
/// the coordinate along `axis`.
///
/// The returned 2D points keep the input order. Returns `None` when `normal`
/// or `axis` cannot define a rotation.
#[must_use]
pub fn rotate_and_chop(points: &[Point3], normal: &Vector3, axis: &Vector3) -> Option<Vec<Point2>> {
    let to_axis = rotation_between(normal, axis)?;
    let to_z = rotation_between(axis, &Vector3::z())?;
    let rot = to_z * to_axis;
    Some(
        points
            .iter()
            .map(|p| {
                let q = rot * p;
                Point2::new(q.x, q.y)
            })
            .collect(),
    )
}

fn is_usable(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite()) && v.norm() > TOLERANCE
}
