//! Orthonormal basis construction around a direction.

use crate::Vec3;

/// Build two vectors `(b, c)` completing `a` to an orthonormal frame.
///
/// `c` is built perpendicular to `a` from whichever of the x/y components is
/// larger, so the normalising length never collapses when `a` lines up with
/// an axis. `b = c x a`. For unit `a` the triple `(b, c, a)` is a
/// right-handed orthonormal basis.
pub fn build_orthonormal_basis(a: Vec3) -> (Vec3, Vec3) {
    let c = if a.x.abs() > a.y.abs() {
        let inv_len = 1.0 / (a.x * a.x + a.z * a.z).sqrt();
        Vec3::new(a.z * inv_len, 0.0, -a.x * inv_len)
    } else {
        let inv_len = 1.0 / (a.y * a.y + a.z * a.z).sqrt();
        Vec3::new(0.0, a.z * inv_len, -a.y * inv_len)
    };
    let b = c.cross(a);
    (b, c)
}
