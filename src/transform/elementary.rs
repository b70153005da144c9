//! Single-motion transforms, one per DH parameter.

use super::Transform;
use crate::parameter::Parameter;

/// Joint angle: rotation about z.
pub fn rot_z(theta: impl Into<Parameter>) -> Transform {
    Transform::new(theta, 0, 0, 0)
}

/// Twist about the link's x axis.
pub fn rot_x(alpha: impl Into<Parameter>) -> Transform {
    Transform::new(0, 0, alpha, 0)
}

/// Joint offset along z.
pub fn trans_z(d: impl Into<Parameter>) -> Transform {
    Transform::new(0, d, 0, 0)
}

/// Link length along x.
pub fn trans_x(a: impl Into<Parameter>) -> Transform {
    Transform::new(0, 0, 0, a)
}
