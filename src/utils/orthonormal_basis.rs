use crate::math::{Real, Vector};

/// Two unit vectors orthogonal to `n` and to each other.
///
/// `n` must be normalized.
// Robust and branchless implementation from Pixar:
// https://graphics.pixar.com/library/OrthonormalB/paper.pdf
pub fn orthonormal_basis(n: &Vector) -> [Vector; 2] {
    let sign = (1.0 as Real).copysign(n.z);
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    [
        Vector::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vector::new(b, sign + n.y * n.y * a, -n.y),
    ]
}
