//! Various unsorted geometrical and logical operators.

pub use self::bounded_buffer::{BoundedBuffer, BufferFull};
pub use self::ccw_face_normal::ccw_face_normal;
pub(crate) use self::inv::inv;
pub use self::orthonormal_basis::orthonormal_basis;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod bounded_buffer;
mod ccw_face_normal;
mod inv;
mod orthonormal_basis;
mod point_cloud_support_point;
mod sorted_pair;
