//! Closest points between simple primitives.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_params,
};

mod closest_points_segment_segment;
