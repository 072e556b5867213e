mod barycentric;
mod closest_point;
mod range;

pub use barycentric::{horizontal_barycentric, Barycentric, DEGENERATE_EPSILON};
pub use closest_point::closest_point_on_triangle;
pub use range::{clamp_range, snap_below};
