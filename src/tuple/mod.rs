pub(crate) mod bounds;
mod fixed;
mod iter;

pub use fixed::FixedTuple;
