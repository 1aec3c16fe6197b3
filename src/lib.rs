//! Fixed-size homogeneous tuples of `Copy` values, stored inline.
//!
//! [`FixedTuple<T, N>`] holds exactly `N` values of `T` with the layout of
//! `[T; N]`. Elements are reached either through a constant index checked at
//! build time ([`FixedTuple::get_const`]) or through a run-time index whose
//! bound is a debug-checked precondition ([`FixedTuple::element`]).
//!
//! Cargo features:
//! - `bytemuck` (default): `Zeroable`/`Pod` impls and byte views.
//! - `approx`: approximate equality for tuples of floats.
//! - `serde`: serialisation as a fixed-length sequence.
//!
//! The tests of the optional integrations only build with their feature
//! enabled, so run `cargo test --all-features` to cover them.

#[macro_use]
mod macros;

mod error;
mod interop;
pub mod tuple;

pub use error::TupleError;
pub use tuple::FixedTuple;
