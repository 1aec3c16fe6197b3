//! Integrations with other crates, each behind the cargo feature of the same name.

#[cfg(feature = "approx")]
mod approx_eq;
#[cfg(feature = "bytemuck")]
mod pod;
#[cfg(feature = "serde")]
mod serialize;
