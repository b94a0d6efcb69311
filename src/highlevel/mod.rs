//! High-level convenience API.
//!
//! This layer provides [`Hopfield`], an ergonomic wrapper that owns a
//! [`Recaller`](crate::network::Recaller) and delegates to the
//! [`kernel`](crate::kernel) and [`network`](crate::network) layers.
//!
//! For library code, prefer importing from [`kernel`](crate::kernel)
//! and [`network`](crate::network) directly.

pub mod client;

pub use client::Hopfield;
