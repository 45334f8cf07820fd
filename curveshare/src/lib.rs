#![warn(missing_docs, unused_imports)]

//! Shamir threshold secret sharing over the scalar field of the NIST P-256 curve, with share
//! values carried as elliptic-curve points so that a later extension can encrypt each share to
//! its recipient's public key.
//!
//! **Do not use this crate to protect real secrets.** None of the arithmetic is constant-time,
//! and the code has not been audited.

mod constants;

/// Elliptic-curve domain parameters, the affine group law, and the point wrapper.
pub mod curve;

/// Polynomials over a prime-order field.
pub mod polynomial;

/// Shamir's (t, n) threshold secret-sharing scheme.
pub mod shamir;

pub use curveshare_field;
pub use curveshare_traits;
