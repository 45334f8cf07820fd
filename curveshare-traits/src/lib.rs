#![warn(missing_docs, unused_imports)]

//! _This is a part of **curveshare**. For more information, head to the
//! [curveshare](https://crates.io/crates/curveshare) crate homepage._
//!
//! General traits for threshold secret-sharing schemes, along with the
//! randomness and security-level plumbing shared by the other curveshare
//! crates.

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// Concepts expressing the security level of a given scheme.
pub mod security;

/// General notion of a threshold secret-sharing scheme.
pub mod secret_sharing;

/// General error that arises when a modular inverse does not exist, for example because a
/// reconstruction was attempted with two shares carrying the same evaluation point.
#[derive(Debug, PartialEq, Eq)]
pub struct NonInvertibleError;
