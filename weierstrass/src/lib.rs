#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for [`CurveParams`], encoding each integer as
//! big-endian bytes (hex in human-readable formats).
//!
//! ## `dev` feature
//!
//! Exposes the [`dev`] module with sample curves (secp256k1 and small toy
//! curves) for use in tests and benchmarks.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod modular;

#[cfg(any(feature = "dev", test))]
pub mod dev;

mod affine;
mod curve;
mod encoding;
mod error;
mod params;
mod point;

pub use crate::{
    affine::AffinePoint,
    curve::Curve,
    error::{Error, Result},
    params::CurveParams,
    point::Point,
};
pub use num_bigint::{self, BigInt, BigUint};
pub use sec1::point::Tag;
