#![warn(clippy::all)]

//! Offline generator for the single-color and rounding lookup tables
//! consumed by the BC7, S3TC and ETC2 block encoders. Each table is an
//! exhaustive answer to a small endpoint search problem, generated once
//! and emitted as C header source.

pub mod bc7;
pub mod bits;
pub mod bt709;
pub mod emit;
pub mod etc2;
pub mod s3tc;
pub mod weights;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
