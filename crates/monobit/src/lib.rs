#![warn(missing_docs)]
//! 1bpp bitstream packing
//!
//! Classifies single-channel pixel intensities into black and white,
//! packs the resulting bits into bytes (MSB-first, in scan order) and
//! renders each completed byte as a hexadecimal token.

mod bits;
mod classify;
mod encode;
mod error;

pub use bits::ByteAccumulator;
pub use classify::PixelClass;
pub use encode::{encode, Encoder, GrayPolicy, HexToken, HexTokens, TailPolicy};
pub use error::{EncodeError, EncodeResult, UnknownPolicy};
