//! Encoder implementation

use std::fmt;
use std::str::FromStr;

use crate::bits::ByteAccumulator;
use crate::classify::PixelClass;
use crate::error::{EncodeError, EncodeResult, UnknownPolicy};

/// What to do with intensities that are neither black nor white
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GrayPolicy {
    /// Skip the pixel entirely, shifting byte boundaries
    #[default]
    Skip,
    /// Stop with [`EncodeError::UnsupportedIntensity`]
    Error,
}

impl FromStr for GrayPolicy {
    type Err = UnknownPolicy;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "skip" => Ok(Self::Skip),
            "error" => Ok(Self::Error),
            _ => Err(UnknownPolicy(input.to_owned())),
        }
    }
}

impl fmt::Display for GrayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What to do with a trailing group of fewer than 8 classified bits
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Discard the partial group without emitting a token
    #[default]
    Discard,
    /// Stop with [`EncodeError::TruncatedInput`]
    Error,
    /// Zero-fill on the right and emit the final byte
    Pad,
}

impl FromStr for TailPolicy {
    type Err = UnknownPolicy;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "discard" => Ok(Self::Discard),
            "error" => Ok(Self::Error),
            "pad" => Ok(Self::Pad),
            _ => Err(UnknownPolicy(input.to_owned())),
        }
    }
}

impl fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard => f.write_str("discard"),
            Self::Error => f.write_str("error"),
            Self::Pad => f.write_str("pad"),
        }
    }
}

/// One completed byte of the packed bitstream
///
/// The `Display` form is the lowercase prefixed hexadecimal literal
/// with no zero padding: `0x0`, `0x1a`, `0xff`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexToken(u8);

impl HexToken {
    /// The packed byte
    pub fn byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The encoder
///
/// Holds the residue policies; [`Encoder::encode`] borrows neither the
/// encoder nor the input, so one encoder can run any number of passes.
#[derive(Debug, Copy, Clone, Default)]
pub struct Encoder {
    gray: GrayPolicy,
    tail: TailPolicy,
}

impl Encoder {
    /// Creates a new instance with the default policies
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the policy for unclassifiable intensities
    pub fn with_gray_policy(mut self, gray: GrayPolicy) -> Self {
        self.gray = gray;
        self
    }

    /// Select the policy for a trailing partial group
    pub fn with_tail_policy(mut self, tail: TailPolicy) -> Self {
        self.tail = tail;
        self
    }

    /// Encode a pixel intensity sequence into hexadecimal tokens
    ///
    /// Each token is yielded as soon as its eighth bit is known. With
    /// the default policies the iterator never yields `Err`.
    pub fn encode<I>(&self, pixels: I) -> HexTokens<I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        HexTokens {
            pixels: pixels.into_iter(),
            acc: ByteAccumulator::new(),
            gray: self.gray,
            tail: self.tail,
            index: 0,
            done: false,
        }
    }
}

/// Encode with the default policies
///
/// Gray pixels are skipped and a trailing partial group is discarded,
/// so the stream is infallible.
pub fn encode<I>(pixels: I) -> impl Iterator<Item = HexToken>
where
    I: IntoIterator<Item = u8>,
{
    // with both policies at their default, no Err is ever yielded
    Encoder::new().encode(pixels).filter_map(Result::ok)
}

/// Lazy stream of hexadecimal tokens over a pixel intensity sequence
#[derive(Debug)]
pub struct HexTokens<I> {
    pixels: I,
    acc: ByteAccumulator,
    gray: GrayPolicy,
    tail: TailPolicy,
    index: usize,
    done: bool,
}

impl<I: Iterator<Item = u8>> HexTokens<I> {
    fn finish(&mut self) -> Option<EncodeResult<HexToken>> {
        if self.acc.is_empty() {
            return None;
        }
        match self.tail {
            TailPolicy::Discard => {
                self.acc.reset();
                None
            }
            TailPolicy::Error => {
                let pending = self.acc.pending();
                self.acc.reset();
                Some(Err(EncodeError::TruncatedInput { pending }))
            }
            TailPolicy::Pad => self.acc.pad().map(|byte| Ok(HexToken(byte))),
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for HexTokens<I> {
    type Item = EncodeResult<HexToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let value = match self.pixels.next() {
                Some(value) => value,
                None => {
                    self.done = true;
                    return self.finish();
                }
            };
            let index = self.index;
            self.index += 1;
            let class = match PixelClass::of(value) {
                Some(class) => class,
                None => match self.gray {
                    GrayPolicy::Skip => continue,
                    GrayPolicy::Error => {
                        self.done = true;
                        return Some(Err(EncodeError::UnsupportedIntensity { value, index }));
                    }
                },
            };
            if let Some(byte) = self.acc.push(class.bit()) {
                return Some(Ok(HexToken(byte)));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.pixels.size_hint();
        // at most one token per 8 remaining pixels, plus a padded tail
        (0, upper.map(|n| n / 8 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::{encode, HexToken};

    #[test]
    fn test_hex_token_display() {
        assert_eq!(HexToken(0).to_string(), "0x0");
        assert_eq!(HexToken(1).to_string(), "0x1");
        assert_eq!(HexToken(0x1a).to_string(), "0x1a");
        assert_eq!(HexToken(0xff).to_string(), "0xff");
    }

    #[test]
    fn test_msb_first() {
        let pixels = [255, 0, 0, 255, 255, 0, 255, 0];
        let tokens: Vec<_> = encode(pixels.iter().copied()).collect();
        assert_eq!(tokens, vec![HexToken(0b10011010)]);
    }
}
