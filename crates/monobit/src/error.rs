use thiserror::Error;

/// An error when encoding a pixel intensity stream
///
/// Neither variant can occur with the default policies.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// An intensity that is neither pure black nor pure white
    #[error("unsupported intensity {value} at pixel {index}")]
    UnsupportedIntensity {
        /// The offending intensity
        value: u8,
        /// Position in the input sequence
        index: usize,
    },
    /// The classified bit count was not a multiple of 8
    #[error("input truncated: {pending} bits left over")]
    TruncatedInput {
        /// Number of bits in the unfinished group
        pending: u8,
    },
}

/// Type alias for convenience
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Failed to parse a policy name
#[derive(Debug, Error)]
#[error("Unknown policy `{0}`")]
pub struct UnknownPolicy(pub String);
