use std::{fmt, path::PathBuf, str::FromStr};

use monobit::{GrayPolicy, TailPolicy};

/// The format to emit the packed bytes in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// Hexadecimal byte literals, `", "`-separated
    Hex,
    /// The packed bytes themselves
    Raw,
}

#[derive(Debug)]
/// Failed to parse a format name
pub struct FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `hex` or `raw`")?;
        Ok(())
    }
}

impl std::error::Error for FormatError {}

impl Default for Format {
    fn default() -> Self {
        Format::Hex
    }
}

impl FromStr for Format {
    type Err = FormatError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "hex" => Ok(Self::Hex),
            "raw" | "bin" => Ok(Self::Raw),
            _ => Err(FormatError {}),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

/// OPTIONS
#[derive(clap::Parser)]
pub struct Options {
    /// The image to convert
    pub file: PathBuf,
    /// Where to store the output (defaults to the console)
    #[clap(long = "out", short = 'O')]
    pub out: Option<PathBuf>,
    /// Format of the output. Valid choices are:
    ///
    /// "hex" and "raw"
    #[clap(default_value_t, long, short = 'F')]
    pub format: Format,
    /// What to do with pixels that are neither black nor white.
    ///
    /// "skip" drops them from the stream, "error" aborts.
    #[clap(default_value_t, long = "gray-pixels")]
    pub gray_pixels: GrayPolicy,
    /// What to do with a trailing group of fewer than 8 bits.
    ///
    /// "discard" drops it, "error" aborts, "pad" zero-fills to a byte.
    #[clap(default_value_t, long = "tail")]
    pub tail: TailPolicy,
}
