//! # Monochrome image to hex converter
#![warn(missing_docs)]

mod cli;

use cli::opt::Options;
use color_eyre::eyre;

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    cli::convert::run(opt)
}
