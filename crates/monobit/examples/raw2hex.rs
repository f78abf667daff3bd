use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use monobit::encode;

#[derive(clap::Parser)]
/// pack a file of raw intensity bytes and print the hex stream
struct Options {
    /// path to input file
    file: PathBuf,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let opt: Options = Options::parse();
    let buffer = std::fs::read(&opt.file)?;

    for token in encode(buffer) {
        print!("{}, ", token);
    }
    Ok(())
}
