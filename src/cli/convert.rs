use std::fmt::{self, Write};
use std::io::Write as _;

use color_eyre::eyre;
use log::info;
use monobit::{Encoder, HexToken};

use super::opt::{Format, Options};

/// Render tokens as `", "`-separated hexadecimal literals
///
/// Every token is followed by `", "`, the last one included, and there
/// is no trailing newline.
pub fn write_hex(tokens: &[HexToken], out: &mut String) -> fmt::Result {
    for token in tokens {
        write!(out, "{}, ", token)?;
    }
    Ok(())
}

pub fn run(opt: Options) -> eyre::Result<()> {
    let img = image::open(&opt.file)?;
    let rgba = img.into_rgba8();
    info!(
        "Loaded image '{}' ({}x{})",
        opt.file.display(),
        rgba.width(),
        rgba.height()
    );

    let encoder = Encoder::new()
        .with_gray_policy(opt.gray_pixels)
        .with_tail_policy(opt.tail);

    // raster order, first channel only
    let mut tokens = Vec::new();
    for token in encoder.encode(rgba.pixels().map(|px| px.0[0])) {
        tokens.push(token?);
    }
    info!("Packed {} bytes", tokens.len());

    match &opt.format {
        Format::Hex => {
            let mut out = String::new();
            write_hex(&tokens, &mut out).unwrap();

            match &opt.out {
                Some(out_path) => {
                    std::fs::write(out_path, out)?;
                    info!("Saved hex stream as '{}'", out_path.display());
                }
                None => {
                    print!("{}", out);
                }
            }
        }
        Format::Raw => {
            let bytes: Vec<u8> = tokens.iter().map(|t| t.byte()).collect();

            match &opt.out {
                Some(out_path) => {
                    std::fs::write(out_path, &bytes)?;
                    info!("Saved packed bytes as '{}'", out_path.display());
                }
                None => {
                    std::io::stdout().write_all(&bytes)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use monobit::encode;

    use super::write_hex;

    #[test]
    fn test_write_hex_trailing_separator() {
        let mut pixels = vec![0; 8];
        pixels.extend_from_slice(&[255; 8]);
        let tokens: Vec<_> = encode(pixels).collect();
        let mut out = String::new();
        write_hex(&tokens, &mut out).unwrap();
        assert_eq!(out, "0x0, 0xff, ");
    }
}
