use monobit::{encode, EncodeError, Encoder, GrayPolicy, TailPolicy};

fn hex(pixels: &[u8]) -> Vec<String> {
    encode(pixels.iter().copied())
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn empty_input_yields_nothing() {
    assert!(hex(&[]).is_empty());
}

#[test]
fn eight_black_pixels() {
    assert_eq!(hex(&[0; 8]), vec!["0x0"]);
}

#[test]
fn eight_white_pixels() {
    assert_eq!(hex(&[255; 8]), vec!["0xff"]);
}

#[test]
fn seven_black_one_white() {
    assert_eq!(hex(&[0, 0, 0, 0, 0, 0, 0, 255]), vec!["0x1"]);
}

#[test]
fn one_token_per_eight_classified_pixels() {
    let mut pixels = Vec::new();
    for _ in 0..6 {
        pixels.extend_from_slice(&[0, 255, 0, 255, 0, 255, 0, 255]);
    }
    assert_eq!(hex(&pixels), vec!["0x55"; 6]);
}

#[test]
fn partial_group_is_discarded() {
    assert!(hex(&[0, 255, 0, 255, 255]).is_empty());
    assert_eq!(hex(&[255; 11]), vec!["0xff"]);
}

#[test]
fn gray_pixel_is_skipped() {
    // the 128 contributes nothing, so the 255 still lands in byte one
    assert_eq!(hex(&[0, 0, 0, 0, 0, 0, 0, 128, 255]), vec!["0x1"]);
}

#[test]
fn skipped_pixels_shift_byte_boundaries() {
    // seven black pixels, two unclassified, one white
    let pixels = [0, 64, 0, 0, 0, 192, 0, 0, 0, 255];
    assert_eq!(hex(&pixels), vec!["0x1"]);
}

#[test]
fn encoding_is_deterministic() {
    let pixels: Vec<u8> = (0..64)
        .map(|i| match i % 3 {
            0 => 0,
            1 => 255,
            _ => 128,
        })
        .collect();
    let first = hex(&pixels);
    assert_eq!(first.len(), 5);
    assert_eq!(first, hex(&pixels));
}

#[test]
fn output_depends_on_scan_order() {
    let pixels = [255, 0, 0, 0, 0, 0, 0, 0];
    let reversed: Vec<u8> = pixels.iter().rev().copied().collect();
    assert_eq!(hex(&pixels), vec!["0x80"]);
    assert_eq!(hex(&reversed), vec!["0x1"]);
}

#[test]
fn tokens_are_lazy() {
    // endless input, but the first token is available after 8 pixels
    let mut tokens = encode(std::iter::repeat(255));
    assert_eq!(tokens.next().map(|t| t.byte()), Some(0xff));
}

#[test]
fn gray_policy_error_reports_position() {
    let encoder = Encoder::new().with_gray_policy(GrayPolicy::Error);
    let mut tokens = encoder.encode([0, 0, 7].iter().copied());
    assert_eq!(
        tokens.next(),
        Some(Err(EncodeError::UnsupportedIntensity { value: 7, index: 2 }))
    );
    assert_eq!(tokens.next(), None);
}

#[test]
fn tail_policy_error_reports_pending_bits() {
    let encoder = Encoder::new().with_tail_policy(TailPolicy::Error);
    let mut tokens = encoder.encode([255; 10].iter().copied());
    assert_eq!(tokens.next().map(|r| r.map(|t| t.byte())), Some(Ok(0xff)));
    assert_eq!(
        tokens.next(),
        Some(Err(EncodeError::TruncatedInput { pending: 2 }))
    );
    assert_eq!(tokens.next(), None);
}

#[test]
fn tail_policy_pad_fills_zeroes_on_the_right() {
    let encoder = Encoder::new().with_tail_policy(TailPolicy::Pad);
    let tokens: Vec<_> = encoder
        .encode([255; 5].iter().copied())
        .map(|r| r.map(|t| t.byte()))
        .collect();
    assert_eq!(tokens, vec![Ok(0b11111000)]);
}

#[test]
fn full_group_is_not_padded_twice() {
    let encoder = Encoder::new().with_tail_policy(TailPolicy::Pad);
    let tokens: Vec<_> = encoder
        .encode([0; 8].iter().copied())
        .map(|r| r.map(|t| t.byte()))
        .collect();
    assert_eq!(tokens, vec![Ok(0x00)]);
}
