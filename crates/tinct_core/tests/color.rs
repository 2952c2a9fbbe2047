use tinct_core::{Color, ColorError, DisplayMetrics, HexColor};

#[test]
fn hex_literals_convert_to_rgba() {
    let blue: Color = (&HexColor::from_static("#1e3a8a")).try_into().unwrap();
    assert_eq!(blue, Color::from_hex(0x1E3A8A));
    assert_eq!(blue.to_array()[3], 1.0);

    let faded = HexColor::from_static("#0008").to_color().unwrap();
    assert_eq!(faded, Color::BLACK.with_alpha(136.0 / 255.0));
}

#[test]
fn conversion_errors_name_the_literal() {
    let err = HexColor::new(String::from("#12")).to_color().unwrap_err();
    assert_eq!(
        err,
        ColorError::InvalidLength {
            literal: "#12".to_string(),
            len: 2
        }
    );
    assert!(err.to_string().contains("\"#12\""));
}

#[test]
fn hairline_never_exceeds_one_point() {
    for scale in [0.75, 1.0, 1.5, 2.0, 2.625, 3.0, 3.5, 4.0] {
        let width = DisplayMetrics::new(scale).hairline_width();
        assert!(width > 0.0 && width <= 4.0 / 3.0, "scale {scale}: {width}");
    }
}
