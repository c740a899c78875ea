#[cfg(test)]
mod tests {
    use crate::asset_pipeline::common::error::AssetError;
    use crate::asset_pipeline::fragment::{
        emit_byte_array, emit_gamma_table, parse_array, verify_header, GammaParams, GammaTable,
        HexCase,
    };
    use crate::asset_pipeline::header::types::{EmbedConfig, GammaConfig};

    fn body_lines(lines: &[String]) -> &[String] {
        // #define, declaration ... closing `};`
        &lines[2..lines.len() - 1]
    }

    #[test]
    fn test_three_bytes_render_exactly() {
        let fragment = emit_byte_array(&[0x00, 0x0F, 0xFF], &EmbedConfig::default()).unwrap();

        assert_eq!(
            fragment.render(),
            "#define html_gz_len 3\nconst uint8_t html_gz[] PROGMEM = {\n0x00,0x0f,0xff\n};"
        );
        assert!(!fragment.trailing_newline());
    }

    #[test]
    fn test_uppercase_and_no_qualifier() {
        let config = EmbedConfig::builder()
            .symbol("logo")
            .hex_case(HexCase::Upper)
            .storage_qualifier(None)
            .build();
        let fragment = emit_byte_array(&[0xab, 0x0c], &config).unwrap();

        assert_eq!(
            fragment.lines(),
            ["#define logo_len 2", "const uint8_t logo[] = {", "0xAB,0x0C", "};"]
        );
    }

    #[test]
    fn test_exactly_one_line_at_break_boundary() {
        let blob = vec![0xaa; 1000];
        let fragment = emit_byte_array(&blob, &EmbedConfig::default()).unwrap();
        let body = body_lines(fragment.lines());

        assert_eq!(body.len(), 1);
        assert!(!body[0].ends_with(','));
        assert_eq!(body[0].split(',').count(), 1000);
    }

    #[test]
    fn test_break_before_index_1000() {
        let blob: Vec<u8> = (0..1001).map(|i| (i % 256) as u8).collect();
        let fragment = emit_byte_array(&blob, &EmbedConfig::default()).unwrap();
        let body = body_lines(fragment.lines());

        assert_eq!(body.len(), 2);
        assert!(body[0].ends_with("0xe7,"));
        assert_eq!(body[1], "0xe8");
        assert_eq!(body[0].matches("0x").count(), 1000);

        let parsed = parse_array(&fragment.render()).unwrap();
        assert_eq!(parsed.declared_len, Some(1001));
        assert_eq!(parsed.to_bytes().unwrap(), blob);
    }

    #[test]
    fn test_small_values_per_line() {
        let config = EmbedConfig::builder().values_per_line(2).build();
        let fragment = emit_byte_array(&[1, 2, 3, 4, 5], &config).unwrap();

        assert_eq!(body_lines(fragment.lines()), ["0x01,0x02,", "0x03,0x04,", "0x05"]);
    }

    #[test]
    fn test_empty_blob_is_rejected() {
        let result = emit_byte_array(&[], &EmbedConfig::default());
        assert!(matches!(result, Err(AssetError::EmptyBlob)));
    }

    #[test]
    fn test_invalid_symbol_is_rejected() {
        for symbol in ["", "9lives", "html-gz", "html gz"] {
            let config = EmbedConfig::builder().symbol(symbol).build();
            let result = emit_byte_array(&[1], &config);
            assert!(
                matches!(result, Err(AssetError::InvalidSymbol(_))),
                "{symbol:?} accepted"
            );
        }
    }

    #[test]
    fn test_zero_values_per_line_is_rejected() {
        let config = EmbedConfig::builder().values_per_line(0).build();
        assert!(matches!(
            emit_byte_array(&[1], &config),
            Err(AssetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_gamma_reference_levels() {
        let table = GammaTable::compute(GammaParams::default()).unwrap();

        assert_eq!(table.len(), 256);
        assert_eq!(table.level(0), Some(0));
        assert_eq!(table.level(27), Some(0));
        assert_eq!(table.level(28), Some(1));
        assert_eq!(table.level(64), Some(5));
        assert_eq!(table.level(128), Some(37));
        assert_eq!(table.level(200), Some(129));
        assert_eq!(table.level(255), Some(255));
        assert_eq!(table.level(256), None);
    }

    #[test]
    fn test_gamma_table_is_monotonic_and_bounded() {
        for (gamma, max_in, max_out) in [(2.8, 255, 255), (0.45, 255, 255), (2.2, 255, 1023), (1.0, 15, 255)] {
            let table = GammaTable::compute(GammaParams { gamma, max_in, max_out }).unwrap();

            assert_eq!(table.len(), max_in as usize + 1);
            assert!(table.levels().windows(2).all(|w| w[0] <= w[1]));
            assert!(table.levels().iter().all(|&level| level <= max_out));
            assert_eq!(table.levels()[max_in as usize], max_out);
        }
    }

    #[test]
    fn test_linear_gamma_is_identity() {
        let table = GammaTable::compute(GammaParams { gamma: 1.0, max_in: 255, max_out: 255 }).unwrap();
        assert!(table.levels().iter().enumerate().all(|(i, &level)| level == i as u32));
    }

    #[test]
    fn test_invalid_gamma_params() {
        for params in [
            GammaParams { gamma: 2.8, max_in: 0, max_out: 255 },
            GammaParams { gamma: 0.0, max_in: 255, max_out: 255 },
            GammaParams { gamma: -1.0, max_in: 255, max_out: 255 },
            GammaParams { gamma: f64::NAN, max_in: 255, max_out: 255 },
            GammaParams { gamma: 2.8, max_in: 70_000, max_out: 255 },
        ] {
            assert!(
                matches!(GammaTable::compute(params), Err(AssetError::InvalidGammaParams(_))),
                "{params:?} accepted"
            );
        }
    }

    #[test]
    fn test_gamma_header_layout() {
        let table = GammaTable::compute(GammaParams::default()).unwrap();
        let fragment = emit_gamma_table(&table, &GammaConfig::default()).unwrap();
        let lines = fragment.lines();

        assert_eq!(lines.len(), 4 + 16);
        assert_eq!(lines[2], "// correction factor of 2.8");
        assert!(lines[1].contains("8-bit colours"));
        assert_eq!(lines[3], "const static uint8_t PROGMEM gamma8[256] = {");
        assert_eq!(
            lines[4],
            "   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,"
        );
        assert!(lines[19].ends_with(" 249, 252, 255 };"));
        assert!(fragment.render().ends_with(" };\n"));

        let parsed = parse_array(&fragment.render()).unwrap();
        assert_eq!(parsed.declared_len, None);
        assert_eq!(parsed.values, table.levels());
    }

    #[test]
    fn test_gamma_wide_output_uses_wider_type() {
        let table = GammaTable::compute(GammaParams { gamma: 2.2, max_in: 255, max_out: 1023 }).unwrap();
        let fragment = emit_gamma_table(&table, &GammaConfig::default()).unwrap();

        assert!(fragment.lines()[1].contains("10-bit colours"));
        assert_eq!(fragment.lines()[3], "const static uint16_t PROGMEM gamma8[256] = {");
    }

    #[test]
    fn test_parse_accepts_decimal_and_trailing_comma() {
        let parsed = parse_array("int x[] = { 1, 0x02 ,3, };").unwrap();
        assert_eq!(parsed.values, vec![1, 2, 3]);
        assert_eq!(parsed.declared_len, None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_array("no braces"), Err(AssetError::MalformedArray(_))));
        assert!(matches!(parse_array("x = { 1,,2 }"), Err(AssetError::MalformedArray(_))));
        assert!(matches!(parse_array("x = { 0xzz }"), Err(AssetError::MalformedArray(_))));
        assert!(parse_array("x = { 256 }").unwrap().to_bytes().is_err());
    }

    #[test]
    fn test_verify_header_detects_mismatches() {
        let blob = [0x1f, 0x8b, 0x08];
        let header = emit_byte_array(&blob, &EmbedConfig::default()).unwrap().render();

        assert!(verify_header(&header, &blob).is_ok());
        assert!(matches!(
            verify_header(&header, &[0x1f, 0x8b]),
            Err(AssetError::VerificationFailed(_))
        ));
        assert!(matches!(
            verify_header(&header, &[0x1f, 0x8b, 0x09]),
            Err(AssetError::VerificationFailed(_))
        ));

        let lying = header.replace("html_gz_len 3", "html_gz_len 4");
        assert!(matches!(
            verify_header(&lying, &blob),
            Err(AssetError::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_verify_header_requires_length_constant() {
        let blob = [0x1f, 0x8b, 0x08];
        let header = emit_byte_array(&blob, &EmbedConfig::default()).unwrap().render();
        let without_len: String = header
            .lines()
            .filter(|line| !line.starts_with("#define"))
            .collect::<Vec<_>>()
            .join("\n");

        // the array alone still parses, it just cannot be verified
        assert_eq!(parse_array(&without_len).unwrap().values, vec![0x1f, 0x8b, 0x08]);
        assert!(matches!(
            verify_header(&without_len, &blob),
            Err(AssetError::VerificationFailed(_))
        ));
    }
}
