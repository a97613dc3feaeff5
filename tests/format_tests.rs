#[cfg(test)]
mod format_tests {
    use abogados_server::expediente::models::Estado;
    use abogados_server::reportes::format::{
        estado_bg_color, estado_color, estado_label, format_bytes, format_ratio, truncate,
    };

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0).unwrap(), "0 B");
    }

    #[test]
    fn test_format_bytes_exact_units() {
        assert_eq!(format_bytes(1024).unwrap(), "1 KB");
        assert_eq!(format_bytes(1024 * 1024).unwrap(), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024).unwrap(), "1 GB");
        assert_eq!(format_bytes(1024_i64.pow(4)).unwrap(), "1 TB");
    }

    #[test]
    fn test_format_bytes_trims_trailing_zeros() {
        assert_eq!(format_bytes(1536).unwrap(), "1.5 KB");
        assert_eq!(format_bytes(1024 + 256).unwrap(), "1.25 KB");
        assert_eq!(format_bytes(500).unwrap(), "500 B");
    }

    #[test]
    fn test_format_bytes_caps_at_terabytes() {
        // Por encima de TB no hay más unidades; el valor sigue creciendo.
        assert_eq!(format_bytes(1024_i64.pow(5)).unwrap(), "1024 TB");
    }

    #[test]
    fn test_format_bytes_negative_is_error() {
        assert!(format_bytes(-1).is_err());
    }

    #[test]
    fn test_estado_labels() {
        assert_eq!(estado_label(Estado::Abierto), "Abierto");
        assert_eq!(estado_label(Estado::EnTramite), "En Trámite");
        assert_eq!(estado_label(Estado::Suspendido), "Suspendido");
        assert_eq!(estado_label(Estado::Archivado), "Archivado");
        assert_eq!(estado_label(Estado::Cerrado), "Cerrado");
    }

    #[test]
    fn test_estado_colors_are_distinct() {
        for (i, a) in Estado::TODOS.iter().enumerate() {
            for b in Estado::TODOS.iter().skip(i + 1) {
                assert_ne!(estado_color(*a), estado_color(*b));
                assert_ne!(estado_bg_color(*a), estado_bg_color(*b));
            }
        }
    }

    #[test]
    fn test_truncate_within_budget_is_unchanged() {
        assert_eq!(truncate("corto", 45), "corto");
        let exacto = "a".repeat(45);
        assert_eq!(truncate(&exacto, 45), exacto);
    }

    #[test]
    fn test_truncate_over_budget_keeps_prefix_and_ellipsis() {
        let largo = "a".repeat(50);
        let recortado = truncate(&largo, 45);
        assert_eq!(recortado.chars().count(), 45);
        assert!(recortado.ends_with("..."));
        assert!(recortado.starts_with(&"a".repeat(42)));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // "ñ" ocupa dos bytes pero cuenta como un carácter.
        let texto = "ñ".repeat(10);
        assert_eq!(truncate(&texto, 10), texto);
        let recortado = truncate(&"ñ".repeat(11), 10);
        assert_eq!(recortado.chars().count(), 10);
        assert!(recortado.ends_with("..."));
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(3, 2), "1.5");
        assert_eq!(format_ratio(10, 4), "2.5");
        assert_eq!(format_ratio(1, 3), "0.3");
    }

    #[test]
    fn test_format_ratio_zero_denominator() {
        assert_eq!(format_ratio(5, 0), "0");
    }

    #[test]
    fn test_estado_try_from_roundtrip() {
        for estado in Estado::TODOS {
            assert_eq!(Estado::try_from(i32::from(estado)).unwrap(), estado);
        }
        assert!(Estado::try_from(0).is_err());
        assert!(Estado::try_from(6).is_err());
    }
}
