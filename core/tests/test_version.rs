#[cfg(test)]
mod tests {
    use firmware_core::headers::{FirmwareVersion, HeaderError, VersionComponent};

    #[test]
    fn parses_plain_versions() {
        assert_eq!(FirmwareVersion::parse("1.0.0").unwrap(), FirmwareVersion::new(1, 0, 0));
        assert_eq!(FirmwareVersion::parse("0.0.0").unwrap(), FirmwareVersion::new(0, 0, 0));
        assert_eq!(FirmwareVersion::parse("255.255.255").unwrap(), FirmwareVersion::new(255, 255, 255));
        assert_eq!("3.14.15".parse::<FirmwareVersion>().unwrap(), FirmwareVersion::new(3, 14, 15));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(FirmwareVersion::parse(" 1.2.3\n").unwrap(), FirmwareVersion::new(1, 2, 3));
    }

    #[test]
    fn rejects_wrong_shapes() {
        for bad in ["", "1", "1.0", "1.0.0.0", "1..0", ".1.0", "1.0.", "a.b.c", "1.0.x", "-1.0.0", "+1.0.0", "1.0.0-rc1", "1. 0.0"] {
            let err = FirmwareVersion::parse(bad).unwrap_err();
            match err {
                HeaderError::InvalidVersionFormat { ref input } => assert_eq!(input, bad),
                _ => panic!("{bad:?}: unexpected error: {err:?}"),
            }
        }
    }

    #[test]
    fn rejects_components_above_255() {
        let err = FirmwareVersion::parse("1.256.0").unwrap_err();
        match err {
            HeaderError::VersionComponentOutOfRange { component, ref value, max } => {
                assert_eq!(component, VersionComponent::Minor);
                assert_eq!(value, "256");
                assert_eq!(max, 255);
            }
            _ => panic!("unexpected error: {err:?}"),
        }

        let err = FirmwareVersion::parse("300.0.0").unwrap_err();
        assert_eq!(err.to_string(), "VersionComponentOutOfRange: major version 300 exceeds 255");

        let err = FirmwareVersion::parse("0.0.99999999999999999999").unwrap_err();
        match err {
            HeaderError::VersionComponentOutOfRange { component: VersionComponent::Patch, .. } => {}
            _ => panic!("unexpected error: {err:?}"),
        }
    }

    #[test]
    fn format_errors_win_over_range_errors() {
        let err = FirmwareVersion::parse("999.x.0").unwrap_err();
        assert_eq!(err.kind(), "InvalidVersionFormat");
    }

    #[test]
    fn one_zero_zero_packs_to_0x010000() {
        assert_eq!(FirmwareVersion::parse("1.0.0").unwrap().pack(), 0x010000);
    }

    #[test]
    fn unpack_is_inverse_of_pack() {
        let v = FirmwareVersion::new(12, 34, 56);
        assert_eq!(FirmwareVersion::unpack(v.pack()), v);
        assert_eq!(FirmwareVersion::unpack(0x00FF_0001), FirmwareVersion::new(255, 0, 1));
    }

    #[test]
    fn unpack_masks_bits_31_24() {
        assert_eq!(FirmwareVersion::unpack(0x8000_0000), FirmwareVersion::new(0, 0, 0));
        assert_eq!(FirmwareVersion::unpack(0xAB01_0203), FirmwareVersion::new(1, 2, 3));
    }

    #[test]
    fn display_roundtrips() {
        let v = FirmwareVersion::new(7, 0, 255);
        assert_eq!(v.to_string(), "7.0.255");
        assert_eq!(FirmwareVersion::parse(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn ordering_follows_semver_fields() {
        assert!(FirmwareVersion::new(1, 0, 0) > FirmwareVersion::new(0, 255, 255));
        assert!(FirmwareVersion::new(1, 2, 0) < FirmwareVersion::new(1, 2, 1));
    }
}
