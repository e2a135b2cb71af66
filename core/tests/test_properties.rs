// # 📦 Property-based tests for the header codec

#[cfg(test)]
mod tests {
    use firmware_core::constants::HEADER_LEN;
    use firmware_core::headers::FirmwareVersion;
    use firmware_core::image::{decode_and_verify, encode, ImageError};
    use proptest::prelude::*;

    fn version_triple() -> impl Strategy<Value = (u8, u8, u8)> {
        (any::<u8>(), any::<u8>(), any::<u8>())
    }

    proptest! {
        #[test]
        fn roundtrip_recovers_payload_and_version(
            payload in proptest::collection::vec(any::<u8>(), 0..2048),
            (major, minor, patch) in version_triple(),
        ) {
            let v = format!("{major}.{minor}.{patch}");
            let image = encode(&payload, &v).unwrap();
            let verified = decode_and_verify(image.as_bytes()).unwrap();
            prop_assert_eq!(verified.payload, payload.as_slice());
            prop_assert_eq!(verified.version.to_string(), v);
        }

        #[test]
        fn image_is_header_plus_payload(payload in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let image = encode(&payload, "1.0.0").unwrap();
            prop_assert_eq!(image.as_bytes().len(), HEADER_LEN + payload.len());
        }

        #[test]
        fn any_payload_bit_flip_is_hash_mismatch(
            payload in proptest::collection::vec(any::<u8>(), 1..512),
            pick in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let mut bytes = encode(&payload, "0.1.2").unwrap().into_bytes();
            let at = HEADER_LEN + pick.index(payload.len());
            bytes[at] ^= 1 << bit;
            let err = decode_and_verify(&bytes).unwrap_err();
            prop_assert_eq!(err.kind(), "HashMismatch");
        }

        #[test]
        fn any_magic_corruption_is_bad_magic(
            payload in proptest::collection::vec(any::<u8>(), 0..256),
            byte in 0usize..4,
            mask in 1u8..=255,
        ) {
            let mut bytes = encode(&payload, "1.2.3").unwrap().into_bytes();
            bytes[byte] ^= mask;
            let err = decode_and_verify(&bytes).unwrap_err();
            prop_assert_eq!(err.kind(), "BadMagic");
        }

        #[test]
        fn pack_unpack_bijection((major, minor, patch) in version_triple()) {
            let v = FirmwareVersion::new(major, minor, patch);
            let packed = v.pack();
            prop_assert_eq!(packed >> 24, 0);
            prop_assert_eq!((packed >> 16) & 0xFF, u32::from(major));
            prop_assert_eq!((packed >> 8) & 0xFF, u32::from(minor));
            prop_assert_eq!(packed & 0xFF, u32::from(patch));
            prop_assert_eq!(FirmwareVersion::unpack(packed), v);
        }

        #[test]
        fn components_above_255_never_wrap(value in 256u32..100_000, slot in 0usize..3) {
            let mut parts = ["1".to_string(), "2".to_string(), "3".to_string()];
            parts[slot] = value.to_string();
            let err = encode(b"x", &parts.join(".")).unwrap_err();
            prop_assert!(matches!(err, ImageError::Header(_)));
            prop_assert_eq!(err.kind(), "VersionComponentOutOfRange");
        }
    }
}
