// # 🧪 SHA-256 helpers

#[cfg(test)]
mod tests {
    use firmware_core::crypto::{digest_hex, sha256, verify_sha256, DigestError};

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest_hex(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest_hex(&sha256(b"ABC")),
            "b5d4045c3f466fa91fe2cc6abe79232a1a57cdf104f7a26e716e0a1e2789df78"
        );
    }

    #[test]
    fn verify_accepts_matching_digest() {
        let d = sha256(b"firmware");
        assert!(verify_sha256(b"firmware", &d).is_ok());
    }

    #[test]
    fn verify_reports_both_digests() {
        let expected = sha256(b"correct");
        let err = verify_sha256(b"tampered", &expected).unwrap_err();
        match err {
            DigestError::HashMismatch { expected: e, actual } => {
                assert_eq!(e, expected);
                assert_eq!(actual, sha256(b"tampered"));
            }
        }
        assert!(err.to_string().starts_with("HashMismatch: header records sha256 "));
        assert_eq!(err.kind(), "HashMismatch");
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(sha256(b"x"), sha256(b"x"));
        assert_ne!(sha256(b"x"), sha256(b"y"));
    }
}
