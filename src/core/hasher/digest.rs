//! Digest computation backed by the RustCrypto hash crates.

use super::HashAlgorithmKind;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Hash `data` with `D` and render it as lowercase hexadecimal
fn hex_of<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Compute the lowercase hex digest of `data` under `algorithm`
pub fn hex_digest(algorithm: HashAlgorithmKind, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithmKind::Md5 => hex_of::<Md5>(data),
        HashAlgorithmKind::Sha1 => hex_of::<Sha1>(data),
        HashAlgorithmKind::Sha256 => hex_of::<Sha256>(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_of_known_words() {
        assert_eq!(
            hex_digest(HashAlgorithmKind::Md5, b"cat"),
            "d077f244def8a70e5ea758bd8352fcd8"
        );
        assert_eq!(
            hex_digest(HashAlgorithmKind::Md5, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn sha1_of_known_word() {
        assert_eq!(
            hex_digest(HashAlgorithmKind::Sha1, b"dog"),
            "e49512524f47b4138d850c9d9d85972927281da0"
        );
    }

    #[test]
    fn sha256_of_known_word() {
        assert_eq!(
            hex_digest(HashAlgorithmKind::Sha256, b"fish"),
            "b474a99a2705e23cf905a484ec6d14ef58b56bbe62e9292783466ec363b5072d"
        );
    }

    #[test]
    fn digest_is_deterministic() {
        for kind in HashAlgorithmKind::ALL {
            assert_eq!(hex_digest(kind, b"password"), hex_digest(kind, b"password"));
        }
    }

    #[test]
    fn digest_length_matches_kind() {
        for kind in HashAlgorithmKind::ALL {
            assert_eq!(hex_digest(kind, b"x").len(), kind.digest_len());
        }
    }
}
