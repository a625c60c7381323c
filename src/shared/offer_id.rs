//! Content-derived offer identifiers.
//!
//! The service names every offer by the base58 encoding of the SHA-256
//! digest of its offer file. Input bytes are hashed exactly as given.

use sha2::{Digest, Sha256};

/// Length in bytes of a decoded offer id.
pub const OFFER_ID_LEN: usize = 32;

/// Compute the service's id for an offer file given as raw bytes.
pub fn offer_id(offer: impl AsRef<[u8]>) -> String {
    let digest = Sha256::digest(offer.as_ref());
    bs58::encode(digest).into_string()
}

/// Compute the id of an offer file given as text (hashed as UTF-8).
pub fn offer_id_from_str(offer: &str) -> String {
    offer_id(offer.as_bytes())
}

/// Whether `id` has the shape of an offer id: base58 decoding to 32 bytes.
pub fn is_offer_id(id: &str) -> bool {
    bs58::decode(id)
        .into_vec()
        .map(|bytes| bytes.len() == OFFER_ID_LEN)
        .unwrap_or(false)
}

/// Check that `id` is the id of `offer`.
pub fn verify_offer_id(offer: impl AsRef<[u8]>, id: &str) -> bool {
    offer_id(offer) == id
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "offer1qqr83wcuu2rykcmqvpsxygqqwc7hynr6hum6e0mnf72sn7uvvkpt68eyumkhelprk0adeg42nlelk2mpafrgx923m0";

    #[test]
    fn test_empty_payload_golden() {
        assert_eq!(offer_id(b""), "GKot5hBsd81kMupNCXHaqbhv3huEbxAFMLnpcX2hniwn");
    }

    #[test]
    fn test_fixture_golden() {
        assert_eq!(
            offer_id_from_str(FIXTURE),
            "8orcVQtJLG79FKL2vZZyocdrCJSTCQ3g86DzMiBzLnCn"
        );
        assert_eq!(offer_id(FIXTURE.as_bytes()), offer_id_from_str(FIXTURE));
    }

    #[test]
    fn test_deterministic() {
        let first = offer_id(FIXTURE);
        for _ in 0..8 {
            assert_eq!(offer_id(FIXTURE), first);
        }
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(
            offer_id_from_str("offer1 with trailing space "),
            "CnwaBAHqDgdPLvwNbagb7RsFpguZxKYae6ZCYrZUA3uG"
        );
        assert_ne!(
            offer_id_from_str("offer1 with trailing space "),
            offer_id_from_str("offer1 with trailing space")
        );
        assert_ne!(offer_id_from_str("OFFER1"), offer_id_from_str("offer1"));
    }

    #[test]
    fn test_utf8_encoding() {
        assert_eq!(
            offer_id_from_str("Ünïcode offer"),
            "4g8Chs3oqyjQ7BDjbLGCERURAeNmXGT58pbqMSJwaZMr"
        );
    }

    #[test]
    fn test_is_offer_id() {
        assert!(is_offer_id("HR7aHbCXsJto7iS9uBkiiGJx6iGySxoNqUGQvrZfnj6B"));
        assert!(is_offer_id(&offer_id(b"anything")));
        assert!(!is_offer_id("0OIl"));
        assert!(!is_offer_id("abc"));
        assert!(!is_offer_id(""));
    }

    #[test]
    fn test_verify_offer_id() {
        assert!(verify_offer_id(FIXTURE, "8orcVQtJLG79FKL2vZZyocdrCJSTCQ3g86DzMiBzLnCn"));
        assert!(!verify_offer_id(FIXTURE, "GKot5hBsd81kMupNCXHaqbhv3huEbxAFMLnpcX2hniwn"));
    }
}
