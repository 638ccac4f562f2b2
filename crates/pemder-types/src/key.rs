/// The kind of key material recovered from a PEM document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// An ECDSA private scalar (32 bytes for P-256).
    EcdsaPrivateKey,
    /// An ECDSA public point, uncompressed (65 bytes for P-256).
    EcdsaPublicKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_eq() {
        assert_eq!(KeyKind::EcdsaPrivateKey, KeyKind::EcdsaPrivateKey);
        assert_ne!(KeyKind::EcdsaPrivateKey, KeyKind::EcdsaPublicKey);
    }
}
