// Property-based round-trip coverage: decode(encode(p)) == p for arbitrary
// plaintexts, and mixed-radix compose/decompose inversion.

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use num_bigint::BigUint;
    use proptest::prelude::*;
    use stego_core::codec::radix::{compose, decompose};
    use stego_core::codec::Codec;
    use stego_core::crypto::AesGcmEncryptor;
    use stego_core::template::{Bucket, Template};

    const MAX_PLAINTEXT: usize = 64;

    /// Shared codec whose single template covers the largest frame the
    /// property generates: 33 header bytes + MAX_PLAINTEXT ciphertext bytes.
    fn codec() -> &'static Codec<AesGcmEncryptor> {
        static CODEC: OnceLock<Codec<AesGcmEncryptor>> = OnceLock::new();
        CODEC.get_or_init(|| {
            let slots = 33 + MAX_PLAINTEXT;

            let mut fragments = Vec::with_capacity(slots + 1);
            fragments.push(String::new());
            for _ in 1..slots {
                fragments.push(" ".to_string());
            }
            fragments.push(String::new());

            let buckets = (0..slots)
                .map(|_| Bucket::new((0..256).map(|i| format!("w{}", i)).collect()).unwrap())
                .collect();
            let template = Template::new(0, fragments, buckets).unwrap();

            let encryptor = AesGcmEncryptor::new(&(0u8..32).collect::<Vec<_>>()).unwrap();
            Codec::new(vec![template], &[0x5Au8; 32], encryptor).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_roundtrip_arbitrary_plaintext(
            plaintext in proptest::collection::vec(any::<u8>(), 0..=MAX_PLAINTEXT)
        ) {
            let codec = codec();
            let sentence = codec.encode(&plaintext).unwrap();
            let recovered = codec.decode(&sentence).unwrap();
            prop_assert_eq!(recovered, plaintext);
        }

        #[test]
        fn prop_compose_inverts_decompose(
            radices in proptest::collection::vec(2usize..300, 1..12),
            value in any::<u64>()
        ) {
            // Clamp the value into the radix space so decomposition succeeds.
            let space = radices.iter().fold(BigUint::from(1u8), |acc, &r| acc * BigUint::from(r));
            let n = BigUint::from(value) % &space;

            let digits = decompose(n.clone(), &radices).unwrap();
            prop_assert_eq!(compose(&digits, &radices), n);
        }

        #[test]
        fn prop_digits_bounded_by_radices(
            radices in proptest::collection::vec(2usize..64, 1..8),
            value in any::<u32>()
        ) {
            let space = radices.iter().fold(BigUint::from(1u8), |acc, &r| acc * BigUint::from(r));
            let n = BigUint::from(value) % &space;

            let digits = decompose(n, &radices).unwrap();
            for (digit, radix) in digits.iter().zip(&radices) {
                prop_assert!(digit < radix);
            }
        }
    }
}
