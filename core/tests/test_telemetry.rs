// Telemetry suite: counters track codec activity and snapshots serialize.

#[cfg(test)]
mod tests {
    use stego_core::codec::Codec;
    use stego_core::crypto::AesGcmEncryptor;
    use stego_core::telemetry::TelemetrySnapshot;
    use stego_core::template::{Bucket, Template};

    fn codec() -> Codec<AesGcmEncryptor> {
        let slots = 64;
        let mut fragments = vec![String::new()];
        for _ in 1..slots {
            fragments.push(" ".to_string());
        }
        fragments.push(String::new());

        let buckets = (0..slots)
            .map(|_| Bucket::new((0..256).map(|i| format!("w{}", i)).collect()).unwrap())
            .collect();
        let template = Template::new(0, fragments, buckets).unwrap();

        let encryptor = AesGcmEncryptor::new(&[7u8; 32]).unwrap();
        Codec::new(vec![template], &[3u8; 32], encryptor).unwrap()
    }

    #[test]
    fn counters_track_encode_and_decode() {
        let codec = codec();
        assert_eq!(codec.counters().encodes(), 0);

        let sentence = codec.encode(b"Secret message").unwrap();
        assert_eq!(codec.counters().encodes(), 1);
        assert_eq!(codec.counters().bytes_plaintext(), 14);
        assert_eq!(codec.counters().bytes_sentence(), sentence.len() as u64);

        codec.decode(&sentence).unwrap();
        assert_eq!(codec.counters().decodes(), 1);
        assert_eq!(codec.counters().decode_attempts(), 1);
        assert_eq!(codec.counters().decode_rejected(), 0);
        assert_eq!(codec.counters().bytes_plaintext(), 28);
    }

    #[test]
    fn failed_decode_counts_attempts_not_successes() {
        let codec = codec();
        assert!(codec.decode("nonsense input").is_err());

        assert_eq!(codec.counters().decodes(), 0);
        assert_eq!(codec.counters().decode_attempts(), 1);
    }

    #[test]
    fn snapshot_serializes_to_json_and_back() {
        let codec = codec();
        let sentence = codec.encode(b"telemetry check").unwrap();
        codec.decode(&sentence).unwrap();

        let snapshot = codec.telemetry();
        assert_eq!(snapshot.encodes, 1);
        assert_eq!(snapshot.decodes, 1);
        assert!(snapshot.expansion_ratio > 1.0); // sentences cost more bytes

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
