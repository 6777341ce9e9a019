use proptest::prelude::*;

use skillmint_types::{EvidenceHash, RarityTier, Timestamp, TxRef};

proptest! {
    /// TxRef roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn tx_ref_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let tx = TxRef::new(bytes);
        prop_assert_eq!(tx.as_bytes(), &bytes);
    }

    /// TxRef::is_zero is true only for all-zero bytes.
    #[test]
    fn tx_ref_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let tx = TxRef::new(bytes);
        prop_assert_eq!(tx.is_zero(), bytes == [0u8; 32]);
    }

    /// EvidenceHash bincode serialization roundtrip.
    #[test]
    fn evidence_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = EvidenceHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: EvidenceHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded.as_bytes(), hash.as_bytes());
    }

    /// Tier assignment is a monotone step function of the score.
    #[test]
    fn tier_is_monotone_in_score(a in 0u8..=100, b in 0u8..=100) {
        if a <= b {
            prop_assert!(RarityTier::from_score(a) <= RarityTier::from_score(b));
        }
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
    }

    /// plus_secs never goes backwards, even at the saturation boundary.
    #[test]
    fn timestamp_plus_secs_monotone(base in 0u64..u64::MAX, add in 0u64..u64::MAX) {
        let t = Timestamp::new(base);
        prop_assert!(t.plus_secs(add) >= t);
    }
}
