use proptest::prelude::*;

use skillmint_scoring::{compute_rarity, evidence_hash, AchievementScores, EvidenceFacts};
use skillmint_types::Timestamp;

proptest! {
    /// Rarity is deterministic for fixed inputs.
    #[test]
    fn rarity_deterministic(
        level in 1u8..=4,
        cq in 0u8..=100,
        ef in 0u8..=100,
        cr in 0u8..=100,
        bp in 0u8..=100,
        issued in 0u64..1_000_000,
    ) {
        let scores = AchievementScores::new(cq, ef, cr, bp);
        prop_assert_eq!(
            compute_rarity(level, &scores, issued),
            compute_rarity(level, &scores, issued)
        );
    }

    /// If every input of A dominates B, A's score is >= B's score.
    #[test]
    fn rarity_monotone_in_inputs(
        level_b in 1u8..=4,
        level_bump in 0u8..=3,
        base in prop::array::uniform4(0u8..=90),
        bumps in prop::array::uniform4(0u8..=10),
    ) {
        let level_a = (level_b + level_bump).min(4);
        let scores_b = AchievementScores::new(base[0], base[1], base[2], base[3]);
        let scores_a = AchievementScores::new(
            base[0] + bumps[0],
            base[1] + bumps[1],
            base[2] + bumps[2],
            base[3] + bumps[3],
        );
        let a = compute_rarity(level_a, &scores_a, 0);
        let b = compute_rarity(level_b, &scores_b, 0);
        prop_assert!(a.rarity_score >= b.rarity_score);
        prop_assert!(a.level >= b.level);
    }

    /// The stored score always fits the documented 0–100 scale.
    #[test]
    fn rarity_score_in_range(
        level in 0u8..=255,
        cq in 0u8..=255,
        ef in 0u8..=255,
        cr in 0u8..=255,
        bp in 0u8..=255,
    ) {
        let scores = AchievementScores {
            code_quality: Some(cq),
            efficiency: Some(ef),
            creativity: Some(cr),
            best_practices: Some(bp),
        };
        let info = compute_rarity(level, &scores, 0);
        prop_assert!(info.rarity_score <= 100);
    }

    /// Tampering with any single scalar fact changes the evidence digest.
    #[test]
    fn evidence_avalanche(
        id in "[a-z0-9]{4,16}",
        user in "[a-z0-9]{4,16}",
        score in 0.0f64..100.0,
        at in 0u64..2_000_000_000,
        delta in 1u64..10_000,
    ) {
        let facts = EvidenceFacts {
            assessment_id: id.clone(),
            user_id: user,
            total_score: score,
            completed_at: Timestamp::new(at),
            skills: vec![],
        };
        let original = evidence_hash(&facts);

        let mut moved = facts.clone();
        moved.completed_at = Timestamp::new(at + delta);
        prop_assert_ne!(original, evidence_hash(&moved));

        let mut renamed = facts;
        renamed.assessment_id = format!("{id}x");
        prop_assert_ne!(original, evidence_hash(&renamed));
    }
}
