use super::domain::{ImpactVector, PatternLabel};

pub fn total_impact(vector: ImpactVector) -> i64 {
    vector.values().map(i64::from).sum()
}

/// Compounded effect of repeating a decision `frequency` times a day for `duration_days`.
///
/// Magnitude is intentionally unbounded; it saturates at the `i64` limits instead of
/// wrapping.
pub fn butterfly_intensity(vector: ImpactVector, frequency: i64, duration_days: i64) -> i64 {
    total_impact(vector)
        .saturating_mul(frequency)
        .saturating_mul(duration_days)
}

/// Negative loops win ties: the negative count is checked first.
pub fn detect_pattern(vector: ImpactVector) -> PatternLabel {
    let negative_count = vector.values().filter(|value| *value < 0).count();
    let positive_count = vector.values().filter(|value| *value > 0).count();

    if negative_count >= 2 {
        PatternLabel::NegativeHabitLoop
    } else if positive_count >= 2 {
        PatternLabel::PositiveGrowthLoop
    } else {
        PatternLabel::NeutralMixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_fields() {
        assert_eq!(total_impact(ImpactVector::new(-3, -4, -2)), -9);
        assert_eq!(total_impact(ImpactVector::new(5, -2, 1)), 4);
        assert_eq!(total_impact(ImpactVector::ZERO), 0);
    }

    #[test]
    fn intensity_scales_by_frequency_and_duration() {
        let vector = ImpactVector::new(-3, -4, -2);
        assert_eq!(butterfly_intensity(vector, 2, 3), -54);
        assert_eq!(butterfly_intensity(vector, 1, 1), total_impact(vector));
    }

    #[test]
    fn intensity_saturates_instead_of_overflowing() {
        let vector = ImpactVector::new(5, 5, 5);
        assert_eq!(butterfly_intensity(vector, i64::MAX, 2), i64::MAX);
        assert_eq!(butterfly_intensity(vector, i64::MIN, 2), i64::MIN);
    }

    #[test]
    fn detects_negative_loop() {
        assert_eq!(
            detect_pattern(ImpactVector::new(-3, -4, -2)),
            PatternLabel::NegativeHabitLoop
        );
        assert_eq!(
            detect_pattern(ImpactVector::new(-1, -1, 5)),
            PatternLabel::NegativeHabitLoop
        );
    }

    #[test]
    fn detects_positive_loop() {
        assert_eq!(
            detect_pattern(ImpactVector::new(4, 3, 2)),
            PatternLabel::PositiveGrowthLoop
        );
        assert_eq!(
            detect_pattern(ImpactVector::new(4, 0, 1)),
            PatternLabel::PositiveGrowthLoop
        );
    }

    #[test]
    fn zero_and_single_sign_vectors_are_neutral() {
        assert_eq!(
            detect_pattern(ImpactVector::ZERO),
            PatternLabel::NeutralMixed
        );
        assert_eq!(
            detect_pattern(ImpactVector::new(-2, 0, 3)),
            PatternLabel::NeutralMixed
        );
    }
}
