//! Pure risk scoring functions.

use landguard_risk_models::{AssessmentInputs, RiskColor, SoilType};

/// Weight of the rainfall fraction in the overall score.
pub const RAINFALL_WEIGHT: f64 = 0.4;
/// Weight of the slope fraction in the overall score.
pub const SLOPE_WEIGHT: f64 = 0.4;
/// Weight of the soil coefficient in the overall score.
pub const SOIL_WEIGHT: f64 = 0.2;

/// Upper bound of every input and of the resulting score.
const MAX_SCORE: u8 = 100;

/// Landslide susceptibility coefficient for a soil type.
///
/// Clay scores highest (least permeable), rock lowest.
#[must_use]
pub const fn soil_coefficient(soil: SoilType) -> f64 {
    match soil {
        SoilType::Clay => 0.8,
        SoilType::Sand => 0.6,
        SoilType::Rock => 0.4,
    }
}

/// Computes the overall risk percentage for a set of assessment inputs.
///
/// `0.4 * rainfall/100 + 0.4 * slope/100 + 0.2 * soil`, scaled to 0-100
/// and rounded to the nearest integer. Inputs above 100 are clamped.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn compute_aggregate_risk(inputs: &AssessmentInputs) -> u8 {
    let rainfall = f64::from(clamp_input("rainfall", inputs.rainfall)) / 100.0;
    let slope = f64::from(clamp_input("slope", inputs.slope)) / 100.0;
    let soil = soil_coefficient(inputs.soil_type);

    let score = (rainfall * RAINFALL_WEIGHT + slope * SLOPE_WEIGHT + soil * SOIL_WEIGHT) * 100.0;

    score.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Maps a risk score to a gray overlay color.
///
/// `intensity = floor(255 * (1 - risk/100))`, so zero risk is white and
/// full risk is black. Out-of-range scores are clamped; `NaN` is treated
/// as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn risk_to_color(risk: f64) -> RiskColor {
    let risk = if risk.is_nan() {
        log::warn!("risk_to_color called with NaN, treating as 0");
        0.0
    } else {
        risk.clamp(0.0, f64::from(MAX_SCORE))
    };

    let intensity = (255.0 * (1.0 - risk / 100.0)).floor();
    RiskColor::gray(intensity.clamp(0.0, 255.0) as u8)
}

fn clamp_input(field: &str, value: u8) -> u8 {
    if value > MAX_SCORE {
        log::warn!("Assessment input {field}={value} exceeds {MAX_SCORE}, clamping");
        MAX_SCORE
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(rainfall: u8, slope: u8, soil_type: SoilType) -> AssessmentInputs {
        AssessmentInputs {
            rainfall,
            slope,
            soil_type,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((RAINFALL_WEIGHT + SLOPE_WEIGHT + SOIL_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn saturated_clay_scores_96() {
        assert_eq!(compute_aggregate_risk(&inputs(100, 100, SoilType::Clay)), 96);
    }

    #[test]
    fn dry_flat_rock_scores_8() {
        assert_eq!(compute_aggregate_risk(&inputs(0, 0, SoilType::Rock)), 8);
    }

    #[test]
    fn default_inputs_score_56() {
        assert_eq!(compute_aggregate_risk(&AssessmentInputs::default()), 56);
    }

    #[test]
    fn sand_sits_between_clay_and_rock() {
        assert_eq!(compute_aggregate_risk(&inputs(0, 0, SoilType::Sand)), 12);
        assert_eq!(compute_aggregate_risk(&inputs(0, 0, SoilType::Clay)), 16);
    }

    #[test]
    fn clamps_out_of_range_inputs() {
        assert_eq!(
            compute_aggregate_risk(&inputs(250, 180, SoilType::Clay)),
            compute_aggregate_risk(&inputs(100, 100, SoilType::Clay))
        );
    }

    #[test]
    fn color_endpoints() {
        assert_eq!(risk_to_color(0.0), RiskColor::WHITE);
        assert_eq!(risk_to_color(100.0), RiskColor::BLACK);
        assert_eq!(risk_to_color(50.0), RiskColor::gray(127));
    }

    #[test]
    fn color_clamps_out_of_range_risk() {
        assert_eq!(risk_to_color(-20.0), RiskColor::WHITE);
        assert_eq!(risk_to_color(180.0), RiskColor::BLACK);
        assert_eq!(risk_to_color(f64::NAN), RiskColor::WHITE);
    }

    fn soil() -> impl Strategy<Value = SoilType> {
        prop_oneof![
            Just(SoilType::Clay),
            Just(SoilType::Sand),
            Just(SoilType::Rock)
        ]
    }

    proptest! {
        #[test]
        fn aggregate_risk_stays_in_range(rainfall in 0u8..=100, slope in 0u8..=100, soil in soil()) {
            let risk = compute_aggregate_risk(&inputs(rainfall, slope, soil));
            prop_assert!(risk <= 100);
        }

        #[test]
        fn aggregate_risk_non_decreasing_in_rainfall(
            a in 0u8..=100,
            b in 0u8..=100,
            slope in 0u8..=100,
            soil in soil(),
        ) {
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assert!(
                compute_aggregate_risk(&inputs(lo, slope, soil))
                    <= compute_aggregate_risk(&inputs(hi, slope, soil))
            );
        }

        #[test]
        fn aggregate_risk_non_decreasing_in_slope(
            a in 0u8..=100,
            b in 0u8..=100,
            rainfall in 0u8..=100,
            soil in soil(),
        ) {
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assert!(
                compute_aggregate_risk(&inputs(rainfall, lo, soil))
                    <= compute_aggregate_risk(&inputs(rainfall, hi, soil))
            );
        }

        #[test]
        fn clay_never_scores_below_rock(rainfall in 0u8..=100, slope in 0u8..=100) {
            prop_assert!(
                compute_aggregate_risk(&inputs(rainfall, slope, SoilType::Clay))
                    >= compute_aggregate_risk(&inputs(rainfall, slope, SoilType::Rock))
            );
        }

        #[test]
        fn color_darkens_monotonically(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lighter = risk_to_color(lo);
            let darker = risk_to_color(hi);
            prop_assert!(lighter.r >= darker.r);
            prop_assert_eq!(darker.r, darker.g);
            prop_assert_eq!(darker.g, darker.b);
        }
    }
}
