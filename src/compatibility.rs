//! Synastry scoring: a single similarity score in `[0, 1]` between two
//! birth charts, summed from four independent sub-scores.

use crate::{Aspect, BirthChart, ZodiacSign};

const ELEMENT_MATCH_WEIGHT: f64 = 0.1;
// Three matches come to 0.201, a hair over the nominal 0.2 cap; the final
// [0, 1] clamp absorbs the overshoot.
const MODALITY_MATCH_WEIGHT: f64 = 0.067;
const ASPECT_SUM_CAP: f64 = 0.3;
const SUN_MATCH_WEIGHT: f64 = 0.1;
const MOON_MATCH_WEIGHT: f64 = 0.07;
const RISING_MATCH_WEIGHT: f64 = 0.03;

fn positions(chart: &BirthChart) -> [ZodiacSign; 3] {
    [chart.sun_sign, chart.moon_sign, chart.rising_sign]
}

/// Element agreement, paired by position: sun with sun, moon with moon,
/// rising with rising. At most 0.3.
fn element_score(a: &BirthChart, b: &BirthChart) -> f64 {
    let matches = positions(a)
        .iter()
        .zip(positions(b).iter())
        .filter(|(x, y)| x.element() == y.element())
        .count();
    matches as f64 * ELEMENT_MATCH_WEIGHT
}

/// Modality agreement, paired by position. At most 0.201.
fn modality_score(a: &BirthChart, b: &BirthChart) -> f64 {
    let matches = positions(a)
        .iter()
        .zip(positions(b).iter())
        .filter(|(x, y)| x.modality() == y.modality())
        .count();
    matches as f64 * MODALITY_MATCH_WEIGHT
}

/// Aspect contributions over all nine cross pairs of sign degrees, with the
/// sum clamped into `[0, 0.3]`. A net-negative total floors to zero here
/// rather than dragging the final score down.
fn aspect_score(a: &BirthChart, b: &BirthChart) -> f64 {
    let mut total = 0.0;
    for sign_a in positions(a) {
        for sign_b in positions(b) {
            if let Some(aspect) = Aspect::between(sign_a.degree(), sign_b.degree()) {
                total += aspect.weight();
            }
        }
    }
    total.clamp(0.0, ASPECT_SUM_CAP)
}

/// Exact same-sign matches, position by position. At most 0.2.
fn direct_match_score(a: &BirthChart, b: &BirthChart) -> f64 {
    let mut total = 0.0;
    if a.sun_sign == b.sun_sign {
        total += SUN_MATCH_WEIGHT;
    }
    if a.moon_sign == b.moon_sign {
        total += MOON_MATCH_WEIGHT;
    }
    if a.rising_sign == b.rising_sign {
        total += RISING_MATCH_WEIGHT;
    }
    total
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compatibility score between two charts: element + modality + aspect +
/// direct-match sub-scores, clamped to `[0, 1]` and rounded to 2 decimals.
/// Symmetric in its arguments; never fails.
pub fn score(a: &BirthChart, b: &BirthChart) -> f64 {
    let total =
        element_score(a, b) + modality_score(a, b) + aspect_score(a, b) + direct_match_score(a, b);
    round_to_hundredths(total.clamp(0.0, 1.0))
}
