//! First-order astronomical kernel: civil date/time to Julian day, lunar
//! ecliptic longitude, and sidereal time.
//!
//! The lunar longitude uses the principal periodic terms of the standard
//! lunar theory on top of polynomial mean elements. Worst-case truncation
//! error is a few hundredths of a degree, far inside the 30-degree sign
//! buckets the chart calculator feeds it into.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

pub type JulianDay = f64;

/// J2000.0 epoch as a Julian day.
pub const J2000: JulianDay = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Wraps a degree value into `[0, 360)`. Idempotent under adding 360.
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Converts a civil date and time, taken as UT, into a Julian day.
pub fn julian_day(date: NaiveDate, time: NaiveTime) -> JulianDay {
    let day_fraction =
        (time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0) / 24.0;

    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64 + day_fraction;

    // January and February count as months 13 and 14 of the previous year.
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

fn centuries_since_j2000(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Periodic terms for the Moon's longitude: coefficient in millionths of a
/// degree, and integer multipliers of the mean elements (D, M, M', F).
const LUNAR_LONGITUDE_TERMS: [(f64, f64, f64, f64, f64); 32] = [
    (6_288_774.0, 0.0, 0.0, 1.0, 0.0),
    (1_274_027.0, 2.0, 0.0, -1.0, 0.0),
    (658_314.0, 2.0, 0.0, 0.0, 0.0),
    (213_618.0, 0.0, 0.0, 2.0, 0.0),
    (-185_116.0, 0.0, 1.0, 0.0, 0.0),
    (-114_332.0, 0.0, 0.0, 0.0, 2.0),
    (58_793.0, 2.0, 0.0, -2.0, 0.0),
    (57_066.0, 2.0, -1.0, -1.0, 0.0),
    (53_322.0, 2.0, 0.0, 1.0, 0.0),
    (45_758.0, 2.0, -1.0, 0.0, 0.0),
    (-40_923.0, 0.0, 1.0, -1.0, 0.0),
    (-34_720.0, 1.0, 0.0, 0.0, 0.0),
    (-30_383.0, 0.0, 1.0, 1.0, 0.0),
    (15_327.0, 2.0, 0.0, 0.0, -2.0),
    (-12_528.0, 0.0, 0.0, 1.0, 2.0),
    (10_980.0, 0.0, 0.0, 1.0, -2.0),
    (10_675.0, 4.0, 0.0, -1.0, 0.0),
    (10_034.0, 0.0, 0.0, 3.0, 0.0),
    (8_548.0, 4.0, 0.0, -2.0, 0.0),
    (-7_888.0, 2.0, 1.0, -1.0, 0.0),
    (-6_766.0, 2.0, 1.0, 0.0, 0.0),
    (-5_163.0, 1.0, 0.0, -1.0, 0.0),
    (4_987.0, 1.0, 1.0, 0.0, 0.0),
    (4_036.0, 2.0, -1.0, 1.0, 0.0),
    (3_994.0, 2.0, 0.0, 2.0, 0.0),
    (3_861.0, 4.0, 0.0, 0.0, 0.0),
    (3_665.0, 2.0, 0.0, -3.0, 0.0),
    (-2_689.0, 0.0, 1.0, -2.0, 0.0),
    (-2_602.0, 2.0, 0.0, -1.0, 2.0),
    (2_390.0, 2.0, -1.0, -2.0, 0.0),
    (-2_348.0, 1.0, 0.0, 1.0, 0.0),
    (2_236.0, 2.0, -2.0, 0.0, 0.0),
];

/// Geocentric ecliptic longitude of the Moon in degrees, `[0, 360)`.
pub fn moon_ecliptic_longitude(jd: JulianDay) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, solar anomaly, lunar anomaly, argument of latitude.
    let l_prime = normalize_degrees(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
    );
    let d = normalize_degrees(
        297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
    );
    let m = normalize_degrees(
        357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
    );
    let m_prime = normalize_degrees(
        134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
    );
    let f = normalize_degrees(
        93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    );

    // Terms involving the solar anomaly shrink with Earth's orbital eccentricity.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0;
    for &(coefficient, c_d, c_m, c_mp, c_f) in &LUNAR_LONGITUDE_TERMS {
        let argument = (c_d * d + c_m * m + c_mp * m_prime + c_f * f).to_radians();
        let mut term = coefficient * argument.sin();
        if c_m.abs() == 1.0 {
            term *= e;
        } else if c_m.abs() == 2.0 {
            term *= e * e;
        }
        sum += term;
    }

    normalize_degrees(l_prime + sum / 1_000_000.0)
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
pub fn gmst_degrees(jd: JulianDay) -> f64 {
    let t = centuries_since_j2000(jd);
    normalize_degrees(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local mean sidereal time for an observer at `longitude` (east positive).
pub fn local_sidereal_degrees(jd: JulianDay, longitude: f64) -> f64 {
    normalize_degrees(gmst_degrees(jd) + longitude)
}
