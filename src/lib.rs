use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod chart;
pub mod compatibility;
pub mod ephemeris;
pub mod locations;

pub use chart::{build_chart, build_chart_with, moon_sign, rising_sign, sun_sign};
pub use compatibility::score;
pub use locations::{CityDirectory, ResolveLocation};

// ---------------------------
// ## Enumerations
// ---------------------------

/// One of the four classical elements partitioning the twelve signs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

/// One of the three modalities partitioning the twelve signs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Maps an ecliptic longitude in degrees to its 30-degree sign bucket.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let sign_index = (normalized_longitude / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            11 => ZodiacSign::Pisces,
            _ => ZodiacSign::Aries, // Fallback
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ZodiacSign::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Ecliptic degree at the start of the sign: `index * 30`.
    pub fn degree(&self) -> f64 {
        (*self as isize as f64) * 30.0
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn modality(&self) -> Modality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Modality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Modality::Fixed
            }
            ZodiacSign::Gemini
            | ZodiacSign::Virgo
            | ZodiacSign::Sagittarius
            | ZodiacSign::Pisces => Modality::Mutable,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Angular relationship between two zodiacal degree positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl Aspect {
    /// Classifies the separation between two ecliptic degrees.
    ///
    /// The separation is reflected above 180 degrees before the orb check.
    /// Orbs are open intervals except conjunction, which is a strict `< 10`.
    pub fn between(degree_a: f64, degree_b: f64) -> Option<Aspect> {
        let mut diff = (degree_a - degree_b).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }

        if diff < 10.0 {
            Some(Aspect::Conjunction)
        } else if diff > 170.0 && diff < 190.0 {
            Some(Aspect::Opposition)
        } else if diff > 115.0 && diff < 125.0 {
            Some(Aspect::Trine)
        } else if diff > 85.0 && diff < 95.0 {
            Some(Aspect::Square)
        } else if diff > 55.0 && diff < 65.0 {
            Some(Aspect::Sextile)
        } else {
            None
        }
    }

    /// Contribution of the aspect to the synastry aspect sub-score.
    pub fn weight(&self) -> f64 {
        match self {
            Aspect::Conjunction => 0.1,
            Aspect::Trine => 0.08,
            Aspect::Sextile => 0.06,
            Aspect::Square => -0.04,
            Aspect::Opposition => -0.02,
        }
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Equator/prime-meridian fallback for unrecognized place names.
    pub const ORIGIN: Location = Location {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }
}

/// Natal chart for one person. Built once by [`build_chart`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthChart {
    pub birth_date: String,
    pub birth_time: String,
    pub birth_location: String,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
}

impl fmt::Display for BirthChart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Born {} {} in {}",
            self.birth_date, self.birth_time, self.birth_location
        )?;
        writeln!(f, "  Sun    {}", self.sun_sign)?;
        writeln!(f, "  Moon   {}", self.moon_sign)?;
        write!(f, "  Rising {}", self.rising_sign)
    }
}

// ---------------------------
// ## Error Handling
// ---------------------------

/// Invalid birth date or time string passed to chart construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Date(String),
    Time(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Date(value) => {
                write!(f, "invalid birth date {:?}, expected YYYY-MM-DD", value)
            }
            ParseError::Time(value) => {
                write!(f, "invalid birth time {:?}, expected HH:MM", value)
            }
        }
    }
}

impl Error for ParseError {}
