//! Instrument profiles.
//!
//! An [`Instrument`] selects one row of a fixed table of [`InstrumentProfile`]s.
//! Callers with other instruments (seven-string guitars, mandolins, ...) can
//! build their own profile with [`InstrumentProfile::new`].

use std::{borrow::Cow, fmt, str::FromStr};

use serde::Deserialize;

const STANDARD_INLAYS: &[u32] = &[3, 5, 7, 9];
const UKULELE_INLAYS: &[u32] = &[3, 5, 7, 10];

/// The built-in instruments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[default]
    Guitar,
    Bass,
    Ukulele,
}

impl Instrument {
    /// Returns the profile (string count and inlay frets) for this instrument.
    pub fn profile(self) -> InstrumentProfile {
        match self {
            Self::Guitar => InstrumentProfile::from_static(6, STANDARD_INLAYS),
            Self::Bass => InstrumentProfile::from_static(4, STANDARD_INLAYS),
            Self::Ukulele => InstrumentProfile::from_static(4, UKULELE_INLAYS),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Guitar => "guitar",
            Self::Bass => "bass",
            Self::Ukulele => "ukulele",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guitar" => Ok(Self::Guitar),
            "bass" => Ok(Self::Bass),
            "ukulele" | "uke" => Ok(Self::Ukulele),
            _ => Err(format!(
                "invalid instrument `{s}`, valid values: guitar, bass, ukulele"
            )),
        }
    }
}

/// The inlay drawn at a fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inlay {
    None,
    Single,
    Double,
}

/// Fixed per-instrument constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentProfile {
    string_count: usize,
    inlay_frets: Cow<'static, [u32]>,
}

impl InstrumentProfile {
    /// Creates a custom profile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretboard::{Inlay, InstrumentProfile};
    /// let seven_string = InstrumentProfile::new(7, vec![3, 5, 7, 9]);
    /// assert_eq!(seven_string.string_count(), 7);
    /// assert_eq!(seven_string.inlay_at(17), Inlay::Single);
    /// ```
    pub fn new(string_count: usize, inlay_frets: impl Into<Vec<u32>>) -> Self {
        Self {
            string_count,
            inlay_frets: Cow::Owned(inlay_frets.into()),
        }
    }

    const fn from_static(string_count: usize, inlay_frets: &'static [u32]) -> Self {
        Self {
            string_count,
            inlay_frets: Cow::Borrowed(inlay_frets),
        }
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    pub fn inlay_frets(&self) -> &[u32] {
        &self.inlay_frets
    }

    /// Whether `fret`, or the fret one octave below it, is in the inlay set.
    pub fn has_single_inlay(&self, fret: u32) -> bool {
        self.inlay_frets.contains(&fret)
            || (fret >= 12 && self.inlay_frets.contains(&(fret - 12)))
    }

    /// Whether `fret` is a nonzero multiple of 12.
    pub fn has_double_inlay(&self, fret: u32) -> bool {
        fret > 0 && fret % 12 == 0
    }

    /// Returns the inlay drawn at `fret`. A single dot takes precedence.
    pub fn inlay_at(&self, fret: u32) -> Inlay {
        if self.has_single_inlay(fret) {
            Inlay::Single
        } else if self.has_double_inlay(fret) {
            Inlay::Double
        } else {
            Inlay::None
        }
    }
}

impl From<Instrument> for InstrumentProfile {
    fn from(instrument: Instrument) -> Self {
        instrument.profile()
    }
}
