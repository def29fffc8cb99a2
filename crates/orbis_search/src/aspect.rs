//! Aspect catalog: exact angles, orbs, and glyphs.

use orbis_ephem::Body;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The nine aspects matched by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquisquare,
}

/// Every aspect, in catalog order.
pub const ALL_ASPECTS: [Aspect; 9] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
    Aspect::Quincunx,
    Aspect::Semisextile,
    Aspect::Semisquare,
    Aspect::Sesquisquare,
];

/// The five Ptolemaic aspects, in the order scans check them.
pub const MAJOR_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Opposition,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Sextile,
];

/// The minor aspects.
pub const MINOR_ASPECTS: [Aspect; 4] = [
    Aspect::Quincunx,
    Aspect::Semisextile,
    Aspect::Semisquare,
    Aspect::Sesquisquare,
];

impl Aspect {
    /// Lowercase catalog name, as used in records and lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
            Self::Quincunx => "quincunx",
            Self::Semisextile => "semisextile",
            Self::Semisquare => "semisquare",
            Self::Sesquisquare => "sesquisquare",
        }
    }

    /// Astrological glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Conjunction => "\u{260c}",
            Self::Sextile => "\u{26b9}",
            Self::Square => "\u{25a1}",
            Self::Trine => "\u{25b3}",
            Self::Opposition => "\u{260d}",
            Self::Quincunx => "\u{26bb}",
            Self::Semisextile => "\u{26ba}",
            Self::Semisquare => "\u{2220}",
            Self::Sesquisquare => "\u{26bc}",
        }
    }

    /// Exact angular separation, in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
            Self::Quincunx => 150.0,
            Self::Semisextile => 30.0,
            Self::Semisquare => 45.0,
            Self::Sesquisquare => 135.0,
        }
    }

    /// Default matching orb in degrees, before scaling and luminary
    /// widening. AstroSeek's published defaults.
    pub const fn base_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Square | Self::Trine => 7.0,
            Self::Sextile => 4.0,
            Self::Quincunx | Self::Semisextile | Self::Semisquare | Self::Sesquisquare => 2.5,
        }
    }

    /// Extra orb granted when either body involved is a luminary.
    pub const fn luminary_bonus(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Square | Self::Trine => 3.0,
            Self::Sextile => 1.5,
            Self::Quincunx | Self::Semisextile | Self::Semisquare | Self::Sesquisquare => 0.0,
        }
    }

    /// Look an aspect up by its lowercase catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ASPECTS.iter().copied().find(|a| a.name() == name)
    }

    /// Every aspect, in catalog order.
    pub const fn all() -> [Aspect; 9] {
        ALL_ASPECTS
    }
}

/// Effective matching orb for one (aspect, transiting, natal) triple.
///
/// The base orb is scaled by `orb_scale` first; the luminary bonus is
/// then added flat, once, when either body is the Sun or Moon.
pub fn orb_for(aspect: Aspect, transiting: Body, natal: Body, orb_scale: f64) -> f64 {
    let base = aspect.base_orb() * orb_scale;
    if transiting.is_luminary() || natal.is_luminary() {
        base + aspect.luminary_bonus()
    } else {
        base
    }
}

/// Which aspects a scan matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectSelection {
    /// The five Ptolemaic aspects.
    Major,
    /// The four minor aspects.
    Minor,
    /// All nine.
    All,
    /// An explicit list, checked in the given order.
    Custom(Vec<Aspect>),
}

impl AspectSelection {
    /// The aspects this selection covers, in scan order.
    pub fn aspects(&self) -> &[Aspect] {
        match self {
            Self::Major => &MAJOR_ASPECTS,
            Self::Minor => &MINOR_ASPECTS,
            Self::All => &ALL_ASPECTS,
            Self::Custom(list) => list,
        }
    }

    /// Build a custom selection from catalog names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SearchError> {
        let mut list = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let aspect = Aspect::from_name(name)
                .ok_or_else(|| SearchError::UnknownAspect(name.to_string()))?;
            list.push(aspect);
        }
        Ok(Self::Custom(list))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
