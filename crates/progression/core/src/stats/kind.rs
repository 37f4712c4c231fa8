//! Stat kinds and their presentation metadata.
//!
//! The set of stat kinds is closed: every source (gear, reforges, pets,
//! skills) speaks in terms of [`StatKind`]. Display metadata lives here so the
//! presentation collaborator has one place to look, but nothing in the
//! computation path ever reads it.

/// One axis of numeric power.
///
/// Config files refer to kinds by their snake_case name (`crit_chance`);
/// parsing is case-insensitive and [`StatKind::parse_key`] additionally accepts
/// `-` and spaces as separators.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Damage,
    Strength,
    CritChance,
    CritDamage,
    AttackSpeed,
    Ferocity,
    AbilityDamage,
    Health,
    Defense,
    TrueDefense,
    Speed,
    Intelligence,
    MagicFind,
    PetLuck,
    SeaCreatureChance,
    MiningSpeed,
    MiningFortune,
    FarmingFortune,
    ForagingFortune,
    FishingSpeed,
}

impl StatKind {
    /// Number of stat kinds.
    pub const COUNT: usize = 20;

    /// Parses a config key, accepting `-`, spaces and any casing.
    ///
    /// ```
    /// # use progression_core::StatKind;
    /// assert_eq!(StatKind::parse_key("Crit-Damage"), Some(StatKind::CritDamage));
    /// assert_eq!(StatKind::parse_key("SEA CREATURE CHANCE"), Some(StatKind::SeaCreatureChance));
    /// assert_eq!(StatKind::parse_key("mana"), None);
    /// ```
    pub fn parse_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        normalized.parse().ok()
    }

    /// Human-readable name ("Crit Damage").
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Damage => "Damage",
            Self::Strength => "Strength",
            Self::CritChance => "Crit Chance",
            Self::CritDamage => "Crit Damage",
            Self::AttackSpeed => "Bonus Attack Speed",
            Self::Ferocity => "Ferocity",
            Self::AbilityDamage => "Ability Damage",
            Self::Health => "Health",
            Self::Defense => "Defense",
            Self::TrueDefense => "True Defense",
            Self::Speed => "Speed",
            Self::Intelligence => "Intelligence",
            Self::MagicFind => "Magic Find",
            Self::PetLuck => "Pet Luck",
            Self::SeaCreatureChance => "Sea Creature Chance",
            Self::MiningSpeed => "Mining Speed",
            Self::MiningFortune => "Mining Fortune",
            Self::FarmingFortune => "Farming Fortune",
            Self::ForagingFortune => "Foraging Fortune",
            Self::FishingSpeed => "Fishing Speed",
        }
    }

    /// Presentation metadata for this kind.
    pub const fn display(&self) -> StatDisplay {
        use DisplayColor::*;
        use StatFormat::*;
        match self {
            Self::Damage => StatDisplay::new("❁", Red, Flat),
            Self::Strength => StatDisplay::new("❁", Red, Flat),
            Self::CritChance => StatDisplay::new("☣", Blue, Percent),
            Self::CritDamage => StatDisplay::new("☠", Blue, Percent),
            Self::AttackSpeed => StatDisplay::new("⚔", Yellow, Percent),
            Self::Ferocity => StatDisplay::new("⫽", Red, Flat),
            Self::AbilityDamage => StatDisplay::new("๑", Red, Percent),
            Self::Health => StatDisplay::new("❤", Red, Flat),
            Self::Defense => StatDisplay::new("❈", Green, Flat),
            Self::TrueDefense => StatDisplay::new("❂", White, Flat),
            Self::Speed => StatDisplay::new("✦", White, Flat),
            Self::Intelligence => StatDisplay::new("✎", Aqua, Flat),
            Self::MagicFind => StatDisplay::new("✯", Aqua, Flat),
            Self::PetLuck => StatDisplay::new("♣", LightPurple, Flat),
            Self::SeaCreatureChance => StatDisplay::new("α", DarkAqua, Percent),
            Self::MiningSpeed => StatDisplay::new("⸕", Gold, Flat),
            Self::MiningFortune => StatDisplay::new("☘", Gold, Flat),
            Self::FarmingFortune => StatDisplay::new("☘", Gold, Flat),
            Self::ForagingFortune => StatDisplay::new("☘", Gold, Flat),
            Self::FishingSpeed => StatDisplay::new("☂", Aqua, Flat),
        }
    }

    /// Formats a magnitude for display, e.g. `+7.5%` or `-3`.
    pub fn format_value(&self, value: f64) -> String {
        let display = self.display();
        format!("{}{}", format_signed(value), display.suffix())
    }

    /// Formats a full stat line, e.g. `Crit Damage: +7.5%`.
    pub fn format_line(&self, value: f64) -> String {
        format!("{}: {}", self.display_name(), self.format_value(value))
    }
}

/// Formats a number with an explicit sign and at most two decimals.
fn format_signed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "+" };
    let magnitude = rounded.abs();
    if magnitude.fract() == 0.0 {
        format!("{sign}{magnitude:.0}")
    } else {
        let text = format!("{magnitude:.2}");
        let text = text.trim_end_matches('0');
        format!("{sign}{text}")
    }
}

/// Text colors understood by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DisplayColor {
    White,
    Gray,
    Green,
    Blue,
    DarkPurple,
    Gold,
    LightPurple,
    Aqua,
    DarkAqua,
    Red,
    Yellow,
}

/// How a magnitude is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatFormat {
    /// Plain number (`+12`).
    Flat,
    /// Number followed by `%` (`+7.5%`).
    Percent,
}

/// Presentation metadata: symbol, color, and formatting rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatDisplay {
    pub symbol: &'static str,
    pub color: DisplayColor,
    pub format: StatFormat,
}

impl StatDisplay {
    pub const fn new(symbol: &'static str, color: DisplayColor, format: StatFormat) -> Self {
        Self {
            symbol,
            color,
            format,
        }
    }

    /// Suffix appended to formatted magnitudes.
    pub const fn suffix(&self) -> &'static str {
        match self.format {
            StatFormat::Flat => "",
            StatFormat::Percent => "%",
        }
    }
}
