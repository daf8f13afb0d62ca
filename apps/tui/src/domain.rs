/// Vulnerability risk band for a 0-100 score.
///
/// Bands are closed on their lower bound: 81, 61, 41 and 21 all belong to the
/// higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [Self; 5] = [
        Self::VeryHigh,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::VeryLow,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= 81.0 {
            Self::VeryHigh
        } else if score >= 61.0 {
            Self::High
        } else if score >= 41.0 {
            Self::Medium
        } else if score >= 21.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    /// Palette runs red to dark green, high risk to low risk.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::VeryHigh => "#d73027",
            Self::High => "#fc8d59",
            Self::Medium => "#fee08b",
            Self::Low => "#d9ef8b",
            Self::VeryLow => "#91cf60",
        }
    }

    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::VeryHigh => (0xd7, 0x30, 0x27),
            Self::High => (0xfc, 0x8d, 0x59),
            Self::Medium => (0xfe, 0xe0, 0x8b),
            Self::Low => (0xd9, 0xef, 0x8b),
            Self::VeryLow => (0x91, 0xcf, 0x60),
        }
    }

    /// Parses the `level` strings the API sends ("High", "very high", "Very_High").
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "very high" => Some(Self::VeryHigh),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "very low" => Some(Self::VeryLow),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn risk_level(score: f64) -> &'static str {
    RiskLevel::from_score(score).label()
}

pub fn risk_color(score: f64) -> &'static str {
    RiskLevel::from_score(score).color_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_band() {
        assert_eq!(risk_level(81.0), "Very High");
        assert_eq!(risk_level(80.99), "High");
        assert_eq!(risk_level(61.0), "High");
        assert_eq!(risk_level(60.5), "Medium");
        assert_eq!(risk_level(41.0), "Medium");
        assert_eq!(risk_level(40.0), "Low");
        assert_eq!(risk_level(21.0), "Low");
        assert_eq!(risk_level(20.999), "Very Low");
        assert_eq!(risk_level(0.0), "Very Low");
        assert_eq!(risk_level(-5.0), "Very Low");
        assert_eq!(risk_level(150.0), "Very High");
    }

    #[test]
    fn color_band_matches_level_band() {
        let mut score = -10.0;
        while score <= 110.0 {
            let level = RiskLevel::from_score(score);
            assert_eq!(risk_level(score), level.label());
            assert_eq!(risk_color(score), level.color_hex());
            score += 0.25;
        }
    }

    #[test]
    fn palette_runs_red_to_green() {
        assert_eq!(risk_color(95.0), "#d73027");
        assert_eq!(risk_color(70.0), "#fc8d59");
        assert_eq!(risk_color(50.0), "#fee08b");
        assert_eq!(risk_color(30.0), "#d9ef8b");
        assert_eq!(risk_color(10.0), "#91cf60");
    }

    #[test]
    fn rgb_agrees_with_hex() {
        for level in RiskLevel::ALL {
            let (r, g, b) = level.color_rgb();
            assert_eq!(format!("#{r:02x}{g:02x}{b:02x}"), level.color_hex());
        }
    }

    #[test]
    fn parse_accepts_api_spellings() {
        assert_eq!(RiskLevel::parse("Very High"), Some(RiskLevel::VeryHigh));
        assert_eq!(RiskLevel::parse(" very_low "), Some(RiskLevel::VeryLow));
        assert_eq!(RiskLevel::parse("MEDIUM"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::parse("extreme"), None);
    }
}
