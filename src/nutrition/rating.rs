use serde::Serialize;

/// Qualitative rating of a protein ratio (grams of protein per 100 kcal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Excellent,
    Good,
    Moderate,
    Low,
    Poor,
}

impl RatingTier {
    /// Highest threshold first; each tier's lower bound is inclusive.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 15.0 {
            RatingTier::Excellent
        } else if ratio >= 10.0 {
            RatingTier::Good
        } else if ratio >= 5.0 {
            RatingTier::Moderate
        } else if ratio >= 2.0 {
            RatingTier::Low
        } else {
            RatingTier::Poor
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            RatingTier::Excellent => "#22C55E",
            RatingTier::Good => "#84CC16",
            RatingTier::Moderate => "#EAB308",
            RatingTier::Low => "#F97316",
            RatingTier::Poor => "#EF4444",
        }
    }

    /// Display color as [R, G, B].
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            RatingTier::Excellent => [0x22, 0xC5, 0x5E],
            RatingTier::Good => [0x84, 0xCC, 0x16],
            RatingTier::Moderate => [0xEA, 0xB3, 0x08],
            RatingTier::Low => [0xF9, 0x73, 0x16],
            RatingTier::Poor => [0xEF, 0x44, 0x44],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Excellent => "Excellent",
            RatingTier::Good => "Good",
            RatingTier::Moderate => "Moderate",
            RatingTier::Low => "Low",
            RatingTier::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for RatingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(RatingTier::from_ratio(20.0), RatingTier::Excellent);
        assert_eq!(RatingTier::from_ratio(15.0), RatingTier::Excellent);
        assert_eq!(RatingTier::from_ratio(14.99), RatingTier::Good);
        assert_eq!(RatingTier::from_ratio(10.0), RatingTier::Good);
        assert_eq!(RatingTier::from_ratio(9.99), RatingTier::Moderate);
        assert_eq!(RatingTier::from_ratio(5.0), RatingTier::Moderate);
        assert_eq!(RatingTier::from_ratio(4.99), RatingTier::Low);
        assert_eq!(RatingTier::from_ratio(2.0), RatingTier::Low);
        assert_eq!(RatingTier::from_ratio(1.99), RatingTier::Poor);
        assert_eq!(RatingTier::from_ratio(0.0), RatingTier::Poor);
    }

    #[test]
    fn test_display_data() {
        assert_eq!(RatingTier::Excellent.color(), "#22C55E");
        assert_eq!(RatingTier::Moderate.label(), "Moderate");
        assert_eq!(RatingTier::Poor.to_string(), "Poor");
    }

    #[test]
    fn test_rgb_matches_hex() {
        for tier in [
            RatingTier::Excellent,
            RatingTier::Good,
            RatingTier::Moderate,
            RatingTier::Low,
            RatingTier::Poor,
        ] {
            let [r, g, b] = tier.rgb();
            assert_eq!(format!("#{:02X}{:02X}{:02X}", r, g, b), tier.color());
        }
    }
}
