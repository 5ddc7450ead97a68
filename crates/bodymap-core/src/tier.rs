use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity bucket for an aggregated incident count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::None,
        SeverityTier::Low,
        SeverityTier::Medium,
        SeverityTier::High,
        SeverityTier::Critical,
    ];

    /// Legend text for the counts that fall in this tier.
    pub fn legend(self) -> &'static str {
        match self {
            SeverityTier::None => "0",
            SeverityTier::Low => "1",
            SeverityTier::Medium => "2",
            SeverityTier::High => "3",
            SeverityTier::Critical => "4+",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityTier::None => write!(f, "none"),
            SeverityTier::Low => write!(f, "low"),
            SeverityTier::Medium => write!(f, "medium"),
            SeverityTier::High => write!(f, "high"),
            SeverityTier::Critical => write!(f, "critical"),
        }
    }
}

/// Bucket an incident count. Total over all counts.
pub fn tier(count: u64) -> SeverityTier {
    match count {
        0 => SeverityTier::None,
        1 => SeverityTier::Low,
        2 => SeverityTier::Medium,
        3 => SeverityTier::High,
        _ => SeverityTier::Critical,
    }
}

/// Fill color and opacity for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierStyle {
    pub color: String,
    pub opacity: f32,
}

impl TierStyle {
    fn new(color: &str, opacity: f32) -> Self {
        Self {
            color: color.to_string(),
            opacity,
        }
    }

    /// Opacity while the pointer is over the region.
    pub fn hover_opacity(&self) -> f32 {
        (self.opacity + 0.2).min(1.0)
    }
}

/// Tier -> display style. Restyle here without touching [`tier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub none: TierStyle,
    pub low: TierStyle,
    pub medium: TierStyle,
    pub high: TierStyle,
    pub critical: TierStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            none: TierStyle::new("#374151", 0.4),
            low: TierStyle::new("#22c55e", 0.7),
            medium: TierStyle::new("#eab308", 0.7),
            high: TierStyle::new("#f97316", 0.7),
            critical: TierStyle::new("#ef4444", 0.7),
        }
    }
}

impl Palette {
    pub fn style(&self, tier: SeverityTier) -> &TierStyle {
        match tier {
            SeverityTier::None => &self.none,
            SeverityTier::Low => &self.low,
            SeverityTier::Medium => &self.medium,
            SeverityTier::High => &self.high,
            SeverityTier::Critical => &self.critical,
        }
    }

    pub fn style_for_count(&self, count: u64) -> &TierStyle {
        self.style(tier(count))
    }
}
