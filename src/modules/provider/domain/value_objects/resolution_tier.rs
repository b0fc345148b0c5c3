use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Picture quality of a streaming offer, as reported by the upstream `presentationType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionTier {
    Canvas,
    Sd,
    Hd,
    Uhd,
    FourK,
    Unknown,
}

impl ResolutionTier {
    /// Parse an upstream presentation type. Unrecognized values become `Unknown`.
    pub fn from_upstream(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "CANVAS" => ResolutionTier::Canvas,
            "SD" => ResolutionTier::Sd,
            "HD" => ResolutionTier::Hd,
            "UHD" => ResolutionTier::Uhd,
            "4K" | "_4K" => ResolutionTier::FourK,
            _ => ResolutionTier::Unknown,
        }
    }

    /// Higher is better; `Unknown` ranks below every known tier.
    pub fn priority(&self) -> u8 {
        match self {
            ResolutionTier::FourK => 5,
            ResolutionTier::Uhd => 4,
            ResolutionTier::Hd => 3,
            ResolutionTier::Sd => 2,
            ResolutionTier::Canvas => 1,
            ResolutionTier::Unknown => 0,
        }
    }

    pub fn is_ultra_hd(&self) -> bool {
        matches!(self, ResolutionTier::Uhd | ResolutionTier::FourK)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::Canvas => "CANVAS",
            ResolutionTier::Sd => "SD",
            ResolutionTier::Hd => "HD",
            ResolutionTier::Uhd => "UHD",
            ResolutionTier::FourK => "4K",
            ResolutionTier::Unknown => "",
        }
    }
}

impl Default for ResolutionTier {
    fn default() -> Self {
        ResolutionTier::Unknown
    }
}

impl PartialOrd for ResolutionTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResolutionTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ResolutionTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResolutionTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ResolutionTier::from_upstream(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(ResolutionTier::Canvas < ResolutionTier::Sd);
        assert!(ResolutionTier::Sd < ResolutionTier::Hd);
        assert!(ResolutionTier::Hd < ResolutionTier::Uhd);
        assert!(ResolutionTier::Uhd < ResolutionTier::FourK);
        assert!(ResolutionTier::Unknown < ResolutionTier::Canvas);
    }

    #[test]
    fn test_from_upstream() {
        assert_eq!(ResolutionTier::from_upstream("_4K"), ResolutionTier::FourK);
        assert_eq!(ResolutionTier::from_upstream("4K"), ResolutionTier::FourK);
        assert_eq!(ResolutionTier::from_upstream("hd"), ResolutionTier::Hd);
        assert_eq!(ResolutionTier::from_upstream("8K"), ResolutionTier::Unknown);
        assert_eq!(ResolutionTier::from_upstream(""), ResolutionTier::Unknown);
        assert_eq!(ResolutionTier::Unknown.priority(), 0);
    }

    #[test]
    fn test_ultra_hd_badge() {
        assert!(ResolutionTier::FourK.is_ultra_hd());
        assert!(ResolutionTier::Uhd.is_ultra_hd());
        assert!(!ResolutionTier::Hd.is_ultra_hd());
    }
}
