use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Monetization type of an offer. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OfferType {
    Flatrate,
    Free,
    Ads,
    Cinema,
    Rent,
    Buy,
    Other,
}

impl OfferType {
    /// Parse an upstream monetization type; missing or unrecognized values fall into `Other`.
    pub fn from_upstream(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "FLATRATE" => OfferType::Flatrate,
            "FREE" => OfferType::Free,
            "ADS" => OfferType::Ads,
            "CINEMA" => OfferType::Cinema,
            "RENT" => OfferType::Rent,
            "BUY" => OfferType::Buy,
            _ => OfferType::Other,
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            OfferType::Flatrate => 1,
            OfferType::Free => 2,
            OfferType::Ads => 3,
            OfferType::Cinema => 4,
            OfferType::Rent => 5,
            OfferType::Buy => 6,
            OfferType::Other => 7,
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            OfferType::Flatrate => "Stream with Subscription",
            OfferType::Free => "Watch Free",
            OfferType::Ads => "Free with Ads",
            OfferType::Cinema => "In Theaters",
            OfferType::Rent => "Rent",
            OfferType::Buy => "Buy",
            OfferType::Other => "Other Options",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Flatrate => "FLATRATE",
            OfferType::Free => "FREE",
            OfferType::Ads => "ADS",
            OfferType::Cinema => "CINEMA",
            OfferType::Rent => "RENT",
            OfferType::Buy => "BUY",
            OfferType::Other => "OTHER",
        }
    }
}

impl Default for OfferType {
    fn default() -> Self {
        OfferType::Other
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OfferType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OfferType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OfferType::from_upstream(&raw))
    }
}
