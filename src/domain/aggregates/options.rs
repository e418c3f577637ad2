//! Choice catalogs for the inquiry form
//!
//! Closed enums for every select-backed field, with stable wire values and
//! the display labels shown next to each option. The wire value is the serde
//! representation; any Transmitter implementation receives these exact
//! strings.

use serde::{Deserialize, Serialize};

/// What the visitor is asking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Commission,
    Wholesale,
    Workshop,
    Partnership,
    Press,
    Consultation,
    Other,
}

impl InquiryType {
    pub const ALL: [Self; 7] = [
        Self::Commission,
        Self::Wholesale,
        Self::Workshop,
        Self::Partnership,
        Self::Press,
        Self::Consultation,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commission => "commission",
            Self::Wholesale => "wholesale",
            Self::Workshop => "workshop",
            Self::Partnership => "partnership",
            Self::Press => "press",
            Self::Consultation => "consultation",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Commission => "Custom Commission",
            Self::Wholesale => "Wholesale Order",
            Self::Workshop => "Workshop Booking",
            Self::Partnership => "Partnership",
            Self::Press => "Press & Media",
            Self::Consultation => "Design Consultation",
            Self::Other => "Other",
        }
    }
}

/// Indicative budget bracket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-100")]
    Under100,
    #[serde(rename = "100-250")]
    From100To250,
    #[serde(rename = "250-500")]
    From250To500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000-2500")]
    From1000To2500,
    #[serde(rename = "over-2500")]
    Over2500,
}

impl BudgetRange {
    pub const ALL: [Self; 6] = [
        Self::Under100,
        Self::From100To250,
        Self::From250To500,
        Self::From500To1000,
        Self::From1000To2500,
        Self::Over2500,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under100 => "under-100",
            Self::From100To250 => "100-250",
            Self::From250To500 => "250-500",
            Self::From500To1000 => "500-1000",
            Self::From1000To2500 => "1000-2500",
            Self::Over2500 => "over-2500",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under100 => "Under $100",
            Self::From100To250 => "$100 - $250",
            Self::From250To500 => "$250 - $500",
            Self::From500To1000 => "$500 - $1,000",
            Self::From1000To2500 => "$1,000 - $2,500",
            Self::Over2500 => "Over $2,500",
        }
    }
}

/// When the piece is needed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1-week")]
    OneWeek,
    #[serde(rename = "2-weeks")]
    TwoWeeks,
    #[serde(rename = "1-month")]
    OneMonth,
    #[serde(rename = "2-months")]
    TwoMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

impl Timeline {
    pub const ALL: [Self; 6] = [
        Self::Asap,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::OneMonth,
        Self::TwoMonths,
        Self::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::OneWeek => "1-week",
            Self::TwoWeeks => "2-weeks",
            Self::OneMonth => "1-month",
            Self::TwoMonths => "2-months",
            Self::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asap => "ASAP (Rush Fee Applies)",
            Self::OneWeek => "Within 1 week",
            Self::TwoWeeks => "2-3 weeks",
            Self::OneMonth => "1 month",
            Self::TwoMonths => "2-3 months",
            Self::Flexible => "Flexible",
        }
    }
}

/// How quickly the studio should respond
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Rush,
}

impl Urgency {
    pub const ALL: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Rush];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Rush => "rush",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "No rush (2-4 weeks)",
            Self::Normal => "Standard (1-2 weeks)",
            Self::High => "Urgent (3-7 days)",
            Self::Rush => "Rush order (1-2 days)",
        }
    }
}

/// Craft category of the requested piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Pottery,
    Jewelry,
    Textile,
    Woodwork,
    Metalwork,
    Glasswork,
    Leatherwork,
    Sculpture,
}

impl ProjectType {
    pub const ALL: [Self; 8] = [
        Self::Pottery,
        Self::Jewelry,
        Self::Textile,
        Self::Woodwork,
        Self::Metalwork,
        Self::Glasswork,
        Self::Leatherwork,
        Self::Sculpture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pottery => "pottery",
            Self::Jewelry => "jewelry",
            Self::Textile => "textile",
            Self::Woodwork => "woodwork",
            Self::Metalwork => "metalwork",
            Self::Glasswork => "glasswork",
            Self::Leatherwork => "leatherwork",
            Self::Sculpture => "sculpture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pottery => "Pottery & Ceramics",
            Self::Jewelry => "Jewelry Making",
            Self::Textile => "Textile Arts",
            Self::Woodwork => "Woodworking",
            Self::Metalwork => "Metalworking",
            Self::Glasswork => "Glasswork",
            Self::Leatherwork => "Leatherwork",
            Self::Sculpture => "Sculpture",
        }
    }
}

/// Material preference, from the fixed studio catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Material {
    Clay,
    Wood,
    Metal,
    Glass,
    Fabric,
    Leather,
    Stone,
    Ceramic,
    Silver,
    Gold,
    Bronze,
    Wool,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Wood => "Wood",
            Self::Metal => "Metal",
            Self::Glass => "Glass",
            Self::Fabric => "Fabric",
            Self::Leather => "Leather",
            Self::Stone => "Stone",
            Self::Ceramic => "Ceramic",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Bronze => "Bronze",
            Self::Wool => "Wool",
        }
    }
}

/// Shipping preference for the finished piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
    Insured,
    Pickup,
}

impl ShippingMethod {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Express, Self::Insured, Self::Pickup];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Insured => "insured",
            Self::Pickup => "pickup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping",
            Self::Express => "Express Shipping",
            Self::Insured => "Insured & Tracked",
            Self::Pickup => "Studio Pickup",
        }
    }
}

/// Packaging preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingStyle {
    Standard,
    Gift,
    Custom,
}

impl PackagingStyle {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Gift, Self::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Gift => "gift",
            Self::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Packaging",
            Self::Gift => "Gift Wrapping",
            Self::Custom => "Custom Branded Box",
        }
    }
}

/// Form section currently in view; pure view state, never transmitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    General,
    Project,
    Preferences,
    Services,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::General, Self::Project, Self::Preferences, Self::Services];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Project => "project",
            Self::Preferences => "preferences",
            Self::Services => "services",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() {
        for inquiry in InquiryType::ALL {
            let json = serde_json::to_string(&inquiry).unwrap();
            assert_eq!(json, format!("\"{}\"", inquiry.as_str()));
        }
        for budget in BudgetRange::ALL {
            let json = serde_json::to_string(&budget).unwrap();
            assert_eq!(json, format!("\"{}\"", budget.as_str()));
        }
        for timeline in Timeline::ALL {
            let json = serde_json::to_string(&timeline).unwrap();
            assert_eq!(json, format!("\"{}\"", timeline.as_str()));
        }
    }

    #[test]
    fn test_urgency_defaults_to_normal() {
        assert_eq!(Urgency::default(), Urgency::Normal);
    }

    #[test]
    fn test_tab_defaults_to_general() {
        assert_eq!(Tab::default(), Tab::General);
    }
}
