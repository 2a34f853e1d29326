use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeverageId(pub String);

impl fmt::Display for BeverageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Closed set of beverage categories carried by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Whiskey,
    Beer,
    Vodka,
    Rum,
    Gin,
    Wine,
}

impl DrinkType {
    pub const ALL: [DrinkType; 6] = [
        DrinkType::Whiskey,
        DrinkType::Beer,
        DrinkType::Vodka,
        DrinkType::Rum,
        DrinkType::Gin,
        DrinkType::Wine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whiskey => "whiskey",
            Self::Beer => "beer",
            Self::Vodka => "vodka",
            Self::Rum => "rum",
            Self::Gin => "gin",
            Self::Wine => "wine",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for DrinkType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "whiskey" => Ok(Self::Whiskey),
            "beer" => Ok(Self::Beer),
            "vodka" => Ok(Self::Vodka),
            "rum" => Ok(Self::Rum),
            "gin" => Ok(Self::Gin),
            "wine" => Ok(Self::Wine),
            other => Err(DomainError::InvalidRequest {
                field: "drink_type",
                reason: format!("unknown drink type `{other}` (expected whiskey|beer|vodka|rum|gin|wine)"),
            }),
        }
    }
}

/// Closed set of flavor tags. `Ord` so flavor sets are `BTreeSet`s and
/// duplicates are impossible by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorProfile {
    Smoky,
    Sweet,
    Spicy,
    Fruity,
    Herbal,
    Citrus,
    Vanilla,
    Oaky,
    Peaty,
    Smooth,
    Caramel,
    Clean,
    Refreshing,
    Juniper,
    Floral,
    Balanced,
    Light,
    Rich,
    Crisp,
    Honey,
    Complex,
    Coconut,
}

impl FlavorProfile {
    pub const ALL: [FlavorProfile; 22] = [
        FlavorProfile::Smoky,
        FlavorProfile::Sweet,
        FlavorProfile::Spicy,
        FlavorProfile::Fruity,
        FlavorProfile::Herbal,
        FlavorProfile::Citrus,
        FlavorProfile::Vanilla,
        FlavorProfile::Oaky,
        FlavorProfile::Peaty,
        FlavorProfile::Smooth,
        FlavorProfile::Caramel,
        FlavorProfile::Clean,
        FlavorProfile::Refreshing,
        FlavorProfile::Juniper,
        FlavorProfile::Floral,
        FlavorProfile::Balanced,
        FlavorProfile::Light,
        FlavorProfile::Rich,
        FlavorProfile::Crisp,
        FlavorProfile::Honey,
        FlavorProfile::Complex,
        FlavorProfile::Coconut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smoky => "smoky",
            Self::Sweet => "sweet",
            Self::Spicy => "spicy",
            Self::Fruity => "fruity",
            Self::Herbal => "herbal",
            Self::Citrus => "citrus",
            Self::Vanilla => "vanilla",
            Self::Oaky => "oaky",
            Self::Peaty => "peaty",
            Self::Smooth => "smooth",
            Self::Caramel => "caramel",
            Self::Clean => "clean",
            Self::Refreshing => "refreshing",
            Self::Juniper => "juniper",
            Self::Floral => "floral",
            Self::Balanced => "balanced",
            Self::Light => "light",
            Self::Rich => "rich",
            Self::Crisp => "crisp",
            Self::Honey => "honey",
            Self::Complex => "complex",
            Self::Coconut => "coconut",
        }
    }
}

impl fmt::Display for FlavorProfile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for FlavorProfile {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        FlavorProfile::ALL
            .iter()
            .find(|flavor| flavor.as_str() == normalized)
            .copied()
            .ok_or_else(|| DomainError::InvalidRequest {
                field: "flavor_preferences",
                reason: format!("unknown flavor tag `{normalized}`"),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Party,
    Dinner,
    Gift,
    Casual,
    Celebration,
    Business,
}

impl Occasion {
    pub const ALL: [Occasion; 6] = [
        Occasion::Party,
        Occasion::Dinner,
        Occasion::Gift,
        Occasion::Casual,
        Occasion::Celebration,
        Occasion::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Party => "party",
            Self::Dinner => "dinner",
            Self::Gift => "gift",
            Self::Casual => "casual",
            Self::Celebration => "celebration",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for Occasion {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "party" => Ok(Self::Party),
            "dinner" => Ok(Self::Dinner),
            "gift" => Ok(Self::Gift),
            "casual" => Ok(Self::Casual),
            "celebration" => Ok(Self::Celebration),
            "business" => Ok(Self::Business),
            other => Err(DomainError::InvalidRequest {
                field: "occasion",
                reason: format!(
                    "unknown occasion `{other}` (expected party|dinner|gift|casual|celebration|business)"
                ),
            }),
        }
    }
}

/// Immutable catalog entry. Constructed once at load time, never mutated,
/// shared read-only across concurrent requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Beverage {
    pub id: BeverageId,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub drink_type: DrinkType,
    /// Price in INR.
    pub price: Decimal,
    /// Alcohol by volume percentage, absent for some entries.
    #[serde(default)]
    pub abv: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flavors: BTreeSet<FlavorProfile>,
    #[serde(default)]
    pub available_states: BTreeSet<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub age_statement: Option<String>,
}

impl Beverage {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price <= Decimal::ZERO {
            return Err(DomainError::InvariantViolation(format!(
                "beverage `{}` price must be positive, got {}",
                self.id, self.price
            )));
        }
        if let Some(abv) = self.abv {
            if !(0.0..=100.0).contains(&abv) {
                return Err(DomainError::InvariantViolation(format!(
                    "beverage `{}` abv must be within 0..=100, got {abv}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
