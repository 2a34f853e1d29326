use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingKind {
    Food,
    Cocktail,
}

/// A suggested food or cocktail accompaniment for a beverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(rename = "type")]
    pub kind: PairingKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

impl Pairing {
    pub fn food(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: PairingKind::Food,
            name: name.into(),
            description: description.into(),
            ingredients: None,
        }
    }

    pub fn cocktail(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<&str>,
    ) -> Self {
        Self {
            kind: PairingKind::Cocktail,
            name: name.into(),
            description: description.into(),
            ingredients: Some(ingredients.into_iter().map(str::to_string).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Pairing, PairingKind};

    #[test]
    fn pairing_serializes_with_kind_tag() {
        let pairing = Pairing::cocktail("Old Fashioned", "Classic.", vec!["Whiskey", "Bitters"]);
        let json = serde_json::to_value(&pairing).expect("serializes");
        assert_eq!(json["type"], "cocktail");
        assert_eq!(json["ingredients"][1], "Bitters");
    }

    #[test]
    fn food_pairing_omits_ingredients() {
        let pairing = Pairing::food("Spiced Nuts", "Warm spices.");
        assert_eq!(pairing.kind, PairingKind::Food);
        let json = serde_json::to_string(&pairing).expect("serializes");
        assert!(!json.contains("ingredients"));
    }
}
