//! Prompt construction for the text-generation collaborator.

use barkeep_core::{Beverage, Occasion, RecommendationRequest};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

fn flavor_list(beverage: &Beverage) -> String {
    beverage.flavors.iter().map(|flavor| flavor.as_str()).collect::<Vec<_>>().join(", ")
}

fn abv_display(beverage: &Beverage) -> String {
    beverage.abv.map(|abv| format!("{abv}%")).unwrap_or_else(|| "not stated".to_string())
}

fn budget_percentage(price: Decimal, budget: Decimal) -> f64 {
    if budget <= Decimal::ZERO {
        return 0.0;
    }
    (price * Decimal::from(100) / budget).to_f64().unwrap_or(0.0)
}

/// Prompt asking for a short, persuasive justification of a single pick.
pub fn explanation_prompt(beverage: &Beverage, request: &RecommendationRequest) -> String {
    let preferences = request
        .flavor_preferences
        .iter()
        .map(|flavor| flavor.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a beverage expert recommending drinks to Indian customers.\n\
         \n\
         Explain why {name} ({brand}) is one of the best {drink_type} picks under ₹{budget} for:\n\
         - Budget: ₹{budget} (this drink costs ₹{price} - {percentage:.1}% of budget)\n\
         - State: {state}\n\
         - Occasion: {occasion}\n\
         - Flavor preferences: {preferences}\n\
         \n\
         Drink details:\n\
         - Price: ₹{price}\n\
         - ABV: {abv}\n\
         - Flavors: {flavors}\n\
         - Description: {description}\n\
         \n\
         Provide a compelling 2-3 sentence explanation covering value for money, fit with \
         their preferences, and suitability for the occasion. Be enthusiastic but concrete.",
        name = beverage.name,
        brand = beverage.brand,
        drink_type = request.drink_type,
        budget = request.budget.normalize(),
        price = beverage.price.normalize(),
        percentage = budget_percentage(beverage.price, request.budget),
        state = request.state,
        occasion = request.occasion,
        preferences = if preferences.is_empty() { "none stated".to_string() } else { preferences },
        abv = abv_display(beverage),
        flavors = flavor_list(beverage),
        description = beverage.description,
    )
}

/// Prompt asking for structured pairings. The required JSON shape matches
/// `barkeep_core::parse_structured_pairings`.
pub fn pairings_prompt(beverage: &Beverage, occasion: Occasion) -> String {
    format!(
        "As a culinary expert specializing in food and cocktail pairings for alcoholic \
         beverages, suggest 3 food pairings and 2 cocktail options for {name} ({brand}) \
         for a {occasion} occasion.\n\
         \n\
         Drink details:\n\
         - Type: {drink_type}\n\
         - Flavors: {flavors}\n\
         - Description: {description}\n\
         - ABV: {abv}\n\
         \n\
         Pairings should be complementary to the flavor profile, suitable for the occasion, \
         and practical to source in India.\n\
         \n\
         Respond with JSON only, in exactly this shape:\n\
         {{\n\
           \"pairings\": [\n\
             {{\"type\": \"food\", \"name\": \"...\", \"description\": \"...\"}},\n\
             {{\"type\": \"food\", \"name\": \"...\", \"description\": \"...\"}},\n\
             {{\"type\": \"food\", \"name\": \"...\", \"description\": \"...\"}},\n\
             {{\"type\": \"cocktail\", \"name\": \"...\", \"description\": \"...\", \"ingredients\": [\"...\"]}},\n\
             {{\"type\": \"cocktail\", \"name\": \"...\", \"description\": \"...\", \"ingredients\": [\"...\"]}}\n\
           ]\n\
         }}",
        name = beverage.name,
        brand = beverage.brand,
        occasion = occasion,
        drink_type = beverage.drink_type,
        flavors = flavor_list(beverage),
        description = beverage.description,
        abv = abv_display(beverage),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use barkeep_core::{
        Beverage, BeverageId, DrinkType, FlavorProfile, Occasion, RecommendationRequest,
    };
    use rust_decimal::Decimal;

    use super::{explanation_prompt, pairings_prompt};

    fn beverage() -> Beverage {
        Beverage {
            id: BeverageId("whiskey_003".to_string()),
            name: "Blenders Pride Reserve".to_string(),
            brand: "Pernod Ricard".to_string(),
            drink_type: DrinkType::Whiskey,
            price: Decimal::from(1100),
            abv: Some(42.8),
            description: "Premium blended whisky.".to_string(),
            flavors: BTreeSet::from([FlavorProfile::Smooth, FlavorProfile::Vanilla]),
            available_states: BTreeSet::from(["Delhi".to_string()]),
            image_url: None,
            category: None,
            region: Some("India".to_string()),
            age_statement: None,
        }
    }

    #[test]
    fn explanation_prompt_includes_budget_share_and_context() {
        let request =
            RecommendationRequest::quick(Decimal::from(2000), DrinkType::Whiskey, "Delhi");
        let prompt = explanation_prompt(&beverage(), &request);

        assert!(prompt.contains("Blenders Pride Reserve"));
        assert!(prompt.contains("₹2000"));
        assert!(prompt.contains("55.0% of budget"));
        assert!(prompt.contains("Occasion: casual"));
        assert!(prompt.contains("vanilla, smooth"));
    }

    #[test]
    fn pairings_prompt_pins_the_json_shape() {
        let prompt = pairings_prompt(&beverage(), Occasion::Dinner);
        assert!(prompt.contains("\"pairings\""));
        assert!(prompt.contains("\"type\": \"cocktail\""));
        assert!(prompt.contains("\"ingredients\""));
        assert!(prompt.contains("dinner occasion"));
    }

    #[test]
    fn missing_abv_reads_as_not_stated() {
        let mut unknown = beverage();
        unknown.abv = None;
        let prompt = pairings_prompt(&unknown, Occasion::Party);
        assert!(prompt.contains("ABV: not stated"));
    }
}
