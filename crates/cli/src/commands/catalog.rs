use barkeep_core::config::AppConfig;
use barkeep_core::{Beverage, Catalog, DrinkType, FlavorProfile, Occasion};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long = "drink-type", help = "Restrict to one drink type")]
    pub drink_type: Option<DrinkType>,
    #[arg(long, help = "Restrict to items available in this state")]
    pub state: Option<String>,
    #[arg(long, help = "Minimum price in INR")]
    pub min_price: Option<Decimal>,
    #[arg(long, help = "Maximum price in INR")]
    pub max_price: Option<Decimal>,
    #[arg(long, help = "List supported drink types, flavor tags, and occasions instead")]
    pub facets: bool,
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    id: String,
    name: String,
    brand: String,
    #[serde(rename = "type")]
    drink_type: DrinkType,
    price: Decimal,
    abv: Option<f64>,
    states: usize,
}

impl From<&Beverage> for CatalogEntry {
    fn from(beverage: &Beverage) -> Self {
        Self {
            id: beverage.id.0.clone(),
            name: beverage.name.clone(),
            brand: beverage.brand.clone(),
            drink_type: beverage.drink_type,
            price: beverage.price,
            abv: beverage.abv,
            states: beverage.available_states.len(),
        }
    }
}

pub fn run(config: &AppConfig, args: CatalogArgs) -> CommandResult {
    if args.facets {
        return facets();
    }

    let catalog = Catalog::load_or_empty(config.catalog.path.as_deref());

    let entries: Vec<CatalogEntry> = catalog
        .iter()
        .filter(|beverage| {
            args.drink_type.map_or(true, |drink_type| beverage.drink_type == drink_type)
        })
        .filter(|beverage| {
            args.state.as_deref().map_or(true, |state| beverage.available_states.contains(state))
        })
        .filter(|beverage| args.min_price.map_or(true, |min| beverage.price >= min))
        .filter(|beverage| args.max_price.map_or(true, |max| beverage.price <= max))
        .map(CatalogEntry::from)
        .collect();

    let message = format!("{} of {} catalog entries", entries.len(), catalog.len());
    let data = serde_json::to_value(&entries).ok();
    CommandResult::success("catalog", message, data)
}

fn facets() -> CommandResult {
    let data = json!({
        "drink_types": DrinkType::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        "flavors": FlavorProfile::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
        "occasions": Occasion::ALL.iter().map(|o| o.as_str()).collect::<Vec<_>>(),
    });
    CommandResult::success("catalog", "supported catalog facets".to_string(), Some(data))
}
