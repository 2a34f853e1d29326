use barkeep_core::config::AppConfig;
use barkeep_core::{DrinkType, FlavorProfile, Occasion, RecommendationRequest};
use clap::Args;
use rust_decimal::Decimal;

use super::{build_engine, CommandResult};

#[derive(Debug, Args)]
pub struct RecommendArgs {
    #[arg(long, help = "Budget ceiling in INR (100-50000)")]
    pub budget: Decimal,
    #[arg(long = "drink-type", help = "whiskey|beer|vodka|rum|gin|wine")]
    pub drink_type: DrinkType,
    #[arg(long, help = "Indian state for the availability check")]
    pub state: String,
    #[arg(long, default_value = "casual", help = "casual|party|gift|celebration|dinner|business")]
    pub occasion: Occasion,
    #[arg(long, value_delimiter = ',', help = "Comma-separated flavor preferences")]
    pub flavors: Vec<FlavorProfile>,
    #[arg(long, help = "Minimum ABV percentage")]
    pub min_abv: Option<f64>,
    #[arg(long, help = "Maximum ABV percentage")]
    pub max_abv: Option<f64>,
    #[arg(long, help = "Minimal-input path: casual occasion, top 3 picks")]
    pub quick: bool,
}

pub async fn run(config: &AppConfig, args: RecommendArgs) -> CommandResult {
    let engine = build_engine(config);

    if args.quick {
        return match engine.recommend_quick(args.budget, args.drink_type, args.state).await {
            Ok(recommendations) => {
                let count = recommendations.len();
                let data = serde_json::to_value(&recommendations).ok();
                CommandResult::success(
                    "recommend",
                    format!("{count} quick {} picks", args.drink_type),
                    data,
                )
            }
            Err(error) => CommandResult::from_service_error("recommend", &error),
        };
    }

    let request = RecommendationRequest {
        budget: args.budget,
        drink_type: args.drink_type,
        state: args.state,
        occasion: args.occasion,
        flavor_preferences: args.flavors.into_iter().collect(),
        min_abv: args.min_abv,
        max_abv: args.max_abv,
    };

    match engine.recommend(&request).await {
        Ok(response) => {
            let message = format!(
                "{} of {} matching {} recommended ({})",
                response.recommendations.len(),
                response.total_found,
                request.drink_type,
                response.budget_range,
            );
            let data = serde_json::to_value(&response).ok();
            CommandResult::success("recommend", message, data)
        }
        Err(error) => CommandResult::from_service_error("recommend", &error),
    }
}
