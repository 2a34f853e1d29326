use barkeep_core::config::AppConfig;
use barkeep_core::BeverageId;
use clap::Args;

use super::{build_engine, CommandResult};

#[derive(Debug, Args)]
pub struct DrinkArgs {
    #[arg(help = "Catalog id, e.g. whiskey_001")]
    pub id: String,
}

pub fn run(config: &AppConfig, args: DrinkArgs) -> CommandResult {
    let engine = build_engine(config);

    match engine.beverage_detail(&BeverageId(args.id)) {
        Ok(detail) => {
            let message = format!(
                "{} ({}) - {} with {} similar items",
                detail.beverage.name,
                detail.beverage.brand,
                detail.availability.price_display,
                detail.similar.len(),
            );
            let data = serde_json::to_value(&detail).ok();
            CommandResult::success("drink", message, data)
        }
        Err(error) => CommandResult::from_service_error("drink", &error),
    }
}
