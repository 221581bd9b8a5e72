mod cart;
mod catalog;
mod history;
mod search;

pub use cart::cmd_cart;
pub use catalog::{cmd_categories, cmd_health, cmd_makes, cmd_models, cmd_years};
pub use history::cmd_history;
pub use search::cmd_search;

use crate::clients::PartsApiClient;
use crate::config::Config;

fn api_client(config: &Config) -> anyhow::Result<PartsApiClient> {
    Ok(PartsApiClient::from_config(&config.client)?)
}
