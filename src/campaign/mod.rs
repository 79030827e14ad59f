//! Campaign windows and their resolution relative to a reference day

mod data;
mod loader;
mod resolver;

pub use data::Campaign;
pub use loader::{load_campaigns, load_campaigns_path, DEFAULT_CAMPAIGNS_FILE};
pub use resolver::{resolve, CampaignPartition};
