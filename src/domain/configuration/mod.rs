mod cache_policy;
mod steaminfo_config;

pub use cache_policy::CachePolicy;
pub use steaminfo_config::{CacheConfig, SteamApiConfig, SteamInfoConfig};
