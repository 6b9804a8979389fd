mod catalog_store_filesystem;
mod steam_client_http;

pub use catalog_store_filesystem::FilesystemCatalogStore;
pub use steam_client_http::HttpSteamClient;
