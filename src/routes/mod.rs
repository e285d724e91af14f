pub mod api;

pub mod assets;

pub mod evaluations;

pub mod system;

pub use api::configure_api_routes;
pub use assets::configure_asset_routes;
pub use evaluations::configure_evaluation_routes;
pub use system::configure_system_routes;
