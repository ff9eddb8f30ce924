//! HTTP API handlers for trackstats-api

pub mod debug;
pub mod health;
pub mod tracks;
pub mod ui;

pub use debug::get_data_info;
pub use health::health_routes;
pub use tracks::{get_platform_comparison, get_top_artists, get_tracks};
pub use ui::ui_routes;
