// Reusable components live here.

pub mod auth_guard;
pub mod error_banner;
pub mod loading_spinner;
pub mod sidebar;
pub mod sort_header;
pub mod stats_card;
pub mod status_badge;
