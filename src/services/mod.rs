pub mod chart_service;
pub mod histogram_service;
pub mod loader_service;
pub mod viewer_service;
