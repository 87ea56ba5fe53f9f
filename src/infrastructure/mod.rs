// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod credential;
pub mod samsara_repository;
pub mod svg_chart_sink;
