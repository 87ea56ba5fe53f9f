// Application layer - Report use case and the seams it depends on
pub mod error;
pub mod fleet_repository;
pub mod ports;
pub mod report_service;
