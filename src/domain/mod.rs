// Domain layer - Plain data and pure transforms
pub mod telemetry;
pub mod trip;
pub mod vehicle;
