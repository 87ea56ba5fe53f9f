// Presentation layer - Terminal interaction
pub mod outcome;
pub mod prompt;
