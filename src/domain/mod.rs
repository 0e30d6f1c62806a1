// Domain layer - Core types and validation

pub mod errors;
pub mod model;
