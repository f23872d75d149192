pub mod engine;
pub mod io;
pub mod round;
pub mod serialization;
pub mod strategy;
