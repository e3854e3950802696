pub mod engine;
pub mod generator;
pub mod renderer;
pub mod transcriber;
