pub mod generator;
pub mod openai;
pub mod transcriber;
