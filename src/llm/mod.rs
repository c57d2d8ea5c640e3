pub mod interface;
pub mod ollama;
