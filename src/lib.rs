pub mod analyzers;
pub mod loader;
pub mod output;
pub mod regions;
pub mod tokenizer;
