pub mod config;
pub mod normalizer;
pub mod prompt;
pub mod response;
pub mod openai_client;
pub mod generator;
pub mod session;
pub mod host;
