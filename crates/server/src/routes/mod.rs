pub mod models;
pub mod paraphrase;
pub mod summarize;
pub mod system;
