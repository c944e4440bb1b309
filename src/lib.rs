pub mod api;
pub mod app;
pub mod config;
pub mod output;
pub mod prompt;
pub mod sentiment;

pub use api::{ApiClient, ChatClient, ChatMessage};
pub use app::App;
pub use config::Config;
pub use output::OutputHandler;
pub use sentiment::{normalize, Scores, Sentiment, SentimentResult};
