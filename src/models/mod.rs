pub mod config;
pub mod question;

pub use config::{AppConfig, ChartConfig, ModerationConfig, SamplerConfig, ZoneWeights};
pub use question::Question;
