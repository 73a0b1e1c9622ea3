//! Quizwright Core — shared error type and quiz configuration.

pub mod capabilities;
pub mod config;
pub mod error;

pub use capabilities::CapabilityTier;
pub use config::QuizConfig;
pub use error::{Error, Result};
