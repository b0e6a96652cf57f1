//! Logging and tracing setup for the shiritori bot.

pub mod tracing_setup;
