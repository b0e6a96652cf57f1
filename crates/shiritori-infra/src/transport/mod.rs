//! `ChatTransport` implementations.

pub mod console;

pub use console::ConsoleTransport;
