//! Chat completion adapters.

pub mod groq;

pub use groq::GroqChatModel;
