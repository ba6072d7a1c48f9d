// Adapters layer: concrete context sources (process environment, in-memory).

pub mod context;

pub use context::{EnvContextSource, StaticContextSource};
