pub mod error;
pub mod load_state;
pub mod loader_config;

// Headline rows, dimensions, header resolution
pub mod stimuli;
