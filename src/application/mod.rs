pub mod use_cases;

pub use use_cases::stimuli_loader::{LoadReport, StimuliLoader};
pub use use_cases::stratified_sampler::StratifiedSampler;
