pub mod output_writer;
pub mod stimuli_loader;
pub mod stratified_sampler;
