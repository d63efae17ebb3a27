pub mod analysis;
pub mod extractor;
pub mod features;
pub mod samples;
