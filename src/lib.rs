pub mod anonymizer;
pub mod batch;
pub mod utils;
