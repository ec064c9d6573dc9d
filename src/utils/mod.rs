pub mod errors;

pub use errors::error_chain;
