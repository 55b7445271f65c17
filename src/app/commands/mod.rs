pub mod input;
pub mod mappings;
pub mod resolve;
