mod memory_input_reader;

pub use memory_input_reader::MemoryInputReader;
