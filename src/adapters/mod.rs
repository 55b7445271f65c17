pub mod filesystem_input_reader;

pub use filesystem_input_reader::FilesystemInputReader;
