pub mod input_reader;
pub mod result_writer;
