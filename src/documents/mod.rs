// Resume document handling: upload envelope and text extraction

pub mod processor;

pub use processor::*;
