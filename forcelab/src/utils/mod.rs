pub mod color;
pub mod settings;
pub mod storage;
