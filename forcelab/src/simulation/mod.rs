pub mod bounds;
pub mod bucket;
pub mod experiment;
pub mod playground;
pub mod table;
pub mod triangle;
