pub mod canvas;
pub mod context;
pub mod widgets;
