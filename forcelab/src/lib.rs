#![allow(clippy::type_complexity, clippy::too_many_arguments)]

pub mod app;
pub mod diagram;
pub mod input;
pub mod math;
pub mod navigation;
pub mod quiz;
pub mod section;
pub mod simulation;
pub mod ui;
pub mod utils;

pub use anyhow;
pub use egui;
pub use egui_plot;
pub use glam;
pub use log;
pub use rustc_hash;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
