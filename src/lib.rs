pub mod app;
pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod console;
pub mod device;
pub mod error;
pub mod font;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod layout;
pub mod notify;
pub mod paint;
