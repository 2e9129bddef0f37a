#![allow(non_snake_case)]

pub mod config;
pub mod coords;
pub mod encoding;
pub mod error;
pub mod objects;
pub mod orchestrator;
pub mod reader;
pub mod svg;
pub mod tables;

pub use config::Config;
pub use error::{DrawError, Result};
pub use orchestrator::convert_to_svg;
