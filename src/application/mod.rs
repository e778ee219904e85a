mod application;
pub mod data;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use runtime_config::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_ROOT_PREFIX, RuntimeConfig,
};
