//! Configuration module for oscdetect

mod settings;

pub use settings::{
    ConfigBuilder, ConfigFile, DetectionAlgorithm, OscillationConfig, DEFAULT_SAMPLE_LENGTH,
    DEFAULT_SENSITIVITY,
};
