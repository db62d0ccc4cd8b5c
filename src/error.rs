use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("no manufacturer at index {index} (expected 0..=2)")]
    UnknownManufacturer { index: usize },

    #[error("unknown manufacturer '{name}' (expected Nokia, Samsung or HTC)")]
    UnknownManufacturerName { name: String },

    #[error("invalid demo config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DemoError {
    pub fn unknown_manufacturer(index: usize) -> Self {
        Self::UnknownManufacturer { index }
    }

    pub fn unknown_manufacturer_name(name: impl Into<String>) -> Self {
        Self::UnknownManufacturerName { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            DemoError::unknown_manufacturer(7).to_string(),
            "no manufacturer at index 7 (expected 0..=2)"
        );
        assert!(DemoError::unknown_manufacturer_name("Motorola")
            .to_string()
            .contains("'Motorola'"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DemoError = io.into();
        assert!(matches!(err, DemoError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
