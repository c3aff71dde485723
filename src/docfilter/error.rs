use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Field is required for every filter")]
    MissingField,

    #[error("At least one filter must be configured")]
    EmptyFilterSet,

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Value \"{value}\" cannot be converted to {target}")]
    Conversion { value: String, target: &'static str },

    #[error("Item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<FilterError>,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FilterError {
    pub fn conversion(value: &str, target: &'static str) -> Self {
        FilterError::Conversion {
            value: value.to_string(),
            target,
        }
    }

    /// Tags an error with the index of the input item that produced it.
    pub fn at_item(self, index: usize) -> Self {
        FilterError::Item {
            index,
            source: Box::new(self),
        }
    }

    /// Short stable identifier for the error kind, suitable for machine output.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterError::MissingField => "MissingFieldError",
            FilterError::EmptyFilterSet => "EmptyFilterSetError",
            FilterError::UnsupportedOperator(_) => "UnsupportedOperatorError",
            FilterError::Conversion { .. } => "ConversionError",
            FilterError::Item { source, .. } => source.kind(),
            FilterError::Config(_) => "ConfigError",
            FilterError::Io(_) => "IoError",
            FilterError::Serialization(_) => "SerializationError",
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
