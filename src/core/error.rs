use std::fmt;

/// Invariant violations raised while constructing or transforming an analysis result
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Metric label is empty or whitespace-only
    EmptyLabel,

    /// Two metrics share the same label
    DuplicateLabel(String),

    /// Numeric metric value is NaN or infinite
    NonFiniteValue { label: String },

    /// Metric percent is outside 0..=100
    PercentOutOfRange { label: String, percent: i64 },

    /// Headline or radar score is outside 0..=100
    ScoreOutOfRange { field: String, score: i64 },

    /// Radar profile has fewer axes than a non-degenerate radar needs
    TooFewAxes { found: usize, required: usize },

    /// Radar axis name is empty or whitespace-only
    EmptyAxisName,

    /// Two radar axes share the same name
    DuplicateAxis(String),

    /// Category distribution has no categories
    EmptyDistribution,

    /// Category name is empty or whitespace-only
    EmptyCategoryName,

    /// Two categories share the same name
    DuplicateCategory(String),

    /// Category weight is negative, NaN or infinite
    InvalidWeight { category: String, weight: f64 },

    /// Category weights add up to zero
    ZeroTotalWeight,

    /// Category weights overflow when added up
    TotalWeightNotFinite,

    /// Feedback entry is empty or whitespace-only
    BlankFeedback { section: String, index: usize },

    /// Palette used for color assignment has no entries
    EmptyPalette,

    /// Required part of an analysis result was never supplied
    MissingField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "metric label cannot be empty"),
            Self::DuplicateLabel(label) => write!(f, "duplicate metric label '{label}'"),
            Self::NonFiniteValue { label } => {
                write!(f, "value of metric '{label}' must be a finite number")
            }
            Self::PercentOutOfRange { label, percent } => write!(
                f,
                "percent {percent} of metric '{label}' is outside 0-100"
            ),
            Self::ScoreOutOfRange { field, score } => {
                write!(f, "score {score} for '{field}' is outside 0-100")
            }
            Self::TooFewAxes { found, required } => write!(
                f,
                "radar profile needs at least {required} axes, got {found}"
            ),
            Self::EmptyAxisName => write!(f, "radar axis name cannot be empty"),
            Self::DuplicateAxis(name) => write!(f, "duplicate radar axis '{name}'"),
            Self::EmptyDistribution => write!(f, "category distribution cannot be empty"),
            Self::EmptyCategoryName => write!(f, "category name cannot be empty"),
            Self::DuplicateCategory(name) => write!(f, "duplicate category '{name}'"),
            Self::InvalidWeight { category, weight } => write!(
                f,
                "weight {weight} of category '{category}' must be a finite non-negative number"
            ),
            Self::ZeroTotalWeight => write!(f, "category weights must sum to a positive total"),
            Self::TotalWeightNotFinite => write!(f, "category weights sum to a non-finite total"),
            Self::BlankFeedback { section, index } => {
                write!(f, "{section} entry #{} is blank", index + 1)
            }
            Self::EmptyPalette => write!(f, "color palette must have at least one entry"),
            Self::MissingField(field) => write!(f, "missing required field '{field}'"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Application errors for the outer surfaces (CLI, config, engine, export)
#[derive(Debug)]
pub enum ResumeBoardError {
    /// Analysis result violates an invariant
    Validation(ValidationError),

    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON (de)serialization error
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for ResumeBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeBoardError::Validation(err) => write!(f, "Validation error: {err}"),
            ResumeBoardError::Io(err) => write!(f, "IO error: {err}"),
            ResumeBoardError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ResumeBoardError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ResumeBoardError::Json(err) => write!(f, "JSON error: {err}"),
            ResumeBoardError::FileNotFound(path) => write!(f, "File not found: {path}"),
            ResumeBoardError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for ResumeBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResumeBoardError::Validation(err) => Some(err),
            ResumeBoardError::Io(err) => Some(err),
            ResumeBoardError::TomlParsing(err) => Some(err),
            ResumeBoardError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ResumeBoardError {
    fn from(err: ValidationError) -> Self {
        ResumeBoardError::Validation(err)
    }
}

impl From<std::io::Error> for ResumeBoardError {
    fn from(err: std::io::Error) -> Self {
        ResumeBoardError::Io(err)
    }
}

impl From<toml::de::Error> for ResumeBoardError {
    fn from(err: toml::de::Error) -> Self {
        ResumeBoardError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for ResumeBoardError {
    fn from(err: serde_json::Error) -> Self {
        ResumeBoardError::Json(err)
    }
}

/// Type alias for Results using ResumeBoardError
pub type Result<T> = std::result::Result<T, ResumeBoardError>;
