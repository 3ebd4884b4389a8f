use thiserror::Error;

/// Result type alias using VdiffError
pub type Result<T> = std::result::Result<T, VdiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing. The reconciliation engine itself never fails;
/// these kinds cover the surfaces around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A value supplied by the caller could not be interpreted
    InvalidInput,
    /// Configuration text or environment is malformed
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the offending field or variable
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for vdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VdiffError {
    /// Traversal strategy name not recognised
    #[error("Unknown traversal strategy: {value}")]
    UnknownTraversal { value: String },

    /// Logging profile name not recognised
    #[error("Unknown logging profile: {value}")]
    UnknownProfile { value: String },

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<toml::de::Error> for VdiffError {
    fn from(err: toml::de::Error) -> Self {
        VdiffError::InvalidConfig {
            message: err.message().to_string(),
        }
    }
}

/// Conversion from VdiffError to the canonical ExError
impl From<VdiffError> for ExError {
    fn from(err: VdiffError) -> Self {
        let message = err.to_string();
        match err {
            VdiffError::UnknownTraversal { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("traversal")
                .with_message(message),
            VdiffError::UnknownProfile { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("log_profile")
                .with_message(message),
            VdiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
        }
    }
}
