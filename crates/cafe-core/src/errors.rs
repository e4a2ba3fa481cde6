use thiserror::Error;

/// Result type alias using CafeError
pub type Result<T> = std::result::Result<T, CafeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages. Validation and not-found kinds are the caller's fault;
/// `Persistence` and `Io` mean the store itself could not be reached or
/// read and must propagate unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidName,
    InvalidTimestamp,

    // Referential
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds raised because the caller supplied a bad value
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::InvalidName | ExErrorKind::InvalidTimestamp
        )
    }

    /// True when a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExErrorKind::NotFound)
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus context (operation, entity id,
/// message) for logging and for reporting a failed request to the user.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
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

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Shorthand for `self.kind().is_validation()`
    pub fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }

    /// Shorthand for `self.kind().is_not_found()`
    pub fn is_not_found(&self) -> bool {
        self.kind.is_not_found()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
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

/// Domain error taxonomy for cafe operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CafeError {
    // ===== Validation Errors =====
    /// Dish names must contain at least one non-whitespace character
    #[error("Dish name cannot be empty")]
    EmptyDishName,

    /// Timestamp text does not match `YYYY-MM-DD HH:MM:SS`
    #[error("Invalid {field} '{value}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { field: String, value: String },

    /// Order id supplied as text that is not an integer
    #[error("Order id must be an integer, got '{input}'")]
    InvalidOrderId { input: String },

    /// Fast-order threshold outside the accepted range
    #[error("Fast-order threshold must be at least one minute, got {minutes}")]
    InvalidThreshold { minutes: i64 },

    // ===== Referential Errors =====
    /// Order references a dish that does not exist
    #[error("Dish not found: {dish_id}")]
    DishNotFound { dish_id: i64 },

    /// Review references an order that does not exist
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: i64 },

    // ===== Generic Errors =====
    /// Configuration could not be read or holds an invalid value
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from CafeError to ExError
impl From<CafeError> for ExError {
    fn from(err: CafeError) -> Self {
        let message = err.to_string();
        match err {
            CafeError::EmptyDishName => ExError::new(ExErrorKind::InvalidName)
                .with_op("create_dish")
                .with_message(message),

            CafeError::InvalidTimestamp { field, .. } => {
                ExError::new(ExErrorKind::InvalidTimestamp)
                    .with_op(format!("parse_{}", field))
                    .with_message(message)
            }

            CafeError::InvalidOrderId { input } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(input)
                .with_message(message),

            CafeError::InvalidThreshold { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            CafeError::DishNotFound { dish_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(dish_id.to_string())
                .with_message(message),

            CafeError::OrderNotFound { order_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(order_id.to_string())
                .with_message(message),

            CafeError::Config { .. } => ExError::new(ExErrorKind::Config).with_message(message),

            CafeError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<toml::de::Error> for CafeError {
    fn from(err: toml::de::Error) -> Self {
        CafeError::Config {
            message: err.to_string(),
        }
    }
}
