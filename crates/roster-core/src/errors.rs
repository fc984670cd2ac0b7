use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI) can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    /// An exactly-one lookup matched more than one row
    MultipleFound,
    /// Unique, foreign-key or check constraint rejected by the store
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
    /// Settings that load but hold an unusable value
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MultipleFound => "ERR_MULTIPLE_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// A kind callers can match on, with optional operation, entity id and
/// message for the human reading it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (employee name, employee id or department code)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
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

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for employee/department operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    // ===== Lookup Errors =====
    /// No employee matched an exactly-one lookup
    #[error("Employee not found: {name}")]
    EmployeeNotFound { name: String },

    /// More than one employee matched an exactly-one lookup
    #[error("Multiple employees found for {name}: {count}")]
    MultipleEmployeesFound { name: String, count: usize },

    // ===== Validation Errors =====
    /// A required text field was empty or whitespace
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A text field exceeded its column width
    #[error("{field} is {actual} characters, maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// State code is not exactly two characters
    #[error("Invalid state code: {state:?} (expected 2 characters)")]
    InvalidStateCode { state: String },
}

/// Conversion from RosterError to ExError
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::EmployeeNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Employee not found"),

            RosterError::MultipleEmployeesFound { name, count } => {
                ExError::new(ExErrorKind::MultipleFound)
                    .with_entity_id(name)
                    .with_message(format!("Expected one employee, found {}", count))
            }

            err @ (RosterError::EmptyField { .. }
            | RosterError::FieldTooLong { .. }
            | RosterError::InvalidStateCode { .. }) => {
                ExError::new(ExErrorKind::InvalidInput).with_message(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(ExErrorKind::MultipleFound.code(), "ERR_MULTIPLE_FOUND");
        assert_eq!(
            ExErrorKind::ConstraintViolation.code(),
            "ERR_CONSTRAINT_VIOLATION"
        );
        assert_eq!(ExErrorKind::Persistence.code(), "ERR_PERSISTENCE");
    }

    #[test]
    fn test_employee_not_found_maps_to_not_found() {
        let err: ExError = RosterError::EmployeeNotFound {
            name: "Nobody".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("Nobody"));
    }

    #[test]
    fn test_multiple_found_keeps_count_in_message() {
        let err: ExError = RosterError::MultipleEmployeesFound {
            name: "Twin".to_string(),
            count: 2,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::MultipleFound);
        assert!(err.message().contains('2'));
    }

    #[test]
    fn test_validation_errors_map_to_invalid_input() {
        let err: ExError = RosterError::InvalidStateCode {
            state: "CAL".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("CAL"));
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("employee_by_name")
            .with_entity_id("Nobody")
            .with_message("Employee not found");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("employee_by_name"));
        assert!(rendered.contains("Nobody"));
    }

    #[test]
    fn test_message_omitted_when_empty() {
        let err = ExError::new(ExErrorKind::Config).with_op("load_settings");
        assert_eq!(err.to_string(), "[ERR_CONFIG] in operation 'load_settings'");
    }
}
