use thiserror::Error;

/// Result type alias using CibError
pub type Result<T> = std::result::Result<T, CibError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    MissingField,
    InvalidDocument,

    // Integration/IO
    ReadFailed,
    CommitFailed,
    CreateFailed,
    Serialization,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::ReadFailed => "ERR_READ_FAILED",
            ExErrorKind::CommitFailed => "ERR_COMMIT_FAILED",
            ExErrorKind::CreateFailed => "ERR_CREATE_FAILED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used by the logging facility plus the entity
/// that the failing operation was about.
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

    /// Add entity ID context (resource id, node uname, property name)
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

    /// Get the stable error code
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

/// Error taxonomy for CIB operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CibError {
    // ===== External command errors =====
    /// The CIB could not be fetched or parsed. The cause is logged, not carried.
    #[error("Failed to read the CRM configuration. Maybe the cluster is not started on this node?")]
    ReadFailed,

    /// The update command rejected the document
    #[error("Could not update CIB: {details}")]
    CommitFailed { details: String },

    /// The create command rejected the fragment
    #[error("Could not create CIB entry: {details}")]
    CreateFailed { details: String },

    // ===== Lookup errors =====
    /// No primitive with this id exists in the configuration
    #[error("CRM resource not found in the CIB: {resource_id}")]
    ResourceNotFound { resource_id: String },

    /// No configured node with this uname exists
    #[error("Node not found in the CIB: {uname}")]
    NodeNotFound { uname: String },

    /// No status entry exists for this node
    #[error("Node state not found in the CIB: {uname}")]
    NodeStateNotFound { uname: String },

    // ===== Structural errors =====
    /// The document has no `<cib>` root element
    #[error("Invalid CIB state: root element not found")]
    MissingRoot,

    /// A required attribute is absent
    #[error("Missing attribute '{attribute}' on {element}")]
    MissingAttribute { element: String, attribute: String },

    /// A join phase value outside down/pending/member/banned
    #[error("Unrecognized join state: {value}")]
    UnrecognizedJoinState { value: String },

    /// A property value that does not parse as the expected type
    #[error("Invalid value '{value}' for cluster property {property}")]
    InvalidPropertyValue { property: String, value: String },

    // ===== Generic errors =====
    /// Document serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<&CibError> for ExError {
    fn from(err: &CibError) -> Self {
        ExError::from(err.clone())
    }
}

impl From<CibError> for ExError {
    fn from(err: CibError) -> Self {
        let message = err.to_string();
        match err {
            CibError::ReadFailed => ExError::new(ExErrorKind::ReadFailed)
                .with_op("read")
                .with_message(message),

            CibError::CommitFailed { .. } => ExError::new(ExErrorKind::CommitFailed)
                .with_op("commit")
                .with_message(message),

            CibError::CreateFailed { .. } => ExError::new(ExErrorKind::CreateFailed)
                .with_op("create")
                .with_message(message),

            CibError::ResourceNotFound { resource_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(resource_id)
                .with_message("Resource not found"),

            CibError::NodeNotFound { uname } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(uname)
                .with_message("Node not found"),

            CibError::NodeStateNotFound { uname } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(uname)
                .with_message("Node state not found"),

            CibError::MissingRoot => {
                ExError::new(ExErrorKind::InvalidDocument).with_message(message)
            }

            CibError::MissingAttribute { element, .. } => ExError::new(ExErrorKind::MissingField)
                .with_entity_id(element)
                .with_message(message),

            CibError::UnrecognizedJoinState { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(value)
                .with_message("Unrecognized join state"),

            CibError::InvalidPropertyValue { property, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(property)
                    .with_message(message)
            }

            CibError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CibError::Config { .. } => ExError::new(ExErrorKind::Config).with_message(message),
        }
    }
}
