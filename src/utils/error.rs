use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComboError {
    #[error("Combo already has all {required} picks")]
    CapacityExceeded { required: usize },

    #[error("Item type '{item_type}' is already part of this combo")]
    DuplicateItemType { item_type: String },

    #[error("Pick index {index} is out of range (combo has {len} picks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Combo is incomplete: {picks} of {required} picks chosen")]
    IncompleteSelection { picks: usize, required: usize },

    #[error("Unknown {kind} option: {id}")]
    UnknownOption { kind: OptionKind, id: String },

    #[error("Store is closed for orders at {at}")]
    StoreClosed {
        at: chrono::NaiveDateTime,
        next_opening: Option<chrono::NaiveDateTime>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Which catalog table an id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    ItemType,
    Protein,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::ItemType => write!(f, "item type"),
            OptionKind::Protein => write!(f, "protein"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Schedule,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ComboError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ComboError::CapacityExceeded { .. }
            | ComboError::DuplicateItemType { .. }
            | ComboError::IndexOutOfRange { .. }
            | ComboError::IncompleteSelection { .. }
            | ComboError::UnknownOption { .. } => ErrorCategory::Selection,
            ComboError::StoreClosed { .. } => ErrorCategory::Schedule,
            ComboError::ConfigValidationError { .. }
            | ComboError::InvalidConfigValueError { .. }
            | ComboError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ComboError::IoError(_) | ComboError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可自行調整選擇
            ComboError::CapacityExceeded { .. }
            | ComboError::DuplicateItemType { .. }
            | ComboError::IncompleteSelection { .. } => ErrorSeverity::Low,
            ComboError::StoreClosed { .. } => ErrorSeverity::Medium,
            // 呼叫端的 bug 或錯誤配置
            ComboError::IndexOutOfRange { .. }
            | ComboError::UnknownOption { .. }
            | ComboError::ConfigValidationError { .. }
            | ComboError::InvalidConfigValueError { .. }
            | ComboError::MissingConfigError { .. } => ErrorSeverity::High,
            ComboError::IoError(_) | ComboError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ComboError::CapacityExceeded { .. } => {
                "Remove a pick before adding another one".to_string()
            }
            ComboError::DuplicateItemType { .. } => {
                "Choose an item type that is not already in the combo".to_string()
            }
            ComboError::IndexOutOfRange { .. } => {
                "Refer to an existing pick by its position (starting at 0)".to_string()
            }
            ComboError::IncompleteSelection { required, .. } => {
                format!("Pick exactly {} different items before adding to cart", required)
            }
            ComboError::UnknownOption { kind, .. } => {
                format!("Use a {} listed in the catalog", kind)
            }
            ComboError::StoreClosed { next_opening, .. } => match next_opening {
                Some(at) => format!("Place the order after {}", at.format("%a %H:%M")),
                None => "Check the configured order hours".to_string(),
            },
            ComboError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            ComboError::SerializationError(_) => "Check the cart line contents".to_string(),
            ComboError::ConfigValidationError { field, .. }
            | ComboError::InvalidConfigValueError { field, .. }
            | ComboError::MissingConfigError { field } => {
                format!("Fix '{}' in the storefront configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ComboError::CapacityExceeded { required } => {
                format!("This combo only holds {} items.", required)
            }
            ComboError::DuplicateItemType { item_type } => {
                format!("{} is already in your combo.", item_type)
            }
            ComboError::IncompleteSelection { picks, required } => {
                format!("Please pick {} more item(s).", required.saturating_sub(*picks))
            }
            ComboError::StoreClosed { .. } => "We are not taking orders right now.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComboError>;
