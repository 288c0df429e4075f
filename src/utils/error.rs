use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InputParse {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Form field '{field}' is missing")]
    MissingField { field: String },

    #[error("Request to roadmap service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Roadmap service responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Roadmap service did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Could not decode roadmap response: {message}")]
    Decode { message: String },

    #[error("A roadmap request is already in flight")]
    Busy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid configuration value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RoadmapError>;

/// Coarse classification used by the submit flow and the CLI exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Transport,
    Decode,
    Busy,
    Config,
    Io,
}

impl ErrorKind {
    /// Process exit code reported by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Input | ErrorKind::Config | ErrorKind::Busy => 1,
            ErrorKind::Transport => 2,
            ErrorKind::Decode | ErrorKind::Io => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RoadmapError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputParse { .. } | Self::MissingField { .. } => ErrorKind::Input,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Timeout(_) => {
                ErrorKind::Transport
            }
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Busy => ErrorKind::Busy,
            Self::Io(_) => ErrorKind::Io,
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => ErrorKind::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::Busy => ErrorSeverity::Low,
            ErrorKind::Transport => ErrorSeverity::Medium,
            ErrorKind::Input | ErrorKind::Config => ErrorSeverity::High,
            ErrorKind::Decode | ErrorKind::Io => ErrorSeverity::Critical,
        }
    }

    /// Message shown inside the output container. Never includes raw response bodies.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputParse { field, .. } => {
                format!("'{}' alanı geçerli bir tam sayı olmalıdır.", field)
            }
            Self::MissingField { field } => format!("'{}' alanı bulunamadı.", field),
            Self::Transport(_) => "Yol haritası servisine ulaşılamadı.".to_string(),
            Self::HttpStatus { status } => {
                format!("Yol haritası servisi bir hata döndürdü (HTTP {}).", status)
            }
            Self::Timeout(_) => "Yol haritası servisi zamanında yanıt vermedi.".to_string(),
            Self::Decode { .. } => "Yol haritası yanıtı okunamadı.".to_string(),
            Self::Busy => "Bir istek zaten işleniyor.".to_string(),
            Self::Io(e) => format!("Dosya işlemi başarısız: {}", e),
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => {
                format!("Yapılandırma hatası: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Input => {
                "Check the form values; daily time must be a non-negative whole number"
            }
            ErrorKind::Transport => {
                "Check that the roadmap service is running and reachable, then retry"
            }
            ErrorKind::Decode => {
                "The service must answer with a JSON array of {step, days_needed} objects"
            }
            ErrorKind::Busy => "Wait for the pending request to finish",
            ErrorKind::Config => "Fix the configuration value and run again",
            ErrorKind::Io => "Check that the output path is writable",
        }
    }
}
