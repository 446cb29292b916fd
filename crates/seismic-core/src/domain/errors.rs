use crate::numerics::format_decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

use super::DistanceSpan;

pub type SeismicResult<T> = Result<T, SeismicError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeismicErrorCategory {
    Success,
    InputValidationError,
    DataLoadError,
    ComputationError,
    InternalError,
}

impl SeismicErrorCategory {
    pub const fn exit_classification(self) -> ExitClassification {
        match self {
            Self::Success => ExitClassification {
                exit_code: 0,
                rust_category: "Success",
                severity_class: "SUCCESS",
            },
            Self::InputValidationError => ExitClassification {
                exit_code: 2,
                rust_category: "InputValidationError",
                severity_class: "INPUT_FATAL",
            },
            Self::DataLoadError => ExitClassification {
                exit_code: 3,
                rust_category: "DataLoadError",
                severity_class: "DATA_FATAL",
            },
            Self::ComputationError => ExitClassification {
                exit_code: 4,
                rust_category: "ComputationError",
                severity_class: "RUN_FATAL",
            },
            Self::InternalError => ExitClassification {
                exit_code: 5,
                rust_category: "InternalError",
                severity_class: "SYS_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_classification().exit_code
    }

    pub const fn rust_category(self) -> &'static str {
        self.exit_classification().rust_category
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitClassification {
    pub exit_code: i32,
    pub rust_category: &'static str,
    pub severity_class: &'static str,
}

/// Distinguishes the failure modes a request or the table load can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeismicErrorKind {
    FaultNotFound,
    DistanceOutOfRange,
    InvalidDirection,
    InvalidParameter,
    Usage,
    Computation,
    TableLoad,
    Io,
    Internal,
}

impl SeismicErrorKind {
    pub const fn category(self) -> SeismicErrorCategory {
        match self {
            Self::FaultNotFound
            | Self::DistanceOutOfRange
            | Self::InvalidDirection
            | Self::InvalidParameter
            | Self::Usage => SeismicErrorCategory::InputValidationError,
            Self::Computation => SeismicErrorCategory::ComputationError,
            Self::TableLoad | Self::Io => SeismicErrorCategory::DataLoadError,
            Self::Internal => SeismicErrorCategory::InternalError,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::FaultNotFound => "INPUT.FAULT_NOT_FOUND",
            Self::DistanceOutOfRange => "INPUT.DISTANCE_OUT_OF_RANGE",
            Self::InvalidDirection => "INPUT.INVALID_DIRECTION",
            Self::InvalidParameter => "INPUT.INVALID_PARAMETER",
            Self::Usage => "INPUT.CLI_USAGE",
            Self::Computation => "RUN.COMPUTATION",
            Self::TableLoad => "DATA.FAULT_TABLE",
            Self::Io => "IO.FAULT_TABLE",
            Self::Internal => "SYS.INTERNAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeismicError {
    kind: SeismicErrorKind,
    message: String,
    span: Option<DistanceSpan>,
}

impl SeismicError {
    pub fn new(kind: SeismicErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn fault_not_found(fault_name: &str) -> Self {
        Self::new(
            SeismicErrorKind::FaultNotFound,
            format!("fault '{fault_name}' was not found in the fault table"),
        )
    }

    pub fn distance_out_of_range(distance_km: f64, span: DistanceSpan) -> Self {
        Self {
            kind: SeismicErrorKind::DistanceOutOfRange,
            message: format!(
                "distance {} km is outside the supported range {} ~ {} km",
                format_decimal(distance_km),
                format_decimal(span.min_km),
                format_decimal(span.max_km)
            ),
            span: Some(span),
        }
    }

    pub fn invalid_direction(token: &str) -> Self {
        Self::new(
            SeismicErrorKind::InvalidDirection,
            format!("direction '{token}' is not supported; expected 'X' or 'Y'"),
        )
    }

    pub fn invalid_parameter(name: &str, value: f64, constraint: &str) -> Self {
        Self::new(
            SeismicErrorKind::InvalidParameter,
            format!(
                "parameter {name} = {} is invalid; expected {constraint}",
                format_decimal(value)
            ),
        )
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(SeismicErrorKind::Usage, message)
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::new(SeismicErrorKind::Computation, message)
    }

    pub fn table_load(message: impl Into<String>) -> Self {
        Self::new(SeismicErrorKind::TableLoad, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(SeismicErrorKind::Io, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(SeismicErrorKind::Internal, message)
    }

    pub const fn kind(&self) -> SeismicErrorKind {
        self.kind
    }

    pub const fn category(&self) -> SeismicErrorCategory {
        self.kind.category()
    }

    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Sampled distance span of the fault, present on out-of-range errors.
    pub const fn distance_span(&self) -> Option<DistanceSpan> {
        self.span
    }

    pub const fn exit_code(&self) -> i32 {
        self.kind.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category().is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code(), self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for SeismicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category().rust_category(),
            self.code(),
            self.message
        )
    }
}

impl Error for SeismicError {}
