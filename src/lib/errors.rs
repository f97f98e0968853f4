use std::fmt;

use sqlx::error::ErrorKind;

/// Which declarative constraint the store refused a row on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "UNIQUE",
            ConstraintKind::ForeignKey => "FOREIGN KEY",
            ConstraintKind::NotNull => "NOT NULL",
            ConstraintKind::Check => "CHECK",
        };
        f.write_str(name)
    }
}

/// Everything that can stop a tool run.
#[derive(thiserror::Error, Debug)]
pub enum AcademyError {
    /// A row broke one of the table constraints
    #[error("{kind} constraint failed: {message}")]
    Constraint { kind: ConstraintKind, message: String },
    /// The store could not be opened or reached
    #[error("cannot reach the store: {0}")]
    Connection(#[source] sqlx::Error),
    /// Malformed SQL, unexpected column types and similar bugs
    #[error("statement failed: {0}")]
    Statement(#[source] sqlx::Error),
    /// Schema could not be applied
    #[error("failed to create the schema: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("failed to read configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Seed row points at a row the dataset never defines
    #[error("seed refers to unknown {entity} {key}")]
    UnknownSeedReference { entity: &'static str, key: String },
    #[error("seed contains a malformed date {value:?}: {source}")]
    InvalidSeedDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl From<sqlx::Error> for AcademyError {
    fn from(err: sqlx::Error) -> Self {
        let constraint = match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            },
            _ => None,
        };
        if let Some(kind) = constraint {
            return AcademyError::Constraint {
                kind,
                message: err.to_string(),
            };
        }

        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AcademyError::Connection(err),
            _ => AcademyError::Statement(err),
        }
    }
}

impl From<figment::Error> for AcademyError {
    fn from(err: figment::Error) -> Self {
        AcademyError::Config(Box::new(err))
    }
}

impl AcademyError {
    /// Constraint the store rejected, if that is what happened
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            AcademyError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
