use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown text key: {0}")]
    UnknownKey(String),
    #[error("unknown diagnostic mode: {0}")]
    UnknownMode(String),
}
