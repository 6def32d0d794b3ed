use crate::config::ConfigError;
use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    Config(ConfigError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self(AppErrorType::Config(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn kind(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            AppErrorType::GameError(e) => writeln!(f, "Error:\n{}", e)?,
            AppErrorType::Config(e) => writeln!(f, "Error:\ninvalid configuration: {}", e)?,
        }
        writeln!(f, "Trace:")?;
        for t in self.1.iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let result: AppResult = Err(ConfigError::ZeroMovePeriod.into());
    let error = result
        .with_trace_step("validating config")
        .with_trace_step("startup")
        .unwrap_err();

    assert!(matches!(error.kind(), AppErrorType::Config(ConfigError::ZeroMovePeriod)));
    let text = error.to_string();
    let startup = text.find(" in startup").unwrap();
    let validating = text.find(" in validating config").unwrap();
    assert!(startup < validating, "{}", text);
}
