//! Erros do dispatcher háptico
//!
//! Nenhum destes erros chega ao chamador de `prepare`/`play`; eles existem
//! para as variantes `try_*` e para os testes.

use thiserror::Error;
use i8me_core::{EngineError, PatternError};

pub type HapticsResult<T> = Result<T, HapticsError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HapticsError {
    /// Háptica desligada na configuração
    #[error("Haptics disabled by configuration")]
    Disabled,

    /// Nenhuma engine preparada
    #[error("Engine not prepared")]
    NotPrepared,

    /// Hardware sem suporte
    #[error("Haptics not supported by this device")]
    Unsupported,

    #[error("Engine error: {0}")]
    Engine(EngineError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Engine handle lock poisoned")]
    LockPoisoned,
}

impl From<EngineError> for HapticsError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unsupported => HapticsError::Unsupported,
            other => HapticsError::Engine(other),
        }
    }
}
