//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use i8me_core::prelude::*;
//! ```

// Pulsos e padrões
pub use crate::pattern::{
    HapticPattern,
    PulseEvent,
    PulseKind,
    Seconds,
    DEFAULT_SHARPNESS,
};

// Colaboradores da plataforma
pub use crate::traits::{
    HapticCapabilities,
    HapticDevice,
    HapticEngine,
    PatternPlayer,
};

// Erros
pub use crate::error::{EngineError, PatternError};
