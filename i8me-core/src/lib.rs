//! # 📳 i8me-core — Modelo de Pulsos e Traits de Engine
//!
//! Tipos e abstrações compartilhados pelo ecossistema i8me:
//!
//! | Módulo | Conteúdo |
//! |:-------|:---------|
//! | [`pattern`] | [`PulseEvent`], [`PulseKind`], [`HapticPattern`] |
//! | [`traits`] | [`HapticDevice`], [`HapticEngine`], [`PatternPlayer`] |
//! | [`error`] | [`EngineError`], [`PatternError`] |
//!
//! ## Princípio de Design
//!
//! > *"Trait no core, implementação no host."*
//!
//! A síntese de forma de onda, o agendamento do atuador e a detecção de
//! hardware pertencem à plataforma. Este crate apenas descreve os pulsos e o
//! contrato que a plataforma precisa cumprir.
//!
//! ## Exemplo
//!
//! ```
//! use i8me_core::prelude::*;
//!
//! let pattern = HapticPattern::new(vec![
//!     PulseEvent::tap(0.0, 0.6, DEFAULT_SHARPNESS),
//!     PulseEvent::tap(0.06, 0.3, DEFAULT_SHARPNESS),
//! ])?;
//! assert_eq!(pattern.len(), 2);
//! # Ok::<(), PatternError>(())
//! ```

pub mod error;
pub mod pattern;
pub mod prelude;
pub mod traits;

pub use error::{EngineError, PatternError};
pub use pattern::{HapticPattern, PulseEvent, PulseKind, Seconds, DEFAULT_SHARPNESS};
pub use traits::{HapticCapabilities, HapticDevice, HapticEngine, PatternPlayer};
