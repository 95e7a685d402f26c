//! # 🎯 Traits — Contrato com a Plataforma Háptica
//!
//! A plataforma hospedeira implementa três colaboradores:
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`HapticDevice`] | Consulta de capacidade e construção da engine |
//! | [`HapticEngine`] | Sessão de renderização; cria players |
//! | [`PatternPlayer`] | Reprodução assíncrona de um padrão |
//!
//! Todas as operações são falíveis e retornam [`EngineError`]. Quem consome
//! os traits decide se propaga ou descarta a falha.
//!
//! ## Exemplo
//!
//! ```
//! use i8me_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct NoHaptics;
//!
//! impl HapticDevice for NoHaptics {
//!     fn capabilities(&self) -> HapticCapabilities {
//!         HapticCapabilities::none()
//!     }
//!
//!     fn create_engine(&self) -> Result<Box<dyn HapticEngine>, EngineError> {
//!         Err(EngineError::Unsupported)
//!     }
//! }
//!
//! assert!(!NoHaptics.capabilities().supports_haptics);
//! ```

use std::fmt::Debug;
use serde::{Deserialize, Serialize};
use crate::error::EngineError;
use crate::pattern::{HapticPattern, Seconds};

/// Capacidades reportadas pelo hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HapticCapabilities {
    /// O dispositivo tem atuador háptico utilizável?
    pub supports_haptics: bool,
}

impl HapticCapabilities {
    /// Hardware com suporte completo
    pub fn full() -> Self {
        Self { supports_haptics: true }
    }

    /// Hardware sem atuador
    pub fn none() -> Self {
        Self { supports_haptics: false }
    }
}

/// Dispositivo físico (ou simulado) com atuador háptico
pub trait HapticDevice: Send + Sync + Debug {
    /// Nome do dispositivo (para logs)
    fn name(&self) -> &str {
        "haptic-device"
    }

    /// Capacidades do hardware; consultada uma vez por `prepare`
    fn capabilities(&self) -> HapticCapabilities;

    /// Constrói uma nova engine (ainda não iniciada)
    fn create_engine(&self) -> Result<Box<dyn HapticEngine>, EngineError>;
}

/// Sessão de renderização da plataforma
pub trait HapticEngine: Send + Sync + Debug {
    /// Inicia a sessão de renderização
    fn start(&self) -> Result<(), EngineError>;

    /// Cria um player para o padrão; o padrão é consumido
    fn make_player(&self, pattern: HapticPattern) -> Result<Box<dyn PatternPlayer>, EngineError>;
}

/// Reprodução de um padrão já montado
pub trait PatternPlayer: Send + Debug {
    /// Começa a renderizar em `at` (tempo relativo da engine); não bloqueia
    fn start(&mut self, at: Seconds) -> Result<(), EngineError>;
}
