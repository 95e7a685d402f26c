//! # 📳 i8me-haptics — Feedback Háptico por Intent
//!
//! Mapeia um catálogo fechado de intents de UX (tap, sucesso, erro,
//! carregamento, assinaturas de marca...) para padrões de vibração e os
//! entrega à engine háptica da plataforma.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              Haptics (contexto)           │
//! │  prepare() ─────► HapticDevice            │
//! │                    └─► HapticEngine       │
//! │  play(intent) ──► table ─► HapticPattern  │
//! │                    └─► PatternPlayer      │
//! └───────────────────────────────────────────┘
//!                      ↓
//!          Plataforma (fire-and-forget)
//! ```
//!
//! Toda falha vira silêncio: háptica é um enriquecimento, nunca um caminho
//! crítico. As variantes `try_prepare`/`try_play` expõem o motivo.
//!
//! ## Exemplo
//!
//! ```rust
//! use i8me_haptics::{Haptics, HapticIntent};
//! use i8me_haptics::sim::SimulatedDevice;
//!
//! let device = SimulatedDevice::new();
//! let haptics = Haptics::new(device.clone());
//!
//! haptics.play(HapticIntent::Success); // sem engine: no-op
//! assert!(device.submitted().is_empty());
//!
//! haptics.prepare();
//! haptics.play(HapticIntent::CheckboxSelected);
//! assert_eq!(device.submitted()[0].len(), 2);
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod intent;
pub mod sim;
pub mod table;

pub use config::HapticsConfig;
pub use dispatcher::{Haptics, PLAYBACK_START};
pub use error::{HapticsError, HapticsResult};
pub use intent::{HapticIntent, IntentCategory};
pub use table::{pattern_for, pattern_with_rng};

// Re-export core types
pub use i8me_core::prelude::*;
