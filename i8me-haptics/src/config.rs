//! Configuração do dispatcher

use serde::{Deserialize, Serialize};
use crate::error::{HapticsError, HapticsResult};

/// Configuração do [`crate::Haptics`]
///
/// O host carrega de onde quiser (arquivo de settings, preferências do
/// usuário); a biblioteca não lê arquivos nem variáveis de ambiente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticsConfig {
    /// Liga/desliga todo feedback háptico
    pub enabled: bool,
    /// Multiplicador global de intensidade [0.0, 1.0]
    pub intensity_scale: f32,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity_scale: 1.0,
        }
    }
}

impl HapticsConfig {
    /// Configuração com feedback desligado
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_intensity_scale(mut self, scale: f32) -> Self {
        self.intensity_scale = scale;
        self
    }

    pub fn validate(&self) -> HapticsResult<()> {
        if !self.intensity_scale.is_finite() || !(0.0..=1.0).contains(&self.intensity_scale) {
            return Err(HapticsError::InvalidConfig(format!(
                "intensity_scale {} outside [0, 1]",
                self.intensity_scale
            )));
        }
        Ok(())
    }
}
