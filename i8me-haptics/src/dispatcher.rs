//! Dispatcher de padrões
//!
//! [`Haptics`] é o contexto injetável que o host possui: guarda o
//! dispositivo, a configuração e o handle da engine. `prepare` e `play` nunca
//! reportam falhas; as variantes `try_*` expõem o motivo descartado.

use std::sync::{Arc, RwLock};
use i8me_core::traits::{HapticDevice, HapticEngine};
use i8me_core::{HapticPattern, Seconds};
use crate::config::HapticsConfig;
use crate::error::{HapticsError, HapticsResult};
use crate::intent::HapticIntent;
use crate::table;

/// Instante relativo em que todo padrão começa
pub const PLAYBACK_START: Seconds = 0.0;

type EngineHandle = Arc<dyn HapticEngine>;

/// Contexto de feedback háptico
#[derive(Debug)]
pub struct Haptics {
    device: Box<dyn HapticDevice>,
    config: HapticsConfig,
    engine: RwLock<Option<EngineHandle>>,
}

impl Haptics {
    /// Cria contexto com configuração padrão; nenhuma engine até `prepare`
    pub fn new(device: impl HapticDevice + 'static) -> Self {
        Self {
            device: Box::new(device),
            config: HapticsConfig::default(),
            engine: RwLock::new(None),
        }
    }

    /// Cria contexto com configuração específica
    pub fn with_config(
        device: impl HapticDevice + 'static,
        config: HapticsConfig,
    ) -> HapticsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(device)
        })
    }

    pub fn config(&self) -> &HapticsConfig {
        &self.config
    }

    pub fn device_name(&self) -> &str {
        self.device.name()
    }

    /// Existe engine pronta?
    pub fn is_prepared(&self) -> bool {
        matches!(self.engine(), Ok(Some(_)))
    }

    /// Tenta adquirir a engine. Nunca falha de forma observável.
    ///
    /// Cada chamada recria a engine, mesmo que já exista uma.
    pub fn prepare(&self) {
        match self.try_prepare() {
            Ok(()) => tracing::debug!(device = self.device.name(), "haptic engine prepared"),
            Err(err) => {
                tracing::debug!(device = self.device.name(), error = %err, "haptic engine unavailable")
            }
        }
    }

    /// Variante de [`Haptics::prepare`] que retorna o motivo da falha
    ///
    /// Em qualquer falha o handle fica ausente.
    pub fn try_prepare(&self) -> HapticsResult<()> {
        let acquired = self.acquire_engine();
        let mut slot = self.engine.write().map_err(|_| HapticsError::LockPoisoned)?;
        match acquired {
            Ok(engine) => {
                *slot = Some(engine);
                Ok(())
            }
            Err(err) => {
                *slot = None;
                Err(err)
            }
        }
    }

    fn acquire_engine(&self) -> HapticsResult<EngineHandle> {
        if !self.config.enabled {
            return Err(HapticsError::Disabled);
        }
        if !self.device.capabilities().supports_haptics {
            return Err(HapticsError::Unsupported);
        }
        let engine: EngineHandle = Arc::from(self.device.create_engine()?);
        engine.start()?;
        Ok(engine)
    }

    /// Reproduz o padrão do intent. Não bloqueia e nunca falha de forma observável.
    pub fn play(&self, intent: HapticIntent) {
        match self.try_play(intent) {
            Ok(()) => tracing::trace!(%intent, "haptic playback started"),
            Err(err) => tracing::trace!(%intent, error = %err, "haptic playback skipped"),
        }
    }

    /// Variante de [`Haptics::play`] que retorna o motivo da falha
    pub fn try_play(&self, intent: HapticIntent) -> HapticsResult<()> {
        if !self.config.enabled {
            return Err(HapticsError::Disabled);
        }
        let engine = self.engine()?.ok_or(HapticsError::NotPrepared)?;
        let pattern = self.pattern(intent)?;
        let mut player = engine.make_player(pattern)?;
        player.start(PLAYBACK_START)?;
        Ok(())
    }

    /// Padrão que `play` submeteria, já com a escala da configuração
    pub fn pattern(&self, intent: HapticIntent) -> HapticsResult<HapticPattern> {
        Ok(table::pattern_for(intent)?.scaled(self.config.intensity_scale))
    }

    fn engine(&self) -> HapticsResult<Option<EngineHandle>> {
        self.engine
            .read()
            .map(|slot| slot.clone())
            .map_err(|_| HapticsError::LockPoisoned)
    }
}
