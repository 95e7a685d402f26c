//! Dispositivo háptico simulado
//!
//! Implementa os colaboradores de `i8me-core` em memória para testes e
//! benchmarks sem hardware real. Clones compartilham o mesmo estado, então o
//! teste pode entregar um clone ao [`crate::Haptics`] e inspecionar o outro.

use std::sync::{Arc, Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use i8me_core::traits::{HapticCapabilities, HapticDevice, HapticEngine, PatternPlayer};
use i8me_core::{EngineError, HapticPattern, Seconds};

/// Qual etapa da plataforma deve falhar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulatedFaults {
    pub unsupported: bool,
    pub engine_creation: bool,
    pub engine_start: bool,
    pub player_creation: bool,
    pub player_start: bool,
}

impl SimulatedFaults {
    /// Hardware sem atuador
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }
}

/// Estado compartilhado da simulação
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulatedState {
    pub faults: SimulatedFaults,
    pub capability_queries: u64,
    pub engines_created: u64,
    pub engines_started: u64,
    pub players_created: u64,
    /// Padrões cuja reprodução começou, com o instante pedido
    pub submitted: Vec<(HapticPattern, Seconds)>,
}

impl SimulatedState {
    /// Total de interações com engine/player
    pub fn engine_interactions(&self) -> u64 {
        self.engines_created + self.engines_started + self.players_created
    }
}

type SharedState = Arc<Mutex<SimulatedState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, SimulatedState> {
    // Estado só tem contadores e registros; lock envenenado é reaproveitado
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Dispositivo simulado
#[derive(Debug, Clone, Default)]
pub struct SimulatedDevice {
    state: SharedState,
}

impl SimulatedDevice {
    /// Dispositivo com suporte completo e sem falhas
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: SimulatedFaults) -> Self {
        let device = Self::new();
        device.set_faults(faults);
        device
    }

    pub fn set_faults(&self, faults: SimulatedFaults) {
        lock(&self.state).faults = faults;
    }

    /// Cópia do estado atual
    pub fn snapshot(&self) -> SimulatedState {
        lock(&self.state).clone()
    }

    /// Padrões submetidos até agora
    pub fn submitted(&self) -> Vec<HapticPattern> {
        lock(&self.state)
            .submitted
            .iter()
            .map(|(pattern, _)| pattern.clone())
            .collect()
    }

    pub fn engines_created(&self) -> u64 {
        lock(&self.state).engines_created
    }

    pub fn engine_interactions(&self) -> u64 {
        lock(&self.state).engine_interactions()
    }

    /// Limpa contadores e padrões, mantendo as falhas configuradas
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        let faults = state.faults;
        *state = SimulatedState {
            faults,
            ..SimulatedState::default()
        };
    }
}

impl HapticDevice for SimulatedDevice {
    fn name(&self) -> &str {
        "simulated"
    }

    fn capabilities(&self) -> HapticCapabilities {
        let mut state = lock(&self.state);
        state.capability_queries += 1;
        if state.faults.unsupported {
            HapticCapabilities::none()
        } else {
            HapticCapabilities::full()
        }
    }

    fn create_engine(&self) -> Result<Box<dyn HapticEngine>, EngineError> {
        let mut state = lock(&self.state);
        if state.faults.unsupported {
            return Err(EngineError::Unsupported);
        }
        if state.faults.engine_creation {
            return Err(EngineError::CreationFailed("simulated creation fault".into()));
        }
        state.engines_created += 1;
        Ok(Box::new(SimulatedEngine {
            state: Arc::clone(&self.state),
        }))
    }
}

/// Engine simulada
#[derive(Debug)]
pub struct SimulatedEngine {
    state: SharedState,
}

impl HapticEngine for SimulatedEngine {
    fn start(&self) -> Result<(), EngineError> {
        let mut state = lock(&self.state);
        if state.faults.engine_start {
            return Err(EngineError::StartFailed("simulated start fault".into()));
        }
        state.engines_started += 1;
        Ok(())
    }

    fn make_player(&self, pattern: HapticPattern) -> Result<Box<dyn PatternPlayer>, EngineError> {
        let mut state = lock(&self.state);
        if state.faults.player_creation {
            return Err(EngineError::PlayerCreationFailed(
                "simulated player fault".into(),
            ));
        }
        state.players_created += 1;
        Ok(Box::new(SimulatedPlayer {
            pattern: Some(pattern),
            state: Arc::clone(&self.state),
        }))
    }
}

/// Player simulado; registra o padrão no estado ao iniciar
#[derive(Debug)]
pub struct SimulatedPlayer {
    pattern: Option<HapticPattern>,
    state: SharedState,
}

impl PatternPlayer for SimulatedPlayer {
    fn start(&mut self, at: Seconds) -> Result<(), EngineError> {
        let mut state = lock(&self.state);
        if state.faults.player_start {
            return Err(EngineError::PlaybackFailed("simulated playback fault".into()));
        }
        let pattern = self
            .pattern
            .take()
            .ok_or_else(|| EngineError::PlaybackFailed("player already started".into()))?;
        state.submitted.push((pattern, at));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i8me_core::{PulseEvent, DEFAULT_SHARPNESS};

    fn one_tap() -> HapticPattern {
        HapticPattern::new(vec![PulseEvent::tap(0.0, 0.5, DEFAULT_SHARPNESS)]).unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let device = SimulatedDevice::new();
        let other = device.clone();
        let engine = other.create_engine().unwrap();
        engine.start().unwrap();
        assert_eq!(device.engines_created(), 1);
        assert_eq!(device.snapshot().engines_started, 1);
    }

    #[test]
    fn test_player_records_submission() {
        let device = SimulatedDevice::new();
        let engine = device.create_engine().unwrap();
        let mut player = engine.make_player(one_tap()).unwrap();
        player.start(0.0).unwrap();

        assert_eq!(device.submitted(), vec![one_tap()]);
        assert_eq!(device.snapshot().submitted[0].1, 0.0);
    }

    #[test]
    fn test_player_starts_once() {
        let device = SimulatedDevice::new();
        let engine = device.create_engine().unwrap();
        let mut player = engine.make_player(one_tap()).unwrap();
        player.start(0.0).unwrap();
        assert!(player.start(0.0).is_err());
        assert_eq!(device.submitted().len(), 1);
    }

    #[test]
    fn test_unsupported_device() {
        let device = SimulatedDevice::with_faults(SimulatedFaults::unsupported());
        assert!(!device.capabilities().supports_haptics);
        assert_eq!(device.create_engine().unwrap_err(), EngineError::Unsupported);
    }

    #[test]
    fn test_faults_per_stage() {
        let device = SimulatedDevice::with_faults(SimulatedFaults {
            engine_start: true,
            ..SimulatedFaults::default()
        });
        let engine = device.create_engine().unwrap();
        assert!(matches!(engine.start(), Err(EngineError::StartFailed(_))));

        device.set_faults(SimulatedFaults {
            player_creation: true,
            ..SimulatedFaults::default()
        });
        assert!(matches!(
            engine.make_player(one_tap()),
            Err(EngineError::PlayerCreationFailed(_))
        ));
    }

    #[test]
    fn test_reset_keeps_faults() {
        let device = SimulatedDevice::with_faults(SimulatedFaults::unsupported());
        device.capabilities();
        device.reset();
        let state = device.snapshot();
        assert_eq!(state.capability_queries, 0);
        assert!(state.faults.unsupported);
    }
}
