//! Pulsos e padrões hápticos
//!
//! Um [`HapticPattern`] é uma sequência ordenada de [`PulseEvent`]s que a
//! engine da plataforma renderiza como um único efeito. Tempos são relativos
//! ao início do padrão, em segundos.

use serde::{Deserialize, Serialize};
use crate::error::PatternError;

/// Tempo relativo em segundos
pub type Seconds = f64;

/// Nitidez usada quando o autor do padrão não especifica uma
pub const DEFAULT_SHARPNESS: f32 = 0.5;

/// Tipo de pulso
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PulseKind {
    /// Pulso instantâneo ("tap")
    Transient,
    /// Pulso estendido no tempo
    Continuous {
        /// Duração (s), sempre > 0
        duration: Seconds,
    },
}

/// Uma unidade de saída háptica
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseEvent {
    pub kind: PulseKind,
    /// Início relativo ao padrão (s)
    pub relative_time: Seconds,
    /// Intensidade normalizada [0.0, 1.0]
    pub intensity: f32,
    /// Nitidez normalizada [0.0, 1.0]
    pub sharpness: f32,
}

impl PulseEvent {
    /// Pulso instantâneo
    pub fn tap(at: Seconds, intensity: f32, sharpness: f32) -> Self {
        Self {
            kind: PulseKind::Transient,
            relative_time: at,
            intensity: intensity.clamp(0.0, 1.0),
            sharpness: sharpness.clamp(0.0, 1.0),
        }
    }

    /// Pulso contínuo com duração
    pub fn continuous(at: Seconds, intensity: f32, sharpness: f32, duration: Seconds) -> Self {
        Self {
            kind: PulseKind::Continuous { duration },
            relative_time: at,
            intensity: intensity.clamp(0.0, 1.0),
            sharpness: sharpness.clamp(0.0, 1.0),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self.kind, PulseKind::Transient)
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self.kind, PulseKind::Continuous { .. })
    }

    /// Duração do pulso (zero para transientes)
    pub fn duration(&self) -> Seconds {
        match self.kind {
            PulseKind::Transient => 0.0,
            PulseKind::Continuous { duration } => duration,
        }
    }

    /// Instante em que o pulso termina
    pub fn end_time(&self) -> Seconds {
        self.relative_time + self.duration()
    }

    fn validate(&self, index: usize) -> Result<(), PatternError> {
        if !self.relative_time.is_finite() || self.relative_time < 0.0 {
            return Err(PatternError::InvalidOffset {
                index,
                value: self.relative_time,
            });
        }

        if let PulseKind::Continuous { duration } = self.kind {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(PatternError::InvalidDuration {
                    index,
                    value: duration,
                });
            }
        }

        for (field, value) in [("intensity", self.intensity), ("sharpness", self.sharpness)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PatternError::OutOfRange { index, field, value });
            }
        }

        Ok(())
    }
}

/// Sequência ordenada de pulsos que forma um efeito reproduzível
///
/// Construído a cada dispatch e consumido pelo player; nunca é cacheado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HapticPattern {
    events: Vec<PulseEvent>,
}

impl HapticPattern {
    /// Cria padrão validando cada pulso
    pub fn new(events: Vec<PulseEvent>) -> Result<Self, PatternError> {
        let pattern = Self { events };
        pattern.validate()?;
        Ok(pattern)
    }

    /// Valida o padrão (útil após desserialização)
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.events.is_empty() {
            return Err(PatternError::Empty);
        }
        self.events
            .iter()
            .enumerate()
            .try_for_each(|(index, event)| event.validate(index))
    }

    pub fn events(&self) -> &[PulseEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &PulseEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fim do último pulso (s)
    pub fn total_duration(&self) -> Seconds {
        self.events
            .iter()
            .map(PulseEvent::end_time)
            .fold(0.0, f64::max)
    }

    /// Multiplica todas as intensidades por `factor`, mantendo [0, 1]
    pub fn scaled(mut self, factor: f32) -> Self {
        for event in &mut self.events {
            event.intensity = (event.intensity * factor).clamp(0.0, 1.0);
        }
        self
    }

    pub fn into_events(self) -> Vec<PulseEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a HapticPattern {
    type Item = &'a PulseEvent;
    type IntoIter = std::slice::Iter<'a, PulseEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_clamps_parameters() {
        let tap = PulseEvent::tap(0.0, 1.4, -0.2);
        assert_eq!(tap.intensity, 1.0);
        assert_eq!(tap.sharpness, 0.0);
        assert!(tap.is_transient());
        assert_eq!(tap.duration(), 0.0);
    }

    #[test]
    fn test_continuous_end_time() {
        let pulse = PulseEvent::continuous(0.14, 0.4, 1.0, 0.2);
        assert!(pulse.is_continuous());
        assert!((pulse.end_time() - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert_eq!(HapticPattern::new(vec![]), Err(PatternError::Empty));
    }

    #[test]
    fn test_negative_offset_rejected() {
        let result = HapticPattern::new(vec![
            PulseEvent::tap(0.0, 0.5, DEFAULT_SHARPNESS),
            PulseEvent::tap(-0.1, 0.5, DEFAULT_SHARPNESS),
        ]);
        assert!(matches!(result, Err(PatternError::InvalidOffset { index: 1, .. })));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = HapticPattern::new(vec![PulseEvent::continuous(0.0, 0.3, 0.2, 0.0)]);
        assert!(matches!(result, Err(PatternError::InvalidDuration { index: 0, .. })));
    }

    #[test]
    fn test_nan_intensity_rejected() {
        let result = HapticPattern::new(vec![PulseEvent::tap(0.0, f32::NAN, 0.5)]);
        assert!(matches!(
            result,
            Err(PatternError::OutOfRange { field: "intensity", .. })
        ));
    }

    #[test]
    fn test_unordered_offsets_allowed() {
        let pattern = HapticPattern::new(vec![
            PulseEvent::tap(0.1, 0.5, DEFAULT_SHARPNESS),
            PulseEvent::tap(0.0, 0.5, DEFAULT_SHARPNESS),
        ]);
        assert!(pattern.is_ok());
    }

    #[test]
    fn test_total_duration() {
        let pattern = HapticPattern::new(vec![
            PulseEvent::tap(0.0, 1.0, DEFAULT_SHARPNESS),
            PulseEvent::tap(0.1, 0.8, DEFAULT_SHARPNESS),
            PulseEvent::continuous(0.14, 0.4, 1.0, 0.2),
        ])
        .unwrap();
        assert_eq!(pattern.len(), 3);
        assert!((pattern.total_duration() - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_clamps() {
        let pattern = HapticPattern::new(vec![
            PulseEvent::tap(0.0, 0.8, DEFAULT_SHARPNESS),
            PulseEvent::tap(0.05, 0.4, DEFAULT_SHARPNESS),
        ])
        .unwrap();

        let half = pattern.clone().scaled(0.5);
        assert!((half.events()[0].intensity - 0.4).abs() < 1e-6);
        assert!((half.events()[1].intensity - 0.2).abs() < 1e-6);

        let loud = pattern.scaled(2.0);
        assert_eq!(loud.events()[0].intensity, 1.0);
    }

    #[test]
    fn test_deserialized_pattern_validates() {
        let json = r#"{"events":[{"kind":{"Continuous":{"duration":-1.0}},"relative_time":0.0,"intensity":0.5,"sharpness":0.5}]}"#;
        let pattern: HapticPattern = serde_json::from_str(json).unwrap();
        assert!(pattern.validate().is_err());
    }
}
