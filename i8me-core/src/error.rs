//! Erros do núcleo: engine da plataforma e construção de padrões

use thiserror::Error;

/// Falhas reportadas pelos colaboradores da plataforma
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Hardware sem suporte a háptica
    #[error("Haptics not supported by this device")]
    Unsupported,

    /// Construção da engine falhou
    #[error("Engine creation failed: {0}")]
    CreationFailed(String),

    /// Início da engine falhou
    #[error("Engine start failed: {0}")]
    StartFailed(String),

    /// Construção do player falhou
    #[error("Player creation failed: {0}")]
    PlayerCreationFailed(String),

    /// Início da reprodução falhou
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Padrão háptico inválido
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatternError {
    /// Padrão sem nenhum pulso
    #[error("Pattern has no events")]
    Empty,

    /// Offset negativo ou não finito
    #[error("Event {index}: invalid relative time {value}")]
    InvalidOffset { index: usize, value: f64 },

    /// Duração contínua <= 0 ou não finita
    #[error("Event {index}: invalid duration {value}")]
    InvalidDuration { index: usize, value: f64 },

    /// Intensidade ou nitidez fora de [0, 1]
    #[error("Event {index}: {field} {value} outside [0, 1]")]
    OutOfRange {
        index: usize,
        field: &'static str,
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::CreationFailed("no server".into());
        assert!(err.to_string().contains("Engine creation failed"));
        assert!(err.to_string().contains("no server"));
    }

    #[test]
    fn test_unsupported_display() {
        assert_eq!(
            EngineError::Unsupported.to_string(),
            "Haptics not supported by this device"
        );
    }

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::InvalidDuration { index: 2, value: 0.0 };
        assert_eq!(err.to_string(), "Event 2: invalid duration 0");

        let err = PatternError::OutOfRange {
            index: 0,
            field: "intensity",
            value: 1.5,
        };
        assert!(err.to_string().contains("intensity 1.5"));
    }
}
