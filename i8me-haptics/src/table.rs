//! Tabela intent → padrão
//!
//! Regras de autoria:
//! - intents simples: um tap, intensidade proporcional ao peso (light < medium < heavy)
//! - acentos: dois taps a 0.05–0.12 s, o segundo normalmente mais fraco
//! - contínuos: um pulso estendido; nitidez baixa para "segurar", alta para alerta
//! - compostos de marca: dois ou três pulsos, às vezes com cauda contínua
//!
//! `sparkle` é o único padrão não determinístico.

use rand::Rng;
use i8me_core::{HapticPattern, PatternError, PulseEvent, Seconds, DEFAULT_SHARPNESS};
use crate::intent::HapticIntent;

/// Pulsos do sparkle
pub const SPARKLE_PULSES: usize = 5;
/// Espaçamento entre pulsos do sparkle (s)
pub const SPARKLE_SPACING: Seconds = 0.03;
/// Faixa de intensidade sorteada para cada pulso do sparkle
pub const SPARKLE_INTENSITY: std::ops::RangeInclusive<f32> = 0.2..=0.5;

/// Resolve o padrão de um intent usando o RNG da thread
pub fn pattern_for(intent: HapticIntent) -> Result<HapticPattern, PatternError> {
    pattern_with_rng(intent, &mut rand::thread_rng())
}

/// Resolve o padrão de um intent com um RNG explícito
pub fn pattern_with_rng<R: Rng + ?Sized>(
    intent: HapticIntent,
    rng: &mut R,
) -> Result<HapticPattern, PatternError> {
    use HapticIntent::*;

    let events = match intent {
        // --- Taps básicos ---
        PrimaryTap => vec![tap(0.0, 0.55)],
        SecondaryTap => vec![tap(0.0, 0.35)],
        TertiaryTap => vec![tap(0.0, 0.2)],
        LightTap => vec![tap(0.0, 0.1)],
        MediumTap => vec![tap(0.0, 0.4)],
        HeavyTap => vec![tap(0.0, 0.8)],

        // --- Toggles ---
        CheckboxSelected => vec![tap(0.0, 0.6), tap(0.06, 0.3)],
        CheckboxDeselected => vec![tap(0.0, 0.25)],

        // --- Navegação ---
        NavigationForward => vec![
            tap(0.0, 0.5),
            PulseEvent::continuous(0.02, 0.3, 0.4, 0.08),
        ],
        NavigationBack => vec![tap(0.0, 0.4), tap(0.05, 0.2)],
        TabChanged => vec![tap(0.0, 0.5), tap(0.07, 0.3)],

        // --- Gestos ---
        LongPress => vec![PulseEvent::continuous(0.0, 0.3, 0.2, 0.3)],
        DragStart => vec![tap(0.0, 0.3)],
        DragChange => vec![PulseEvent::continuous(0.0, 0.2, 0.3, 0.05)],
        DragEnd => vec![tap(0.0, 0.5)],

        // --- Sucesso / falha ---
        Success => success(),
        SuccessSoft => vec![tap(0.0, 0.4), tap(0.08, 0.2)],
        SuccessStrong => vec![
            tap(0.0, 0.9),
            tap(0.1, 0.7),
            PulseEvent::continuous(0.15, 0.4, 0.2, 0.1),
        ],
        Error => error(),
        FailureSoft => vec![tap(0.0, 0.25), tap(0.07, 0.1)],
        FailureStrong => vec![tap(0.0, 1.0), tap(0.12, 0.6)],
        Warning => vec![PulseEvent::continuous(0.0, 0.5, 0.7, 0.12)],
        Critical => vec![
            tap(0.0, 1.0),
            tap(0.1, 0.8),
            PulseEvent::continuous(0.14, 0.4, 1.0, 0.2),
        ],
        Disabled => vec![PulseEvent::tap(0.0, 0.1, 0.1)],

        // --- Carregamento ---
        Loading => vec![PulseEvent::continuous(0.0, 0.2, 0.1, 0.6)],
        LoadingStart => vec![tap(0.0, 0.3)],
        LoadingProgress => vec![tap(0.0, 0.2), tap(0.1, 0.2)],
        LoadingComplete => vec![tap(0.0, 0.4), tap(0.1, 0.6)],

        // --- Notificações ---
        Notification => vec![tap(0.0, 0.5), tap(0.08, 0.4)],
        SoftNotification => vec![tap(0.0, 0.3)],
        Attention => vec![tap(0.0, 0.7), tap(0.08, 0.7), tap(0.16, 0.7)],

        // --- Dados ---
        SelectionChanged => vec![tap(0.0, 0.25)],
        SelectionBoundary => vec![tap(0.0, 0.45)],
        SelectionInvalid => vec![tap(0.0, 0.15)],
        DataCopied => data_copied(),
        DataDeleted => vec![tap(0.0, 0.2), tap(0.05, 0.4)],

        // --- Marca ---
        BrandSignature => brand_signature(),
        BrandHeartbeat => brand_heartbeat(),
        Highlight => ripple_highlight(),
        Emphasize => ripple_emphasize(),

        // --- Gamificados ---
        Pop => vec![PulseEvent::tap(0.0, 0.5, 0.9)],
        Burst => vec![tap(0.0, 1.0), tap(0.05, 0.5), tap(0.10, 0.3)],
        CoinDrop => coin_drop(),
        Sparkle => sparkle(rng),
    };

    HapticPattern::new(events)
}

/// Tap com nitidez padrão
fn tap(at: Seconds, intensity: f32) -> PulseEvent {
    PulseEvent::tap(at, intensity, DEFAULT_SHARPNESS)
}

fn success() -> Vec<PulseEvent> {
    vec![
        PulseEvent::tap(0.0, 0.7, 0.6),
        tap(0.09, 0.5),
        PulseEvent::continuous(0.14, 0.25, 0.3, 0.1),
    ]
}

fn error() -> Vec<PulseEvent> {
    vec![
        PulseEvent::tap(0.0, 0.9, 0.9),
        PulseEvent::tap(0.08, 0.9, 0.9),
        PulseEvent::continuous(0.16, 0.3, 0.8, 0.08),
    ]
}

fn data_copied() -> Vec<PulseEvent> {
    vec![PulseEvent::tap(0.0, 0.5, 0.8), tap(0.06, 0.3)]
}

fn brand_signature() -> Vec<PulseEvent> {
    vec![
        tap(0.0, 0.7),
        tap(0.10, 0.5),
        PulseEvent::continuous(0.15, 0.3, 0.2, 0.15),
    ]
}

fn brand_heartbeat() -> Vec<PulseEvent> {
    vec![tap(0.0, 0.8), tap(0.12, 0.6)]
}

fn ripple_highlight() -> Vec<PulseEvent> {
    vec![tap(0.0, 0.4), tap(0.07, 0.3)]
}

fn ripple_emphasize() -> Vec<PulseEvent> {
    vec![tap(0.0, 0.7), tap(0.10, 0.5), tap(0.18, 0.3)]
}

fn coin_drop() -> Vec<PulseEvent> {
    vec![tap(0.0, 0.8), PulseEvent::continuous(0.05, 0.3, 1.0, 0.1)]
}

fn sparkle<R: Rng + ?Sized>(rng: &mut R) -> Vec<PulseEvent> {
    (0..SPARKLE_PULSES)
        .map(|i| {
            PulseEvent::tap(
                i as Seconds * SPARKLE_SPACING,
                rng.gen_range(SPARKLE_INTENSITY),
                1.0,
            )
        })
        .collect()
}
