//! Catálogo de intents de feedback háptico
//!
//! Conjunto fechado. Adicionar um intent exige também uma entrada em
//! [`crate::table`]; o `match` exaustivo de lá garante isso em compilação.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::HapticsError;

/// Categoria de UX de um intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentCategory {
    BasicTap,
    Toggle,
    Navigation,
    Gesture,
    Feedback,
    Loading,
    Notification,
    Data,
    Branding,
    Gamified,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 10] = [
        IntentCategory::BasicTap,
        IntentCategory::Toggle,
        IntentCategory::Navigation,
        IntentCategory::Gesture,
        IntentCategory::Feedback,
        IntentCategory::Loading,
        IntentCategory::Notification,
        IntentCategory::Data,
        IntentCategory::Branding,
        IntentCategory::Gamified,
    ];

    /// Intents desta categoria, na ordem do catálogo
    pub fn intents(self) -> impl Iterator<Item = HapticIntent> {
        HapticIntent::ALL
            .into_iter()
            .filter(move |intent| intent.category() == self)
    }
}

/// Momento de feedback nomeado; cada um mapeia para exatamente um padrão
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HapticIntent {
    // UI básica
    PrimaryTap,
    SecondaryTap,
    TertiaryTap,
    LightTap,
    MediumTap,
    HeavyTap,

    // Toggles / checkboxes
    CheckboxSelected,
    CheckboxDeselected,

    // Navegação
    NavigationForward,
    NavigationBack,
    TabChanged,

    // Gestos
    LongPress,
    DragStart,
    DragChange,
    DragEnd,

    // Sucesso / falha
    Success,
    SuccessSoft,
    SuccessStrong,
    Error,
    FailureSoft,
    FailureStrong,
    Warning,
    Critical,
    Disabled,

    // Carregamento
    Loading,
    LoadingStart,
    LoadingProgress,
    LoadingComplete,

    // Notificações
    Notification,
    SoftNotification,
    Attention,

    // Dados
    SelectionChanged,
    SelectionBoundary,
    SelectionInvalid,
    DataCopied,
    DataDeleted,

    // Marca
    BrandSignature,
    BrandHeartbeat,
    Highlight,
    Emphasize,

    // Gamificados
    Pop,
    Burst,
    CoinDrop,
    Sparkle,
}

impl HapticIntent {
    /// Todos os intents, na ordem do catálogo
    pub const ALL: [HapticIntent; 44] = [
        HapticIntent::PrimaryTap,
        HapticIntent::SecondaryTap,
        HapticIntent::TertiaryTap,
        HapticIntent::LightTap,
        HapticIntent::MediumTap,
        HapticIntent::HeavyTap,
        HapticIntent::CheckboxSelected,
        HapticIntent::CheckboxDeselected,
        HapticIntent::NavigationForward,
        HapticIntent::NavigationBack,
        HapticIntent::TabChanged,
        HapticIntent::LongPress,
        HapticIntent::DragStart,
        HapticIntent::DragChange,
        HapticIntent::DragEnd,
        HapticIntent::Success,
        HapticIntent::SuccessSoft,
        HapticIntent::SuccessStrong,
        HapticIntent::Error,
        HapticIntent::FailureSoft,
        HapticIntent::FailureStrong,
        HapticIntent::Warning,
        HapticIntent::Critical,
        HapticIntent::Disabled,
        HapticIntent::Loading,
        HapticIntent::LoadingStart,
        HapticIntent::LoadingProgress,
        HapticIntent::LoadingComplete,
        HapticIntent::Notification,
        HapticIntent::SoftNotification,
        HapticIntent::Attention,
        HapticIntent::SelectionChanged,
        HapticIntent::SelectionBoundary,
        HapticIntent::SelectionInvalid,
        HapticIntent::DataCopied,
        HapticIntent::DataDeleted,
        HapticIntent::BrandSignature,
        HapticIntent::BrandHeartbeat,
        HapticIntent::Highlight,
        HapticIntent::Emphasize,
        HapticIntent::Pop,
        HapticIntent::Burst,
        HapticIntent::CoinDrop,
        HapticIntent::Sparkle,
    ];

    /// Nome estável (camelCase), igual ao usado pelo serde
    pub fn name(self) -> &'static str {
        use HapticIntent::*;
        match self {
            PrimaryTap => "primaryTap",
            SecondaryTap => "secondaryTap",
            TertiaryTap => "tertiaryTap",
            LightTap => "lightTap",
            MediumTap => "mediumTap",
            HeavyTap => "heavyTap",
            CheckboxSelected => "checkboxSelected",
            CheckboxDeselected => "checkboxDeselected",
            NavigationForward => "navigationForward",
            NavigationBack => "navigationBack",
            TabChanged => "tabChanged",
            LongPress => "longPress",
            DragStart => "dragStart",
            DragChange => "dragChange",
            DragEnd => "dragEnd",
            Success => "success",
            SuccessSoft => "successSoft",
            SuccessStrong => "successStrong",
            Error => "error",
            FailureSoft => "failureSoft",
            FailureStrong => "failureStrong",
            Warning => "warning",
            Critical => "critical",
            Disabled => "disabled",
            Loading => "loading",
            LoadingStart => "loadingStart",
            LoadingProgress => "loadingProgress",
            LoadingComplete => "loadingComplete",
            Notification => "notification",
            SoftNotification => "softNotification",
            Attention => "attention",
            SelectionChanged => "selectionChanged",
            SelectionBoundary => "selectionBoundary",
            SelectionInvalid => "selectionInvalid",
            DataCopied => "dataCopied",
            DataDeleted => "dataDeleted",
            BrandSignature => "brandSignature",
            BrandHeartbeat => "brandHeartbeat",
            Highlight => "highlight",
            Emphasize => "emphasize",
            Pop => "pop",
            Burst => "burst",
            CoinDrop => "coinDrop",
            Sparkle => "sparkle",
        }
    }

    pub fn category(self) -> IntentCategory {
        use HapticIntent::*;
        match self {
            PrimaryTap | SecondaryTap | TertiaryTap | LightTap | MediumTap | HeavyTap => {
                IntentCategory::BasicTap
            }
            CheckboxSelected | CheckboxDeselected => IntentCategory::Toggle,
            NavigationForward | NavigationBack | TabChanged => IntentCategory::Navigation,
            LongPress | DragStart | DragChange | DragEnd => IntentCategory::Gesture,
            Success | SuccessSoft | SuccessStrong | Error | FailureSoft | FailureStrong
            | Warning | Critical | Disabled => IntentCategory::Feedback,
            Loading | LoadingStart | LoadingProgress | LoadingComplete => IntentCategory::Loading,
            Notification | SoftNotification | Attention => IntentCategory::Notification,
            SelectionChanged | SelectionBoundary | SelectionInvalid | DataCopied | DataDeleted => {
                IntentCategory::Data
            }
            BrandSignature | BrandHeartbeat | Highlight | Emphasize => IntentCategory::Branding,
            Pop | Burst | CoinDrop | Sparkle => IntentCategory::Gamified,
        }
    }
}

impl fmt::Display for HapticIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HapticIntent {
    type Err = HapticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HapticIntent::ALL
            .into_iter()
            .find(|intent| intent.name() == s)
            .ok_or_else(|| HapticsError::UnknownIntent(s.to_string()))
    }
}
