use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app, grouped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Dialog(DialogEvent),
    Settings(SettingsEvent),
    Network(NetworkEvent),
    Ui(UiEvent),
}

/// Settings dialog lifecycle, reported by the shell
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// The dialog is about to become visible
    WillShow,
    /// The dialog has left the screen
    DidHide,
}

/// Settings document events (fetch and save of the non-network settings)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Fetch,
    /// The operator triggered the dialog's save operation
    Save {
        settings: GeneralSettings,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    FetchResponse(Result<GeneralSettings, String>),
    #[serde(skip)]
    SaveResponse(Result<GeneralSettings, String>),
}

/// Network tab events: population, widget edits and the two wifi flows
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// The network tab became visible inside an open dialog
    TabShown,

    // Widget edits reported by the shell
    NetworkSelected { id: i32 },
    PasskeyChanged { passkey: String },
    WifiEnabledToggled { enabled: bool },

    // Blocking confirmation surface lifecycle, reported by the shell once the
    // surface is actually on or off screen
    ConfirmationShown(ConfirmationSurface),
    ConfirmationHidden(ConfirmationSurface),

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    StateResponse(Result<NetworkSettingsResponse, String>),
    #[serde(skip)]
    NeedsChangeResponse(Result<NeedsWifiChangeResponse, String>),
    #[serde(skip)]
    ApplyChangeResponse(Result<SetWifiSettingsResponse, String>),
    #[serde(skip)]
    NeedsEnableResponse(Result<NeedsWifiEnabledResponse, String>),
    #[serde(skip)]
    ApplyEnableResponse(Result<SetWifiSettingsResponse, String>),
}

/// UI actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
    ClearWifiNotice,
}
