use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Settings document state
    pub general_settings: Option<GeneralSettings>,
    /// Whether the settings dialog should be on screen; the shell watches this
    /// and hides the dialog when it flips to false
    pub settings_dialog_open: bool,

    // Network tab state
    /// False once a state response carried no network section; the rest of the
    /// session issues no further network requests
    pub wifi_supported: bool,
    pub wifi_enabled: bool,
    pub wifi_passkey: String,
    pub passkey_field_enabled: bool,
    pub network_selector: NetworkSelector,
    /// Networks reported by the last state fetch, used to resolve the
    /// selector id back to a name at save time
    pub visible_networks: Vec<VisibleNetwork>,
    pub wifi_interface: Option<String>,
    pub wifi_ip_address: Option<String>,
    pub printer_is_printing: Option<bool>,

    // Per-session flags, reset every time the dialog closes
    pub ui_populated: bool,
    pub ui_ready: bool,
    pub save_requested: bool,
    pub state_fetch_in_flight: bool,

    // Wifi flow state machines
    pub wifi_change_state: WifiChangeState,
    pub wifi_enable_state: WifiEnableState,

    // Blocking confirmation surfaces, one per flow
    pub change_confirmation: BlockingConfirmation,
    pub enable_confirmation: BlockingConfirmation,

    /// Outcome notice for the change flow, dismissed via `UiEvent::ClearWifiNotice`
    pub wifi_notice: Option<Notification>,

    // Request state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            general_settings: None,
            settings_dialog_open: false,
            wifi_supported: true,
            wifi_enabled: false,
            wifi_passkey: String::new(),
            passkey_field_enabled: true,
            network_selector: NetworkSelector::default(),
            visible_networks: Vec::new(),
            wifi_interface: None,
            wifi_ip_address: None,
            printer_is_printing: None,
            ui_populated: false,
            ui_ready: false,
            save_requested: false,
            state_fetch_in_flight: false,
            wifi_change_state: WifiChangeState::default(),
            wifi_enable_state: WifiEnableState::default(),
            change_confirmation: BlockingConfirmation::default(),
            enable_confirmation: BlockingConfirmation::default(),
            wifi_notice: None,
            is_loading: false,
            error_message: None,
            success_message: None,
        }
    }
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Enable or disable the operator-editable wifi controls (selector and
    /// passkey field)
    pub fn set_wifi_controls_enabled(&mut self, enabled: bool) {
        if enabled {
            self.network_selector.enable();
        } else {
            self.network_selector.disable();
        }
        self.passkey_field_enabled = enabled;
    }

    /// Disable the whole network surface for the rest of the session; the
    /// device build has no wifi support
    pub fn disable_network_ui(&mut self) {
        self.wifi_supported = false;
        self.ui_ready = false;
        self.set_wifi_controls_enabled(false);
    }

    /// Per-session cleanup, run on every dialog close.
    ///
    /// Wifi support is re-probed by the next opening's state fetch. The flow
    /// state machines are not touched here; a save flow started by the close
    /// keeps running to completion.
    pub fn reset_session(&mut self) {
        self.ui_populated = false;
        self.ui_ready = false;
        self.save_requested = false;
        self.state_fetch_in_flight = false;
        self.visible_networks.clear();
        self.wifi_supported = true;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
