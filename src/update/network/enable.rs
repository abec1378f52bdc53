use crux_core::Command;

use crate::api_post;
use crate::events::Event;
use crate::model::Model;
use crate::types::{
    NeedsWifiEnabledResponse, SetWifiSettingsResponse, WifiEnableState, WifiEnabledRequest,
};
use crate::Effect;

const WIFI_ON_CAPTION: &str = "Turning printer wifi on.";
const WIFI_OFF_CAPTION: &str = "Turning printer wifi off.";

/// Handle the operator toggling the wifi-enabled control.
///
/// Toggles arriving before population completes reflect stale widget state,
/// not operator intent, and are dropped. The widget enablement updates
/// optimistically; the device is only consulted about the disruptive part.
pub fn handle_wifi_toggled(enabled: bool, model: &mut Model) -> Command<Effect, Event> {
    if !model.ui_ready {
        return crux_core::render::render();
    }
    if !matches!(model.wifi_enable_state, WifiEnableState::Idle) {
        return crux_core::render::render();
    }

    model.wifi_enabled = enabled;
    model.set_wifi_controls_enabled(enabled);

    let request = WifiEnabledRequest {
        wifi_enabled: enabled,
    };
    model.wifi_enable_state = WifiEnableState::CheckingNeed {
        request: request.clone(),
    };
    api_post!(
        Network,
        NetworkEvent,
        model,
        "/api/needsWifiEnabled",
        NeedsEnableResponse,
        "Check wifi enable",
        body_json: &request,
        expect_json: NeedsWifiEnabledResponse
    )
}

/// Handle the enable needs-check response
pub fn handle_needs_enable_response(
    result: Result<NeedsWifiEnabledResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    match model.wifi_enable_state.clone() {
        WifiEnableState::CheckingNeed { request } => {
            match result {
                Ok(response) if response.needs_enabled() => {
                    let caption = if request.wifi_enabled {
                        WIFI_ON_CAPTION
                    } else {
                        WIFI_OFF_CAPTION
                    };
                    model.wifi_enable_state = WifiEnableState::ConfirmationPending { request };
                    model.enable_confirmation.show(caption);
                }
                // No device action needed, or the check failed; the
                // optimistic widget state stands either way
                _ => model.wifi_enable_state = WifiEnableState::Idle,
            }
            crux_core::render::render()
        }

        _ => crux_core::render::render(),
    }
}

/// Handle the enable surface becoming visible; triggers the apply
pub fn handle_confirmation_shown(model: &mut Model) -> Command<Effect, Event> {
    match model.wifi_enable_state.clone() {
        WifiEnableState::ConfirmationPending { request } => {
            model.wifi_enable_state = WifiEnableState::Applying {
                request: request.clone(),
            };
            api_post!(
                Network,
                NetworkEvent,
                model,
                "/api/enableWifi",
                ApplyEnableResponse,
                "Apply wifi enable",
                body_json: &request,
                expect_json: SetWifiSettingsResponse
            )
        }

        // Duplicate or stray shown report
        _ => crux_core::render::render(),
    }
}

/// Handle the enable apply response.
///
/// The outcome is logged but never announced; the refresh that follows the
/// surface hiding shows the resulting state instead.
pub fn handle_apply_enable_response(
    result: Result<SetWifiSettingsResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    match model.wifi_enable_state.clone() {
        WifiEnableState::Applying { .. } => {
            match result {
                Ok(response) => log::debug!("wifi enable outcome: {:?}", response.flags()),
                Err(e) => log::debug!("wifi enable apply failed: {e}"),
            }
            model.wifi_enable_state = WifiEnableState::RefreshPending;
            model.enable_confirmation.hide();
            crux_core::render::render()
        }

        _ => crux_core::render::render(),
    }
}

/// Handle the enable surface leaving the screen.
///
/// The operation may have changed which networks are visible or selected, so
/// the whole tab state is treated as stale and fetched again.
pub fn handle_confirmation_hidden(model: &mut Model) -> Command<Effect, Event> {
    match model.wifi_enable_state.clone() {
        WifiEnableState::RefreshPending => {
            model.wifi_enable_state = WifiEnableState::Idle;
            model.ui_populated = false;
            model.ui_ready = false;
            super::populate(model, false)
        }

        _ => crux_core::render::render(),
    }
}
