use crux_core::Command;

use crate::api_get;
use crate::events::Event;
use crate::model::Model;
use crate::types::{
    NetworkSettingsResponse, VisibleNetwork, WifiSettings, INVISIBLE_SELECTION_ID,
    NONE_SELECTED_ID,
};
use crate::Effect;

/// Placeholder row titles for the network selector
const NONE_SELECTED_LABEL: &str = "(none selected)";
const NO_NETWORKS_LABEL: &str = "(no wifi networks detected)";
const WIFI_OFF_LABEL: &str = "(wifi turned off)";

/// Fetch the wifi state and populate the network tab.
///
/// No-op when the tab was already populated this session (unless
/// `force_refresh`), when a fetch is already in flight, or when the device
/// reported no wifi support earlier in the session.
pub fn populate(model: &mut Model, force_refresh: bool) -> Command<Effect, Event> {
    if model.ui_populated && !force_refresh {
        return crux_core::render::render();
    }
    if model.state_fetch_in_flight || !model.wifi_supported {
        return crux_core::render::render();
    }

    model.state_fetch_in_flight = true;
    api_get!(
        Network,
        NetworkEvent,
        "/api/netsettings",
        StateResponse,
        NetworkSettingsResponse
    )
}

/// Handle the wifi state response
pub fn handle_state_response(
    result: Result<NetworkSettingsResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.state_fetch_in_flight = false;

    // The dialog may have closed while the fetch was in flight; the next
    // opening fetches fresh state
    if !model.settings_dialog_open {
        return crux_core::render::render();
    }

    match result {
        Ok(response) => {
            match response.network_settings {
                Some(settings) => {
                    apply_network_settings(&settings, model);
                    model.ui_populated = true;
                    model.ui_ready = true;
                }
                // Device build without wifi support; keep the whole network
                // surface off for the rest of the session
                None => model.disable_network_ui(),
            }
            crux_core::render::render()
        }
        Err(e) => model.set_error_and_render(e),
    }
}

/// Reflect a wifi state into the widget mirror
fn apply_network_settings(settings: &WifiSettings, model: &mut Model) {
    model.wifi_enabled = settings.wifi_enabled;
    model.wifi_passkey = settings.wifi_passkey.clone();
    model.wifi_interface = settings.wifi_interface.clone();
    model.wifi_ip_address = settings.wifi_ip_address.clone();
    model.printer_is_printing = settings.printer_is_printing;
    model.visible_networks = settings.wifi_visible_ssids.clone();

    let (options, selected_id) = build_selector_options(
        &settings.wifi_visible_ssids,
        &settings.wifi_selected_ssid,
        settings.none_selected(),
        settings.wifi_enabled,
    );
    model.network_selector.set_options(options);
    model.network_selector.select(selected_id);
    // Selector and passkey field follow the enabled state, same as the
    // optimistic update the toggle performs
    model.set_wifi_controls_enabled(settings.wifi_enabled);
}

/// Build the selector option list and resolve the initial selection.
///
/// The option list always starts with a placeholder row with id 0: the
/// "(none selected)" row when networks are visible, otherwise a row naming
/// why the list is empty. A recorded network that is selected but not
/// currently visible gets a synthetic entry with id -1 so the operator's
/// prior choice survives being out of radio range.
fn build_selector_options(
    visible: &[VisibleNetwork],
    selected_ssid: &str,
    none_selected: bool,
    wifi_enabled: bool,
) -> (Vec<VisibleNetwork>, i32) {
    let mut options = Vec::with_capacity(visible.len() + 1);

    if visible.is_empty() {
        let label = if wifi_enabled {
            NO_NETWORKS_LABEL
        } else {
            WIFI_OFF_LABEL
        };
        options.push(VisibleNetwork {
            id: NONE_SELECTED_ID,
            name: label.to_string(),
        });
    } else {
        options.push(VisibleNetwork {
            id: NONE_SELECTED_ID,
            name: NONE_SELECTED_LABEL.to_string(),
        });
        options.extend(visible.iter().cloned());
    }

    let visible_match = visible.iter().find(|n| n.name == selected_ssid);
    let selected_id = match visible_match {
        Some(network) if !none_selected => network.id,
        _ if !selected_ssid.is_empty() => {
            options.push(VisibleNetwork {
                id: INVISIBLE_SELECTION_ID,
                name: selected_ssid.to_string(),
            });
            INVISIBLE_SELECTION_ID
        }
        _ => NONE_SELECTED_ID,
    };

    (options, selected_id)
}
