use serde::{Deserialize, Serialize};

/// Selector id of the placeholder row ("(none selected)" and friends)
pub const NONE_SELECTED_ID: i32 = 0;

/// Selector id of the synthetic entry for a recorded network that is not in
/// the currently visible list
pub const INVISIBLE_SELECTION_ID: i32 = -1;

/// One wifi network as listed by the controller: the cell id assigned by the
/// radio scan and the SSID
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisibleNetwork {
    pub id: i32,
    pub name: String,
}

/// Wifi state as reported by the controller.
///
/// Every member may be absent on older controller builds; absent booleans
/// read as false and absent strings/lists as empty, except `wifiNoneSelected`
/// which has a dedicated fallback (see [`WifiSettings::none_selected`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiSettings {
    #[serde(default)]
    pub wifi_enabled: bool,
    #[serde(default)]
    pub wifi_passkey: String,
    #[serde(default, rename = "wifiVisibleSSIDs")]
    pub wifi_visible_ssids: Vec<VisibleNetwork>,
    #[serde(default, rename = "wifiSelectedSSID")]
    pub wifi_selected_ssid: String,
    #[serde(default)]
    pub wifi_none_selected: Option<bool>,
    #[serde(default)]
    pub wifi_interface: Option<String>,
    #[serde(default, rename = "wifiIPAddress")]
    pub wifi_ip_address: Option<String>,
    #[serde(default)]
    pub printer_is_printing: Option<bool>,
}

impl WifiSettings {
    /// Whether no network is selected on the device.
    ///
    /// When the controller omits the explicit flag, an empty recorded SSID
    /// means nothing is selected.
    pub fn none_selected(&self) -> bool {
        self.wifi_none_selected
            .unwrap_or_else(|| self.wifi_selected_ssid.is_empty())
    }
}

/// Response of `GET /api/netsettings`.
///
/// A response without the `networkSettings` member comes from a device build
/// without wifi support.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettingsResponse {
    #[serde(default)]
    pub network_settings: Option<WifiSettings>,
}

/// The operator's wifi edit, captured from the widgets when the dialog closes
/// with a save. Sent as the body of both the needs-check and the apply.
///
/// The resolved selector id is kept for the flow itself and never serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiEditRequest {
    pub wifi_enabled: bool,
    #[serde(rename = "wifiSelectedSSID")]
    pub wifi_selected_ssid: String,
    pub wifi_passkey: String,
    pub wifi_none_selected: bool,
    #[serde(skip)]
    pub selected_id: i32,
}

/// Body of the enable/disable needs-check and apply
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiEnabledRequest {
    pub wifi_enabled: bool,
}

/// What the device would have to do to honor a wifi edit. Any flag set means
/// the edit is disruptive and needs the confirmation surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiNeedsChangeFlags {
    #[serde(default)]
    pub needs_wifi_connect: bool,
    #[serde(default)]
    pub needs_wifi_disabled: bool,
    #[serde(default)]
    pub needs_wifi_switch: bool,
}

impl WifiNeedsChangeFlags {
    /// Whether the device needs any action at all
    pub fn any(&self) -> bool {
        self.needs_wifi_connect || self.needs_wifi_disabled || self.needs_wifi_switch
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiNeedsChangeResult {
    #[serde(default)]
    pub wifi_needs_change_flags: Option<WifiNeedsChangeFlags>,
}

/// Response of `POST /api/needsWifiChange`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NeedsWifiChangeResponse {
    #[serde(default)]
    pub wifi_needs_change_result: Option<WifiNeedsChangeResult>,
}

impl NeedsWifiChangeResponse {
    /// The need flags, reading an absent result object or absent flags object
    /// as "no action needed"
    pub fn flags(&self) -> WifiNeedsChangeFlags {
        self.wifi_needs_change_result
            .as_ref()
            .and_then(|result| result.wifi_needs_change_flags)
            .unwrap_or_default()
    }
}

/// Outcome flags of a wifi apply. At most one failure cause is meaningful;
/// `succeeded` false with none of the specific causes set is an unspecified
/// failure.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiSettingsChangeResultFlags {
    #[serde(default)]
    pub succeeded: bool,
    #[serde(default)]
    pub authenticate_failed: bool,
    #[serde(default)]
    pub ssid_not_found: bool,
    #[serde(default)]
    pub os_failure: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiSettingsChangeResult {
    #[serde(default)]
    pub wifi_settings_change_result_flags: Option<WifiSettingsChangeResultFlags>,
}

/// Response of `POST /api/setWifiSettings` and `POST /api/enableWifi`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetWifiSettingsResponse {
    #[serde(default)]
    pub wifi_settings_change_result: Option<WifiSettingsChangeResult>,
}

impl SetWifiSettingsResponse {
    /// The outcome flags, reading absent objects as all-false (unspecified
    /// failure)
    pub fn flags(&self) -> WifiSettingsChangeResultFlags {
        self.wifi_settings_change_result
            .as_ref()
            .and_then(|result| result.wifi_settings_change_result_flags)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiNeedsEnabledResult {
    #[serde(default)]
    pub wifi_needs_enabled: bool,
}

/// Response of `POST /api/needsWifiEnabled`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NeedsWifiEnabledResponse {
    #[serde(default)]
    pub wifi_needs_enabled_result: Option<WifiNeedsEnabledResult>,
}

impl NeedsWifiEnabledResponse {
    /// Whether the device has to act to reach the requested enabled state
    pub fn needs_enabled(&self) -> bool {
        self.wifi_needs_enabled_result
            .as_ref()
            .map(|result| result.wifi_needs_enabled)
            .unwrap_or(false)
    }
}

/// Model-side mirror of the network selection widget.
///
/// The shell renders the options verbatim and reports operator choices back
/// through `NetworkEvent::NetworkSelected`. Ids are the controller-assigned
/// cell ids; id 0 is always the placeholder row and id -1 is the synthetic
/// entry for a recorded-but-invisible network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkSelector {
    options: Vec<VisibleNetwork>,
    selected_id: i32,
    enabled: bool,
}

impl Default for NetworkSelector {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected_id: NONE_SELECTED_ID,
            enabled: true,
        }
    }
}

impl NetworkSelector {
    /// Replace all options, keeping the selection only if it still exists
    pub fn set_options(&mut self, options: Vec<VisibleNetwork>) {
        self.options = options;
        if !self.options.iter().any(|o| o.id == self.selected_id) {
            self.selected_id = NONE_SELECTED_ID;
        }
    }

    /// Select the option with the given id; unknown ids keep the current
    /// selection
    pub fn select(&mut self, id: i32) {
        if self.options.iter().any(|o| o.id == id) {
            self.selected_id = id;
        }
    }

    pub fn selected_id(&self) -> i32 {
        self.selected_id
    }

    pub fn options(&self) -> &[VisibleNetwork] {
        &self.options
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// State machine for the wifi change flow (selection save).
///
/// The flow starts when the settings dialog closes with a confirmed save and
/// ends when the outcome notice is shown. The captured edit travels through
/// every state so late shell events cannot pick up a different edit than the
/// one that was checked.
///
/// # State Machine Diagram
///
/// ```text
///                    ┌──────────────────────────────────────────┐
///                    │                  Idle                    │◄─────────────┐
///                    └────────────────────┬─────────────────────┘              │
///                                         │ dialog closes with save           │
///                                         ▼                                    │
///                                ┌─────────────────┐                           │
///                     ┌──────────│  CheckingNeed   │                           │
///                     │          └─────────────────┘                           │
///                     │ no flag set      │ any flag set                        │
///                     │ (or check        │ (confirmation surface shows)        │
///                     │  failed)         ▼                                     │
///                     │       ┌─────────────────────┐                          │
///                     │       │ ConfirmationPending │                          │
///                     │       └─────────────────────┘                          │
///                     │                  │ shell reports surface visible       │
///                     │                  ▼ (apply issued)                      │
///                     │          ┌───────────────┐                             │
///                     │          │   Applying    │                             │
///                     │          └───────────────┘                             │
///                     │                  │ device responds                     │
///                     │                  ▼ (surface hides)                     │
///                     │          ┌───────────────┐                             │
///                     │          │  ResultReady  │                             │
///                     │          └───────────────┘                             │
///                     │                  │ shell reports surface gone          │
///                     │                  │ (outcome notice shown)              │
///                     └──────────────────┴─────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum WifiChangeState {
    /// No wifi change in progress
    #[default]
    Idle,
    /// Needs-check sent to the controller, waiting for the flags
    CheckingNeed { edit: WifiEditRequest },
    /// Confirmation surface requested; waiting for the shell to report it
    /// visible before the disruptive apply may start
    ConfirmationPending { edit: WifiEditRequest },
    /// Apply sent to the controller
    Applying { edit: WifiEditRequest },
    /// Apply finished and the surface is hiding; outcome waiting to be shown
    ResultReady {
        edit: WifiEditRequest,
        flags: WifiSettingsChangeResultFlags,
    },
}

/// State machine for the wifi enable/disable flow.
///
/// Same confirmation protocol as [`WifiChangeState`], but the outcome is never
/// announced; once its surface is gone the network tab re-populates instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum WifiEnableState {
    /// No enable change in progress
    #[default]
    Idle,
    /// Needs-check sent to the controller
    CheckingNeed { request: WifiEnabledRequest },
    /// Confirmation surface requested; waiting for the shell
    ConfirmationPending { request: WifiEnabledRequest },
    /// Apply sent to the controller
    Applying { request: WifiEnabledRequest },
    /// Surface is hiding; the tab refresh runs when the shell reports it gone
    RefreshPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wire {
        use super::*;

        #[test]
        fn parses_full_state_payload() {
            let json = r#"{
                "networkSettings": {
                    "wifiInterface": "wlan0",
                    "wifiIPAddress": "192.168.1.50",
                    "printerIsPrinting": false,
                    "wifiEnabled": true,
                    "wifiPasskey": "hunter22",
                    "wifiSelectedSSID": "Office",
                    "wifiNoneSelected": false,
                    "wifiVisibleSSIDs": [
                        {"id": 1, "name": "Home"},
                        {"id": 2, "name": "Office"}
                    ]
                }
            }"#;

            let response: NetworkSettingsResponse = serde_json::from_str(json).unwrap();
            let settings = response.network_settings.unwrap();

            assert!(settings.wifi_enabled);
            assert_eq!(settings.wifi_passkey, "hunter22");
            assert_eq!(settings.wifi_selected_ssid, "Office");
            assert_eq!(settings.wifi_visible_ssids.len(), 2);
            assert_eq!(settings.wifi_visible_ssids[0].name, "Home");
            assert_eq!(settings.wifi_interface.as_deref(), Some("wlan0"));
            assert!(!settings.none_selected());
        }

        #[test]
        fn absent_members_fall_back_to_defaults() {
            let response: NetworkSettingsResponse =
                serde_json::from_str(r#"{"networkSettings": {}}"#).unwrap();
            let settings = response.network_settings.unwrap();

            assert!(!settings.wifi_enabled);
            assert_eq!(settings.wifi_passkey, "");
            assert!(settings.wifi_visible_ssids.is_empty());
            assert_eq!(settings.wifi_selected_ssid, "");
            assert!(settings.none_selected());
        }

        #[test]
        fn missing_network_section_parses_as_none() {
            let response: NetworkSettingsResponse = serde_json::from_str(r#"{}"#).unwrap();
            assert!(response.network_settings.is_none());
        }

        #[test]
        fn none_selected_falls_back_to_empty_ssid() {
            let with_ssid: WifiSettings =
                serde_json::from_str(r#"{"wifiSelectedSSID": "Home"}"#).unwrap();
            assert!(!with_ssid.none_selected());

            let without_ssid: WifiSettings = serde_json::from_str(r#"{}"#).unwrap();
            assert!(without_ssid.none_selected());
        }

        #[test]
        fn explicit_none_selected_wins_over_fallback() {
            let settings: WifiSettings =
                serde_json::from_str(r#"{"wifiNoneSelected": true, "wifiSelectedSSID": "Home"}"#)
                    .unwrap();
            assert!(settings.none_selected());
        }

        #[test]
        fn edit_request_serializes_wire_members_only() {
            let edit = WifiEditRequest {
                wifi_enabled: true,
                wifi_selected_ssid: "Home".to_string(),
                wifi_passkey: "pw".to_string(),
                wifi_none_selected: false,
                selected_id: 1,
            };

            let value = serde_json::to_value(&edit).unwrap();
            assert_eq!(
                value,
                serde_json::json!({
                    "wifiEnabled": true,
                    "wifiSelectedSSID": "Home",
                    "wifiPasskey": "pw",
                    "wifiNoneSelected": false
                })
            );
        }

        #[test]
        fn needs_change_flags_read_absent_objects_as_no_action() {
            let empty: NeedsWifiChangeResponse = serde_json::from_str(r#"{}"#).unwrap();
            assert!(!empty.flags().any());

            let no_flags: NeedsWifiChangeResponse =
                serde_json::from_str(r#"{"wifiNeedsChangeResult": {}}"#).unwrap();
            assert!(!no_flags.flags().any());
        }

        #[test]
        fn needs_change_flags_parse_each_member() {
            let json = r#"{
                "wifiNeedsChangeResult": {
                    "wifiNeedsChangeFlags": {"needsWifiConnect": true}
                }
            }"#;
            let response: NeedsWifiChangeResponse = serde_json::from_str(json).unwrap();
            let flags = response.flags();

            assert!(flags.needs_wifi_connect);
            assert!(!flags.needs_wifi_disabled);
            assert!(!flags.needs_wifi_switch);
            assert!(flags.any());
        }

        #[test]
        fn result_flags_read_absent_objects_as_unspecified_failure() {
            let response: SetWifiSettingsResponse = serde_json::from_str(r#"{}"#).unwrap();
            let flags = response.flags();

            assert!(!flags.succeeded);
            assert!(!flags.authenticate_failed);
            assert!(!flags.ssid_not_found);
            assert!(!flags.os_failure);
        }

        #[test]
        fn result_flags_parse_nested_payload() {
            let json = r#"{
                "wifiSettingsChangeResult": {
                    "wifiSettingsChangeResultFlags": {"succeeded": true}
                }
            }"#;
            let response: SetWifiSettingsResponse = serde_json::from_str(json).unwrap();
            assert!(response.flags().succeeded);
        }

        #[test]
        fn needs_enabled_parses_nested_payload() {
            let json = r#"{"wifiNeedsEnabledResult": {"wifiNeedsEnabled": true}}"#;
            let response: NeedsWifiEnabledResponse = serde_json::from_str(json).unwrap();
            assert!(response.needs_enabled());

            let absent: NeedsWifiEnabledResponse = serde_json::from_str(r#"{}"#).unwrap();
            assert!(!absent.needs_enabled());
        }
    }

    mod selector {
        use super::*;

        fn network(id: i32, name: &str) -> VisibleNetwork {
            VisibleNetwork {
                id,
                name: name.to_string(),
            }
        }

        #[test]
        fn select_ignores_unknown_ids() {
            let mut selector = NetworkSelector::default();
            selector.set_options(vec![network(0, "(none selected)"), network(1, "Home")]);

            selector.select(7);
            assert_eq!(selector.selected_id(), NONE_SELECTED_ID);

            selector.select(1);
            assert_eq!(selector.selected_id(), 1);
        }

        #[test]
        fn set_options_collapses_vanished_selection() {
            let mut selector = NetworkSelector::default();
            selector.set_options(vec![network(0, "(none selected)"), network(3, "Cafe")]);
            selector.select(3);

            selector.set_options(vec![network(0, "(none selected)"), network(5, "Garage")]);
            assert_eq!(selector.selected_id(), NONE_SELECTED_ID);
        }

        #[test]
        fn enablement_toggles() {
            let mut selector = NetworkSelector::default();
            assert!(selector.is_enabled());

            selector.disable();
            assert!(!selector.is_enabled());

            selector.enable();
            assert!(selector.is_enabled());
        }
    }
}
