use crux_core::Command;

use crate::api_post;
use crate::events::Event;
use crate::model::Model;
use crate::types::{
    NeedsWifiChangeResponse, Notification, SetWifiSettingsResponse, WifiChangeState,
    WifiEditRequest, WifiNeedsChangeFlags, WifiSettingsChangeResultFlags, NONE_SELECTED_ID,
};
use crate::Effect;

const SUCCESS_TITLE: &str = "Connection successful";
const FAILURE_TITLE: &str = "Connection failed";

/// Evaluate the operator's wifi edit after the settings dialog closed.
///
/// `confirmed` is false when the dialog was cancelled; nothing is sent then.
/// The needs-check and the later apply both carry the edit captured here, so
/// widget state changing after the close cannot leak into a running flow.
pub fn try_save(confirmed: bool, model: &mut Model) -> Command<Effect, Event> {
    // A flow started by an earlier close may still be running
    if !matches!(model.wifi_change_state, WifiChangeState::Idle) {
        return crux_core::render::render();
    }
    // Cancelled dialogs save nothing
    if !confirmed {
        return crux_core::render::render();
    }
    // Unsupported devices get no network requests for the session
    if !model.wifi_supported {
        return crux_core::render::render();
    }

    let edit = capture_edit(model);
    model.wifi_change_state = WifiChangeState::CheckingNeed { edit: edit.clone() };
    api_post!(
        Network,
        NetworkEvent,
        model,
        "/api/needsWifiChange",
        NeedsChangeResponse,
        "Check wifi change",
        body_json: &edit,
        expect_json: NeedsWifiChangeResponse
    )
}

/// Capture the operator's edit from the widget mirror.
///
/// Id 0 means no selection. Other ids resolve against the fetched network
/// list; the synthetic invisible entry (id -1) has no list entry and so
/// resolves to an empty name.
fn capture_edit(model: &Model) -> WifiEditRequest {
    let selected_id = model.network_selector.selected_id();
    let none_selected = selected_id == NONE_SELECTED_ID;

    let mut selected_ssid = String::new();
    if !none_selected {
        if let Some(network) = model
            .visible_networks
            .iter()
            .find(|network| network.id == selected_id)
        {
            selected_ssid = network.name.clone();
        }
    }

    WifiEditRequest {
        wifi_enabled: model.wifi_enabled,
        wifi_selected_ssid: selected_ssid,
        wifi_passkey: model.wifi_passkey.clone(),
        wifi_none_selected: none_selected,
        selected_id,
    }
}

/// Handle the needs-check response for a pending wifi edit
pub fn handle_needs_change_response(
    result: Result<NeedsWifiChangeResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    match model.wifi_change_state.clone() {
        WifiChangeState::CheckingNeed { edit } => {
            match result {
                Ok(response) => {
                    let flags = response.flags();
                    if flags.any() {
                        model.wifi_change_state =
                            WifiChangeState::ConfirmationPending { edit: edit.clone() };
                        model
                            .change_confirmation
                            .show(confirmation_caption(&flags, &edit));
                    } else {
                        // Nothing disruptive to do; the edit is already
                        // persisted by the settings save
                        model.wifi_change_state = WifiChangeState::Idle;
                    }
                }
                // Conservative recovery: a failed check reads as "no change
                // needed"
                Err(_) => model.wifi_change_state = WifiChangeState::Idle,
            }
            crux_core::render::render()
        }

        // Stale response, no check in progress
        _ => crux_core::render::render(),
    }
}

/// Caption for the change confirmation surface, chosen by flag priority
fn confirmation_caption(flags: &WifiNeedsChangeFlags, edit: &WifiEditRequest) -> String {
    if flags.needs_wifi_connect {
        format!(
            "Connecting printer to wifi network “{}”.",
            edit.wifi_selected_ssid
        )
    } else if flags.needs_wifi_switch {
        format!(
            "Switching printer to wifi network “{}”.",
            edit.wifi_selected_ssid
        )
    } else {
        "Turning printer wifi off.".to_string()
    }
}

/// Handle the change surface becoming visible.
///
/// This is the only trigger for the apply; it fires at most once per
/// confirmation cycle because the transition leaves `ConfirmationPending`.
pub fn handle_confirmation_shown(model: &mut Model) -> Command<Effect, Event> {
    match model.wifi_change_state.clone() {
        WifiChangeState::ConfirmationPending { edit } => {
            model.wifi_change_state = WifiChangeState::Applying { edit: edit.clone() };
            api_post!(
                Network,
                NetworkEvent,
                model,
                "/api/setWifiSettings",
                ApplyChangeResponse,
                "Apply wifi change",
                body_json: &edit,
                expect_json: SetWifiSettingsResponse
            )
        }

        // Duplicate or stray shown report
        _ => crux_core::render::render(),
    }
}

/// Handle the apply response. The outcome is stored and the surface starts
/// hiding; the notice waits for the hidden report.
pub fn handle_apply_change_response(
    result: Result<SetWifiSettingsResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    match model.wifi_change_state.clone() {
        WifiChangeState::Applying { edit } => {
            // Transport failure reads as all-false flags, an unspecified
            // failure
            let flags = match result {
                Ok(response) => response.flags(),
                Err(_) => WifiSettingsChangeResultFlags::default(),
            };
            model.wifi_change_state = WifiChangeState::ResultReady { edit, flags };
            model.change_confirmation.hide();
            crux_core::render::render()
        }

        _ => crux_core::render::render(),
    }
}

/// Handle the change surface leaving the screen; displays the outcome
pub fn handle_confirmation_hidden(model: &mut Model) -> Command<Effect, Event> {
    match model.wifi_change_state.clone() {
        WifiChangeState::ResultReady { edit, flags } => {
            model.wifi_notice = Some(change_notice(&flags, &edit));
            model.wifi_change_state = WifiChangeState::Idle;
            crux_core::render::render()
        }

        _ => crux_core::render::render(),
    }
}

/// Outcome notice for a finished change flow
fn change_notice(flags: &WifiSettingsChangeResultFlags, edit: &WifiEditRequest) -> Notification {
    if flags.succeeded {
        Notification::success(
            SUCCESS_TITLE,
            format!("You are now connected to \"{}\"", edit.wifi_selected_ssid),
        )
    } else if flags.authenticate_failed {
        Notification::error(
            FAILURE_TITLE,
            "The password you entered is incorrect. Please try again.",
        )
    } else if flags.ssid_not_found {
        Notification::error(
            FAILURE_TITLE,
            format!("The network \"{}\" was not found.", edit.wifi_selected_ssid),
        )
    } else {
        Notification::error(
            FAILURE_TITLE,
            "A connection failure has occurred. Please try again.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        NotificationKind, VisibleNetwork, WifiNeedsChangeResult, WifiSettingsChangeResult,
    };

    fn network(id: i32, name: &str) -> VisibleNetwork {
        VisibleNetwork {
            id,
            name: name.to_string(),
        }
    }

    fn edit(ssid: &str) -> WifiEditRequest {
        WifiEditRequest {
            wifi_enabled: true,
            wifi_selected_ssid: ssid.to_string(),
            wifi_passkey: "pw".to_string(),
            wifi_none_selected: false,
            selected_id: 1,
        }
    }

    fn needs_response(flags: WifiNeedsChangeFlags) -> NeedsWifiChangeResponse {
        NeedsWifiChangeResponse {
            wifi_needs_change_result: Some(WifiNeedsChangeResult {
                wifi_needs_change_flags: Some(flags),
            }),
        }
    }

    fn apply_response(flags: WifiSettingsChangeResultFlags) -> SetWifiSettingsResponse {
        SetWifiSettingsResponse {
            wifi_settings_change_result: Some(WifiSettingsChangeResult {
                wifi_settings_change_result_flags: Some(flags),
            }),
        }
    }

    mod capture {
        use super::*;

        #[test]
        fn resolves_the_selected_network_name() {
            let mut model = Model {
                wifi_enabled: true,
                wifi_passkey: "hunter22".to_string(),
                visible_networks: vec![network(1, "Home"), network(2, "Office")],
                ..Default::default()
            };
            model.network_selector.set_options(vec![
                network(0, "(none selected)"),
                network(1, "Home"),
                network(2, "Office"),
            ]);
            model.network_selector.select(2);

            let edit = capture_edit(&model);

            assert!(edit.wifi_enabled);
            assert_eq!(edit.wifi_selected_ssid, "Office");
            assert_eq!(edit.wifi_passkey, "hunter22");
            assert!(!edit.wifi_none_selected);
            assert_eq!(edit.selected_id, 2);
        }

        #[test]
        fn placeholder_selection_captures_none_selected() {
            let mut model = Model {
                visible_networks: vec![network(1, "Home")],
                ..Default::default()
            };
            model
                .network_selector
                .set_options(vec![network(0, "(none selected)"), network(1, "Home")]);

            let edit = capture_edit(&model);

            assert!(edit.wifi_none_selected);
            assert_eq!(edit.wifi_selected_ssid, "");
            assert_eq!(edit.selected_id, 0);
        }

        #[test]
        fn invisible_selection_resolves_to_an_empty_name() {
            let mut model = Model {
                visible_networks: vec![network(1, "Cafe")],
                ..Default::default()
            };
            model.network_selector.set_options(vec![
                network(0, "(none selected)"),
                network(1, "Cafe"),
                network(-1, "Home"),
            ]);
            model.network_selector.select(-1);

            let edit = capture_edit(&model);

            assert!(!edit.wifi_none_selected);
            assert_eq!(edit.wifi_selected_ssid, "");
            assert_eq!(edit.selected_id, -1);
        }
    }

    mod try_save {
        use super::*;

        #[test]
        fn cancelled_dialog_sends_nothing() {
            let mut model = Model::default();

            let _ = try_save(false, &mut model);

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
            assert!(!model.is_loading);
        }

        #[test]
        fn unsupported_device_sends_nothing() {
            let mut model = Model {
                wifi_supported: false,
                ..Default::default()
            };

            let _ = try_save(true, &mut model);

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
            assert!(!model.is_loading);
        }

        #[test]
        fn confirmed_save_enters_checking() {
            let mut model = Model::default();

            let _ = try_save(true, &mut model);

            assert!(matches!(
                model.wifi_change_state,
                WifiChangeState::CheckingNeed { .. }
            ));
            assert!(model.is_loading);
        }

        #[test]
        fn running_flow_is_not_restarted() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::Applying { edit: edit("Home") },
                ..Default::default()
            };

            let _ = try_save(true, &mut model);

            assert!(matches!(
                model.wifi_change_state,
                WifiChangeState::Applying { .. }
            ));
            assert!(!model.is_loading);
        }
    }

    mod needs_check {
        use super::*;

        #[test]
        fn no_change_needed_returns_to_idle() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::CheckingNeed { edit: edit("Home") },
                ..Default::default()
            };

            let _ = handle_needs_change_response(
                Ok(needs_response(WifiNeedsChangeFlags::default())),
                &mut model,
            );

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
            assert!(!model.change_confirmation.is_visible());
        }

        #[test]
        fn needed_change_shows_the_confirmation() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::CheckingNeed { edit: edit("Home") },
                ..Default::default()
            };
            let flags = WifiNeedsChangeFlags {
                needs_wifi_connect: true,
                ..Default::default()
            };

            let _ = handle_needs_change_response(Ok(needs_response(flags)), &mut model);

            assert!(matches!(
                model.wifi_change_state,
                WifiChangeState::ConfirmationPending { .. }
            ));
            assert!(model.change_confirmation.is_visible());
            assert_eq!(
                model.change_confirmation.caption(),
                "Connecting printer to wifi network “Home”."
            );
        }

        #[test]
        fn switch_gets_its_own_caption() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::CheckingNeed { edit: edit("Office") },
                ..Default::default()
            };
            let flags = WifiNeedsChangeFlags {
                needs_wifi_switch: true,
                ..Default::default()
            };

            let _ = handle_needs_change_response(Ok(needs_response(flags)), &mut model);

            assert_eq!(
                model.change_confirmation.caption(),
                "Switching printer to wifi network “Office”."
            );
        }

        #[test]
        fn disable_gets_the_wifi_off_caption() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::CheckingNeed { edit: edit("") },
                ..Default::default()
            };
            let flags = WifiNeedsChangeFlags {
                needs_wifi_disabled: true,
                ..Default::default()
            };

            let _ = handle_needs_change_response(Ok(needs_response(flags)), &mut model);

            assert_eq!(
                model.change_confirmation.caption(),
                "Turning printer wifi off."
            );
        }

        #[test]
        fn connect_outranks_switch_in_the_caption() {
            let flags = WifiNeedsChangeFlags {
                needs_wifi_connect: true,
                needs_wifi_switch: true,
                needs_wifi_disabled: false,
            };

            let caption = confirmation_caption(&flags, &edit("Home"));

            assert_eq!(caption, "Connecting printer to wifi network “Home”.");
        }

        #[test]
        fn failed_check_reads_as_no_change() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::CheckingNeed { edit: edit("Home") },
                ..Default::default()
            };

            let _ = handle_needs_change_response(
                Err("Check wifi change failed: timeout".to_string()),
                &mut model,
            );

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
            assert!(!model.change_confirmation.is_visible());
            assert!(model.error_message.is_none());
        }

        #[test]
        fn stale_response_is_ignored() {
            let mut model = Model::default();

            let _ = handle_needs_change_response(
                Ok(needs_response(WifiNeedsChangeFlags::default())),
                &mut model,
            );

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
        }
    }

    mod apply {
        use super::*;

        #[test]
        fn shown_surface_triggers_the_apply() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::ConfirmationPending { edit: edit("Home") },
                ..Default::default()
            };

            let _ = handle_confirmation_shown(&mut model);

            assert!(matches!(
                model.wifi_change_state,
                WifiChangeState::Applying { .. }
            ));
            assert!(model.is_loading);
        }

        #[test]
        fn duplicate_shown_report_is_a_no_op() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::Applying { edit: edit("Home") },
                ..Default::default()
            };

            let _ = handle_confirmation_shown(&mut model);

            assert!(matches!(
                model.wifi_change_state,
                WifiChangeState::Applying { .. }
            ));
            assert!(!model.is_loading);
        }

        #[test]
        fn completion_hides_the_surface_and_stores_the_outcome() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::Applying { edit: edit("Home") },
                ..Default::default()
            };
            model.change_confirmation.show("caption");
            let flags = WifiSettingsChangeResultFlags {
                succeeded: true,
                ..Default::default()
            };

            let _ = handle_apply_change_response(Ok(apply_response(flags)), &mut model);

            assert!(!model.change_confirmation.is_visible());
            match &model.wifi_change_state {
                WifiChangeState::ResultReady { flags, .. } => assert!(flags.succeeded),
                other => panic!("unexpected state: {other:?}"),
            }
        }

        #[test]
        fn transport_failure_reads_as_unspecified_failure() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::Applying { edit: edit("Home") },
                ..Default::default()
            };
            model.change_confirmation.show("caption");

            let _ = handle_apply_change_response(
                Err("Apply wifi change failed: timeout".to_string()),
                &mut model,
            );

            assert!(!model.change_confirmation.is_visible());
            match &model.wifi_change_state {
                WifiChangeState::ResultReady { flags, .. } => {
                    assert!(!flags.succeeded);
                    assert!(!flags.authenticate_failed);
                    assert!(!flags.ssid_not_found);
                }
                other => panic!("unexpected state: {other:?}"),
            }
        }

        #[test]
        fn hidden_surface_displays_the_outcome() {
            let mut model = Model {
                wifi_change_state: WifiChangeState::ResultReady {
                    edit: edit("Home"),
                    flags: WifiSettingsChangeResultFlags {
                        succeeded: true,
                        ..Default::default()
                    },
                },
                ..Default::default()
            };

            let _ = handle_confirmation_hidden(&mut model);

            assert!(matches!(model.wifi_change_state, WifiChangeState::Idle));
            let notice = model.wifi_notice.unwrap();
            assert_eq!(notice.kind, NotificationKind::Success);
            assert_eq!(notice.title, "Connection successful");
            assert_eq!(notice.text, "You are now connected to \"Home\"");
        }
    }

    mod notices {
        use super::*;

        #[test]
        fn wrong_password_names_the_cause() {
            let flags = WifiSettingsChangeResultFlags {
                authenticate_failed: true,
                ..Default::default()
            };

            let notice = change_notice(&flags, &edit("Home"));

            assert_eq!(notice.kind, NotificationKind::Error);
            assert_eq!(notice.title, "Connection failed");
            assert_eq!(
                notice.text,
                "The password you entered is incorrect. Please try again."
            );
        }

        #[test]
        fn missing_network_names_the_attempted_network() {
            let flags = WifiSettingsChangeResultFlags {
                ssid_not_found: true,
                ..Default::default()
            };

            let notice = change_notice(&flags, &edit("Home"));

            assert_eq!(notice.text, "The network \"Home\" was not found.");
        }

        #[test]
        fn unspecified_failure_gets_the_generic_text() {
            let notice = change_notice(&WifiSettingsChangeResultFlags::default(), &edit("Home"));

            assert_eq!(
                notice.text,
                "A connection failure has occurred. Please try again."
            );
        }

        #[test]
        fn os_failure_also_gets_the_generic_text() {
            let flags = WifiSettingsChangeResultFlags {
                os_failure: true,
                ..Default::default()
            };

            let notice = change_notice(&flags, &edit("Home"));

            assert_eq!(notice.kind, NotificationKind::Error);
            assert_eq!(
                notice.text,
                "A connection failure has occurred. Please try again."
            );
        }
    }
}
