use crux_core::Command;

use crate::api_get;
use crate::api_post;
use crate::events::{Event, SettingsEvent};
use crate::handle_response;
use crate::model::Model;
use crate::types::GeneralSettings;
use crate::Effect;

/// Fetch the general settings document for the settings form
pub fn fetch() -> Command<Effect, Event> {
    api_get!(
        Settings,
        SettingsEvent,
        "/api/settings",
        FetchResponse,
        GeneralSettings
    )
}

/// Handle general settings events (form document fetch and save)
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::Fetch => fetch(),

        SettingsEvent::FetchResponse(result) => handle_response!(model, result, {
            on_success: |model, settings| {
                model.general_settings = Some(settings);
            },
        }),

        SettingsEvent::Save { settings } => {
            // Arms the wifi save evaluation that runs when the dialog close is
            // reported back
            model.save_requested = true;
            api_post!(
                Settings,
                SettingsEvent,
                model,
                "/api/settings",
                SaveResponse,
                "Save settings",
                body_json: &settings,
                expect_json: GeneralSettings
            )
        }

        SettingsEvent::SaveResponse(result) => handle_save_response(result, model),
    }
}

/// Handle the settings save response
fn handle_save_response(
    result: Result<GeneralSettings, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    match result {
        Ok(settings) => {
            model.general_settings = Some(settings);
            // Signal the shell to hide the dialog; the hidden report drives
            // the wifi save evaluation
            model.settings_dialog_open = false;
        }
        Err(e) => {
            // The dialog stays open and this attempt no longer counts as a
            // save-initiated close
            model.save_requested = false;
            model.set_error(e);
        }
    }
    crux_core::render::render()
}
