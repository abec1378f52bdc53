pub mod enable;
pub mod populate;
pub mod save;

pub use populate::populate;
pub use save::try_save;

use crux_core::Command;

use crate::events::{Event, NetworkEvent};
use crate::model::Model;
use crate::types::ConfirmationSurface;
use crate::update_field;
use crate::Effect;

/*
Settings dialog closes with save → try_save(confirmed)
                                        ↓
                             confirmed=false → (nothing)
                                        ↓
                                  CheckingNeed
                                        ↓
                               (controller responds)
                                        ↓
                  ┌─────────────────────┴─────────────────────┐
                  │                                           │
             no flag set                                 any flag set
                  │                                           │
                  ↓                                           ↓
                Idle                                 ConfirmationPending
                                                              ↓
                                              (shell: surface now visible)
                                                              ↓
                                                          Applying
                                                              ↓
                                                   (controller responds)
                                                              ↓
                                                         ResultReady
                                                              ↓
                                               (shell: surface now hidden)
                                                              ↓
                                                   outcome notice, Idle

Operator toggles wifi-enabled → CheckingNeed
                                      ↓
                      ┌───────────────┴───────────────┐
                      │                               │
              no action needed                     needed
                      │                               │
                      ↓                               ↓
                    Idle                     ConfirmationPending
                                                      ↓
                                      (shell: surface now visible)
                                                      ↓
                                                  Applying
                                                      ↓
                                           (controller responds)
                                                      ↓
                                               RefreshPending
                                                      ↓
                                      (shell: surface now hidden)
                                                      ↓
                                        re-populate the tab, Idle
*/

/// Handle network tab events (population, widget edits, wifi flows)
pub fn handle(event: NetworkEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NetworkEvent::TabShown => populate(model, false),

        NetworkEvent::StateResponse(result) => populate::handle_state_response(result, model),

        NetworkEvent::NetworkSelected { id } => {
            model.network_selector.select(id);
            crux_core::render::render()
        }

        NetworkEvent::PasskeyChanged { passkey } => update_field!(model.wifi_passkey, passkey),

        NetworkEvent::WifiEnabledToggled { enabled } => {
            enable::handle_wifi_toggled(enabled, model)
        }

        NetworkEvent::ConfirmationShown(surface) => match surface {
            ConfirmationSurface::WifiChange => save::handle_confirmation_shown(model),
            ConfirmationSurface::WifiEnable => enable::handle_confirmation_shown(model),
        },

        NetworkEvent::ConfirmationHidden(surface) => match surface {
            ConfirmationSurface::WifiChange => save::handle_confirmation_hidden(model),
            ConfirmationSurface::WifiEnable => enable::handle_confirmation_hidden(model),
        },

        NetworkEvent::NeedsChangeResponse(result) => {
            save::handle_needs_change_response(result, model)
        }

        NetworkEvent::ApplyChangeResponse(result) => {
            save::handle_apply_change_response(result, model)
        }

        NetworkEvent::NeedsEnableResponse(result) => {
            enable::handle_needs_enable_response(result, model)
        }

        NetworkEvent::ApplyEnableResponse(result) => {
            enable::handle_apply_enable_response(result, model)
        }
    }
}
