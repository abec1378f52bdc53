use crux_core::Command;

use crate::events::{DialogEvent, Event};
use crate::model::Model;
use crate::Effect;

use super::{network, settings};

/// Handle settings dialog lifecycle reports from the shell
pub fn handle(event: DialogEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // The dialog is coming on screen; fetch the settings document and the
        // wifi state
        DialogEvent::WillShow => {
            model.save_requested = false;
            model.settings_dialog_open = true;
            Command::all([settings::fetch(), network::populate(model, false)])
        }

        // The dialog is gone. Evaluate the wifi edit first, then reset the
        // session whatever branch the evaluation took; the captured edit
        // travels inside the flow state and survives the reset.
        DialogEvent::DidHide => {
            model.settings_dialog_open = false;
            let confirmed = model.save_requested;
            let command = network::try_save(confirmed, model);
            model.reset_session();
            command
        }
    }
}
