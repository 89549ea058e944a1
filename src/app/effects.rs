use crate::app::{App, Message, Model, ToastLevel};

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if let Message::Save = msg {
            Self::save_document(model);
        }
    }

    fn save_document(model: &mut Model) {
        let Some(path) = model.output_path.clone() else {
            model.show_toast(ToastLevel::Warning, "No output file (start with --output)");
            return;
        };
        match model.session.document().save(&path) {
            Ok(()) => {
                model.session.mark_clean();
                model.show_toast(ToastLevel::Info, format!("Saved {}", path.display()));
                tracing::info!(path = %path.display(), "document saved");
            }
            Err(err) => {
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                crate::perf::log_event("save.error", format!("path={} err={err}", path.display()));
            }
        }
    }
}
