use gloo_file::File as GlooFile;
use shared::{ImageMime, InferenceError, Tone};
use web_sys::FileList;
use yew::prelude::*;

/// Declared type first; some platforms leave it empty, then the extension decides.
pub fn image_mime_of(file: &GlooFile) -> Result<ImageMime, InferenceError> {
    let declared = file.raw_mime_type();
    if declared.is_empty() {
        ImageMime::from_file_name(&file.name())
    } else {
        ImageMime::from_content_type(&declared)
    }
}

pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn render_alert(tone: Tone, message: &str) -> Html {
    html! {
        <div class={classes!("alert", tone.css_class())}>
            <p>{ message }</p>
        </div>
    }
}

pub fn render_error_message(error: Option<&str>, on_dismiss: Callback<MouseEvent>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="alert alert-error error-message">
                <p>{ error_msg }</p>
                <button class="dismiss-btn" title="Dismiss" onclick={on_dismiss}>{"×"}</button>
            </div>
        }
    } else {
        html! {}
    }
}
