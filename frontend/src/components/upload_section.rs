use super::super::{Model, Msg};
use super::utils::first_file;
use shared::{ImageMime, InferenceError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::UploadRejected(InferenceError::UploadRejected {
                reason: "no file was selected".into(),
            }),
        }
    });

    html! {
        <div class="upload-section">
            <label class="file-picker">
                <span>{"Choose an image..."}</span>
                <input
                    type="file"
                    id="file-input"
                    accept={ImageMime::ACCEPT}
                    onchange={handle_change}
                />
                <span class="file-types">{"JPG, JPEG or PNG"}</span>
            </label>

            { render_preview(model, ctx) }
        </div>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(upload) = &model.upload else {
        return html! {};
    };
    let in_flight = model.state.in_flight();

    html! {
        <div id="preview-container">
            <figure>
                <img
                    id="image-preview"
                    src={upload.preview_url.to_string()}
                    alt="Uploaded Banana"
                />
                <figcaption>{"Uploaded Banana"}</figcaption>
            </figure>

            <button
                class="analyze-btn primary"
                onclick={ctx.link().callback(|_| Msg::Analyze)}
                disabled={in_flight}
            >
                { if in_flight { "Analyzing..." } else { "Analyze Banana" } }
            </button>

            { render_progress(model) }
        </div>
    }
}

fn render_progress(model: &Model) -> Html {
    if !model.state.in_flight() {
        return html! {};
    }
    let progress = model.state.progress();

    html! {
        <div class="progress">
            <p class="spinner-label">{"Analyzing your banana..."}</p>
            <div class="meter">
                <div
                    class={classes!("meter-fill", (progress == 0).then_some("indeterminate"))}
                    style={format!("width: {}%;", progress)}
                ></div>
            </div>
        </div>
    }
}
