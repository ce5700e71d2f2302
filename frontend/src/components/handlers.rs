use super::super::{FileData, Model, Msg};
use super::utils::image_mime_of;
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use shared::{AnalysisResult, InferenceError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PROGRESS_TICK_MS: u32 = 150;

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    match image_mime_of(&file) {
        Ok(mime) => {
            log::info!("Selected {} ({} bytes)", file.name(), file.size());
            let preview_url = ObjectUrl::from(file.clone());
            model.upload = Some(FileData {
                file,
                mime,
                preview_url,
            });
            model.state.clear_error();
        }
        Err(err) => {
            log::warn!("Skipping non-image file: {}", file.name());
            model.state.reject_upload(err);
        }
    }
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(upload) = &model.upload else {
        return false;
    };
    if !model.state.begin_analysis() {
        return false;
    }

    log::info!("Analyzing {} as {}", upload.file.name(), upload.mime.as_str());
    let file = upload.file.clone();

    let link = ctx.link().clone();
    model.progress_timer = Some(Interval::new(PROGRESS_TICK_MS, move || {
        link.send_message(Msg::ProgressTick)
    }));

    spawn_local({
        let link = ctx.link().clone();
        async move {
            let outcome = api::analyze(file).await;
            link.send_message(Msg::AnalysisFinished(outcome));
        }
    });

    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    outcome: Result<AnalysisResult, InferenceError>,
) -> bool {
    model.progress_timer = None;
    if let Err(err) = &outcome {
        log::error!("Analysis failed: {}", err);
    }
    model.state.finish_analysis(outcome);
    true
}
