mod api;
mod components;

use components::handlers;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use shared::{AnalysisResult, ImageMime, InferenceError, Page, ViewState};
use yew::prelude::*;

// Models
pub struct FileData {
    pub file: GlooFile,
    pub mime: ImageMime,
    pub preview_url: ObjectUrl,
}

// Yew msg components
pub enum Msg {
    Navigate(Page),

    // Upload
    FileSelected(GlooFile),
    UploadRejected(InferenceError),

    // Analysis
    Analyze,
    ProgressTick,
    AnalysisFinished(Result<AnalysisResult, InferenceError>),

    DismissError,
}

// Main component. One instance per browser tab, so `state` is the session.
pub struct Model {
    pub state: ViewState,
    pub upload: Option<FileData>,
    pub progress_timer: Option<Interval>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ViewState::new(),
            upload: None,
            progress_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => self.state.navigate(page),

            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::UploadRejected(err) => {
                self.state.reject_upload(err);
                true
            }

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::ProgressTick => self.state.tick_progress(),
            Msg::AnalysisFinished(outcome) => handlers::handle_analysis_finished(self, outcome),

            Msg::DismissError => {
                self.state.clear_error();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="layout">
                { components::sidebar::render_sidebar(self.state.current_page(), ctx.link()) }

                <main class="main-content">
                    {
                        match self.state.current_page() {
                            Page::Home => components::home::render_home(self, ctx),
                            Page::About => components::about::render_about(),
                        }
                    }
                    <footer class="app-footer">
                        <hr />
                        <p>{"Banana Ripeness Classifier 🍌 | Made with Rust & Yew"}</p>
                    </footer>
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
