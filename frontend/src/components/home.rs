use super::super::{Model, Msg};
use super::results::render_results;
use super::upload_section::render_upload_section;
use super::utils::render_error_message;
use yew::prelude::*;

pub fn render_home(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <>
            <header class="app-header">
                <h1>{"Banana Ripeness Classifier and Shelf Life"}</h1>
                <p class="subtitle">
                    {"Upload a banana image to check its ripeness and estimate days until spoilage."}
                </p>
                <hr />
            </header>

            { render_error_message(model.state.error(), ctx.link().callback(|_| Msg::DismissError)) }

            <div class="columns">
                <section class="column">
                    <h3>{"Upload Banana Image"}</h3>
                    { render_upload_section(model, ctx) }
                </section>
                <section class="column">
                    <h3>{"Analysis Results"}</h3>
                    { render_results(&model.state) }
                </section>
            </div>
        </>
    }
}
