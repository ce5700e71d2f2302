use super::utils::render_alert;
use shared::{AnalysisResult, Tone, ViewState};
use yew::prelude::*;

pub fn render_results(state: &ViewState) -> Html {
    match state.last_result() {
        Some(result) if state.has_analyzed() => render_result(result),
        _ => render_alert(
            Tone::Info,
            "Upload a banana image and click Analyze to see results here.",
        ),
    }
}

fn render_result(result: &AnalysisResult) -> Html {
    let confidence = result.confidence_label();
    let advisory = result.advisory();

    html! {
        <>
            <div class="results-container">
                <div class="result-header">
                    <h4>{"Ripeness Stage"}</h4>
                    <span class="stage-badge">{ result.ripeness_stage.as_str() }</span>
                </div>

                <div class="confidence-meter">
                    <div class="meter-label">{ format!("Confidence: {}", confidence) }</div>
                    <div class="meter">
                        <div class="meter-fill" style={result.confidence_bar_style()}></div>
                    </div>
                </div>

                <hr />

                <h4>{"Estimated Shelf Life"}</h4>
                <p class="shelf-life">
                    { format!("{} days until spoilage", result.days_until_rotten) }
                </p>
            </div>

            { render_alert(advisory.tone(), advisory.message()) }

            <h3>{"Recommendation"}</h3>
            { render_alert(result.recommendation_tone(), result.recommendation()) }
        </>
    }
}
