mod error;
mod presentation;
mod upload;
mod view_state;

pub use error::{ErrorDetail, InferenceError};
pub use presentation::{Advisory, Tone};
pub use upload::{ImageMime, UploadedImage};
pub use view_state::{Page, ViewState};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The four stages the model is trained on. Parsing is exact, as labelled by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum RipenessStage {
    Unripe,
    Ripe,
    Overripe,
    Rotten,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Label exactly as returned by the model, shown in the stage badge.
    pub ripeness_stage: String,
    pub confidence: f64,
    pub days_until_rotten: i64,
}

impl AnalysisResult {
    /// Parses a prediction body as returned by the inference endpoint.
    ///
    /// All three fields are required and `confidence` must lie in `[0, 1]`;
    /// anything else is a [`InferenceError::Parse`].
    pub fn from_json(body: &str) -> Result<Self, InferenceError> {
        let result: AnalysisResult =
            serde_json::from_str(body).map_err(|e| InferenceError::Parse {
                reason: e.to_string(),
            })?;

        if !(0.0..=1.0).contains(&result.confidence) {
            return Err(InferenceError::Parse {
                reason: format!("confidence {} outside [0, 1]", result.confidence),
            });
        }
        Ok(result)
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Confidence with one decimal place, e.g. `87.0%`. Also used as the bar width.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence_percent())
    }

    /// Inline style of the confidence bar fill.
    pub fn confidence_bar_style(&self) -> String {
        format!("width: {};", self.confidence_label())
    }

    /// `None` for labels outside the four known stages.
    pub fn stage(&self) -> Option<RipenessStage> {
        self.ripeness_stage.parse().ok()
    }

    // Unknown labels get the worst-case advice.
    fn advice_stage(&self) -> RipenessStage {
        self.stage().unwrap_or(RipenessStage::Rotten)
    }

    pub fn advisory(&self) -> Advisory {
        Advisory::for_days(self.days_until_rotten)
    }

    pub fn recommendation(&self) -> &'static str {
        self.advice_stage().recommendation()
    }

    pub fn recommendation_tone(&self) -> Tone {
        self.advice_stage().recommendation_tone()
    }
}
