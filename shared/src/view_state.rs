use crate::{AnalysisResult, InferenceError};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Page {
    #[default]
    #[strum(serialize = "🏠 Home")]
    Home,
    #[strum(serialize = "📖 About")]
    About,
}

/// Progress never reaches 100 until the response is back.
const PROGRESS_CEILING: u8 = 95;

/// State of one user session (one browser tab).
///
/// `has_analyzed()` is derived from `last_result`, so it can only be true once
/// a successful analysis has been stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    current_page: Page,
    last_result: Option<AnalysisResult>,
    in_flight: bool,
    progress: u8,
    error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn has_analyzed(&self) -> bool {
        self.last_result.is_some()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether anything changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.current_page == page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Marks an analysis as started. Refused while another one is outstanding.
    pub fn begin_analysis(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.progress = 0;
        self.error = None;
        true
    }

    /// Advances the indicator by a shrinking step, stalling below completion.
    pub fn tick_progress(&mut self) -> bool {
        if !self.in_flight || self.progress >= PROGRESS_CEILING {
            return false;
        }
        let step = ((PROGRESS_CEILING - self.progress) / 10).max(1);
        self.progress = (self.progress + step).min(PROGRESS_CEILING);
        true
    }

    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResult, InferenceError>) {
        self.in_flight = false;
        self.progress = 100;
        match outcome {
            Ok(result) => {
                self.last_result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
    }

    /// A file the picker should not have let through.
    pub fn reject_upload(&mut self, err: InferenceError) {
        self.error = Some(err.user_message());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ripe() -> AnalysisResult {
        AnalysisResult {
            ripeness_stage: "Ripe".to_string(),
            confidence: 0.87,
            days_until_rotten: 4,
        }
    }

    #[test]
    fn starts_on_home_without_result() {
        let state = ViewState::new();
        assert_eq!(state.current_page(), Page::Home);
        assert!(!state.has_analyzed());
        assert!(state.last_result().is_none());
        assert!(!state.in_flight());
    }

    #[test]
    fn successful_analysis_is_stored() {
        let mut state = ViewState::new();
        assert!(state.begin_analysis());
        state.finish_analysis(Ok(ripe()));

        assert!(state.has_analyzed());
        assert!(!state.in_flight());
        assert_eq!(state.progress(), 100);
        assert_eq!(state.last_result(), Some(&ripe()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failed_first_analysis_leaves_has_analyzed_false() {
        let mut state = ViewState::new();
        state.begin_analysis();
        state.finish_analysis(Err(InferenceError::Http {
            status: 400,
            detail: Some("unsupported image".into()),
        }));

        assert!(!state.has_analyzed());
        assert_eq!(state.error(), Some("Prediction failed: unsupported image"));
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut state = ViewState::new();
        state.begin_analysis();
        state.finish_analysis(Ok(ripe()));

        state.begin_analysis();
        state.finish_analysis(Err(InferenceError::Parse {
            reason: "missing field `confidence`".into(),
        }));

        assert!(state.has_analyzed());
        assert_eq!(state.last_result(), Some(&ripe()));
        assert!(state.error().is_some());
    }

    #[test]
    fn next_analysis_clears_stale_error() {
        let mut state = ViewState::new();
        state.begin_analysis();
        state.finish_analysis(Err(InferenceError::Transport {
            reason: "connection refused".into(),
        }));
        assert!(state.error().is_some());

        assert!(state.begin_analysis());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn second_trigger_while_in_flight_is_refused() {
        let mut state = ViewState::new();
        assert!(state.begin_analysis());
        assert!(!state.begin_analysis());
        state.finish_analysis(Ok(ripe()));
        assert!(state.begin_analysis());
    }

    #[test]
    fn navigation_preserves_result() {
        let mut state = ViewState::new();
        state.begin_analysis();
        state.finish_analysis(Ok(ripe()));

        assert!(state.navigate(Page::About));
        assert_eq!(state.current_page(), Page::About);
        assert!(state.navigate(Page::Home));

        assert!(state.has_analyzed());
        assert_eq!(state.last_result(), Some(&ripe()));
    }

    #[test]
    fn navigating_to_current_page_is_noop() {
        let mut state = ViewState::new();
        assert!(!state.navigate(Page::Home));
    }

    #[test]
    fn progress_stalls_below_completion() {
        let mut state = ViewState::new();
        assert!(!state.tick_progress());

        state.begin_analysis();
        let mut last = state.progress();
        for _ in 0..500 {
            state.tick_progress();
            assert!(state.progress() >= last);
            last = state.progress();
        }
        assert_eq!(state.progress(), PROGRESS_CEILING);
        assert!(!state.tick_progress());

        state.finish_analysis(Ok(ripe()));
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn rejected_upload_only_sets_error() {
        let mut state = ViewState::new();
        state.begin_analysis();
        state.finish_analysis(Ok(ripe()));

        state.reject_upload(InferenceError::UploadRejected {
            reason: "banana.gif is not a JPEG or PNG image".into(),
        });
        assert_eq!(
            state.error(),
            Some("Upload rejected: banana.gif is not a JPEG or PNG image")
        );
        assert!(state.has_analyzed());

        state.clear_error();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn page_labels() {
        assert_eq!(Page::Home.to_string(), "🏠 Home");
        assert_eq!(Page::About.to_string(), "📖 About");
    }
}
