//! Facial-analysis upload flow.
//!
//! The user stages either one video or a set of images, never both.
//! Client-side validation runs before any network call; the staged modal
//! sequence after a successful analysis (results summary, then the finish
//! acknowledgment) is part of the same state machine so the two modals can
//! never be visible at once.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::EmotionScores;
use crate::{Error, Result};

/// Size ceiling for a single video upload.
pub const MAX_VIDEO_BYTES: u64 = 10 * 1024 * 1024;

/// Which input the upload form is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    #[default]
    Video,
    Images,
}

/// The staged files: exactly one of the two modes, or nothing yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadSelection {
    #[default]
    None,
    Video(PathBuf),
    Images(Vec<PathBuf>),
}

impl UploadSelection {
    /// All staged paths, mode-independent. Used to build the multipart body.
    pub fn files(&self) -> Vec<&Path> {
        match self {
            UploadSelection::None => Vec::new(),
            UploadSelection::Video(path) => vec![path.as_path()],
            UploadSelection::Images(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, UploadSelection::None)
    }

    /// Validate the staged selection against the submission rules.
    ///
    /// Video: exactly one non-empty file, at most 10 MB, MIME `video/*`.
    /// Images: at least one file, every MIME `image/*`.
    /// Violations never reach the network layer.
    pub fn validate(&self) -> Result<()> {
        match self {
            UploadSelection::None => {
                Err(Error::Validation("select a file before submitting".to_string()))
            }
            UploadSelection::Video(path) => {
                if mime_top_level(path) != "video" {
                    return Err(Error::Validation(format!(
                        "{} is not a video file",
                        path.display()
                    )));
                }
                let len = std::fs::metadata(path)?.len();
                if len == 0 {
                    return Err(Error::Validation(format!(
                        "{} is empty",
                        path.display()
                    )));
                }
                if len > MAX_VIDEO_BYTES {
                    return Err(Error::Validation(
                        "video exceeds the 10 MB limit".to_string(),
                    ));
                }
                Ok(())
            }
            UploadSelection::Images(paths) => {
                if paths.is_empty() {
                    return Err(Error::Validation(
                        "select at least one image before submitting".to_string(),
                    ));
                }
                for path in paths {
                    if mime_top_level(path) != "image" {
                        return Err(Error::Validation(format!(
                            "{} is not an image file",
                            path.display()
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Guess the MIME top-level type from the file extension.
fn mime_top_level(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .type_()
        .as_str()
        .to_string()
}

/// Phase of the upload page.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    /// Collecting and validating files.
    Selecting,
    /// Analysis request in flight; submit control disabled.
    Submitting,
    /// Analysis finished; results summary modal shown.
    ResultsShown(EmotionScores),
    /// Results dismissed; finish acknowledgment shown.
    FinishShown,
    /// Finish dismissed; caller navigates back to the landing page.
    Done,
}

/// State machine over the facial-analysis upload page.
#[derive(Debug, Clone)]
pub struct UploadFlow {
    phase: UploadPhase,
    mode: UploadMode,
    selection: UploadSelection,
    /// Inline validation/submission error shown next to the form.
    error: Option<String>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Selecting,
            mode: UploadMode::default(),
            selection: UploadSelection::None,
            error: None,
        }
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn selection(&self) -> &UploadSelection {
        &self.selection
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is in flight. The submit control shows a busy
    /// label and ignores input while this is true.
    pub fn is_busy(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    /// Switch between video and image mode.
    ///
    /// Switching clears the other mode's staged files: at most one non-empty
    /// selection can exist, so a stale selection can never be submitted
    /// under the new mode's validation rules.
    pub fn set_mode(&mut self, mode: UploadMode) {
        if self.phase != UploadPhase::Selecting || mode == self.mode {
            return;
        }
        self.mode = mode;
        self.selection = UploadSelection::None;
        self.error = None;
    }

    /// Stage a video file. Only honored in video mode while selecting.
    pub fn stage_video(&mut self, path: impl Into<PathBuf>) {
        if self.phase != UploadPhase::Selecting || self.mode != UploadMode::Video {
            return;
        }
        self.selection = UploadSelection::Video(path.into());
        self.error = None;
    }

    /// Add an image to the staged set. Only honored in image mode while
    /// selecting.
    pub fn stage_image(&mut self, path: impl Into<PathBuf>) {
        if self.phase != UploadPhase::Selecting || self.mode != UploadMode::Images {
            return;
        }
        match &mut self.selection {
            UploadSelection::Images(paths) => paths.push(path.into()),
            _ => self.selection = UploadSelection::Images(vec![path.into()]),
        }
        self.error = None;
    }

    /// Drop all staged files, staying in the current mode.
    pub fn clear_selection(&mut self) {
        if self.phase == UploadPhase::Selecting {
            self.selection = UploadSelection::None;
            self.error = None;
        }
    }

    /// Validate and enter `Submitting`.
    ///
    /// On success returns the selection for the caller to upload; on
    /// validation failure records the inline error and stays in
    /// `Selecting`.
    pub fn begin_submit(&mut self) -> Option<UploadSelection> {
        if self.phase != UploadPhase::Selecting {
            return None;
        }
        match self.selection.validate() {
            Ok(()) => {
                debug!(files = self.selection.files().len(), "upload submitted");
                self.error = None;
                self.phase = UploadPhase::Submitting;
                Some(self.selection.clone())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Transition `Submitting` -> `ResultsShown` with the returned scores.
    pub fn submit_succeeded(&mut self, scores: EmotionScores) {
        if self.phase == UploadPhase::Submitting {
            self.phase = UploadPhase::ResultsShown(scores);
        }
    }

    /// Transition `Submitting` -> `Selecting`, keeping the staged files so
    /// the user may resubmit. No automatic retry.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if self.phase == UploadPhase::Submitting {
            self.error = Some(message.into());
            self.phase = UploadPhase::Selecting;
        }
    }

    /// Dismiss the results summary, revealing the finish acknowledgment.
    pub fn dismiss_results(&mut self) {
        if matches!(self.phase, UploadPhase::ResultsShown(_)) {
            self.phase = UploadPhase::FinishShown;
        }
    }

    /// Dismiss the finish acknowledgment; the caller navigates home.
    pub fn dismiss_finish(&mut self) {
        if self.phase == UploadPhase::FinishShown {
            self.phase = UploadPhase::Done;
        }
    }
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(dir: &tempfile::TempDir, name: &str, bytes: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        path
    }

    #[test]
    fn empty_selection_fails_validation() {
        let err = UploadSelection::None.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn small_video_passes_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 1024);
        assert!(UploadSelection::Video(path).validate().is_ok());
    }

    #[test]
    fn oversized_video_is_rejected_before_any_network_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", (MAX_VIDEO_BYTES + 1) as usize);
        let err = UploadSelection::Video(path).validate().unwrap_err();
        assert_eq!(err.to_string(), "video exceeds the 10 MB limit");
    }

    #[test]
    fn empty_video_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 0);
        assert!(UploadSelection::Video(path).validate().is_err());
    }

    #[test]
    fn non_video_mime_is_rejected_in_video_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "notes.txt", 10);
        let err = UploadSelection::Video(path).validate().unwrap_err();
        assert!(err.to_string().contains("not a video file"));
    }

    #[test]
    fn image_set_with_one_non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let good = temp_file(&dir, "face.png", 10);
        let bad = temp_file(&dir, "face.pdf", 10);
        let err = UploadSelection::Images(vec![good, bad]).validate().unwrap_err();
        assert!(err.to_string().contains("not an image file"));
    }

    #[test]
    fn image_set_of_jpegs_and_pngs_passes() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.jpg", 10);
        let b = temp_file(&dir, "b.png", 10);
        assert!(UploadSelection::Images(vec![a, b]).validate().is_ok());
    }

    #[test]
    fn empty_image_set_is_rejected() {
        assert!(UploadSelection::Images(Vec::new()).validate().is_err());
    }

    #[test]
    fn new_flow_starts_selecting_in_video_mode() {
        let flow = UploadFlow::new();
        assert_eq!(*flow.phase(), UploadPhase::Selecting);
        assert_eq!(flow.mode(), UploadMode::Video);
        assert!(flow.selection().is_none());
        assert!(!flow.is_busy());
    }

    #[test]
    fn switching_modes_clears_the_other_modes_staged_files() {
        let mut flow = UploadFlow::new();
        flow.stage_video("/tmp/clip.mp4");
        assert!(!flow.selection().is_none());

        flow.set_mode(UploadMode::Images);
        assert!(flow.selection().is_none());

        flow.stage_image("/tmp/a.png");
        flow.set_mode(UploadMode::Video);
        assert!(flow.selection().is_none());
    }

    #[test]
    fn setting_the_same_mode_keeps_the_selection() {
        let mut flow = UploadFlow::new();
        flow.stage_video("/tmp/clip.mp4");
        flow.set_mode(UploadMode::Video);
        assert_eq!(
            *flow.selection(),
            UploadSelection::Video(PathBuf::from("/tmp/clip.mp4"))
        );
    }

    #[test]
    fn staging_images_accumulates() {
        let mut flow = UploadFlow::new();
        flow.set_mode(UploadMode::Images);
        flow.stage_image("/tmp/a.png");
        flow.stage_image("/tmp/b.png");
        assert_eq!(flow.selection().files().len(), 2);
    }

    #[test]
    fn stage_video_is_ignored_in_image_mode() {
        let mut flow = UploadFlow::new();
        flow.set_mode(UploadMode::Images);
        flow.stage_video("/tmp/clip.mp4");
        assert!(flow.selection().is_none());
    }

    #[test]
    fn begin_submit_with_invalid_selection_sets_inline_error() {
        let mut flow = UploadFlow::new();
        assert!(flow.begin_submit().is_none());
        assert_eq!(*flow.phase(), UploadPhase::Selecting);
        assert!(flow.error().is_some());
    }

    #[test]
    fn successful_submit_walks_the_modal_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 512);

        let mut flow = UploadFlow::new();
        flow.stage_video(&path);
        let selection = flow.begin_submit().expect("valid selection");
        assert_eq!(selection.files().len(), 1);
        assert!(flow.is_busy());

        let scores: EmotionScores = [("happy".to_string(), 0.8)].into_iter().collect();
        flow.submit_succeeded(scores.clone());
        assert_eq!(*flow.phase(), UploadPhase::ResultsShown(scores));

        flow.dismiss_results();
        assert_eq!(*flow.phase(), UploadPhase::FinishShown);

        flow.dismiss_finish();
        assert_eq!(*flow.phase(), UploadPhase::Done);
    }

    #[test]
    fn dismissing_finish_before_results_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 512);

        let mut flow = UploadFlow::new();
        flow.stage_video(&path);
        flow.begin_submit().unwrap();
        flow.submit_succeeded(EmotionScores::default());

        // The finish modal cannot appear while results are showing.
        flow.dismiss_finish();
        assert!(matches!(flow.phase(), UploadPhase::ResultsShown(_)));
    }

    #[test]
    fn failed_submit_returns_to_selecting_with_files_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 512);

        let mut flow = UploadFlow::new();
        flow.stage_video(&path);
        flow.begin_submit().unwrap();
        flow.submit_failed("backend unavailable");

        assert_eq!(*flow.phase(), UploadPhase::Selecting);
        assert_eq!(flow.error(), Some("backend unavailable"));
        assert!(!flow.selection().is_none());
        // The user may resubmit.
        assert!(flow.begin_submit().is_some());
    }

    #[test]
    fn staging_is_ignored_while_busy() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(&dir, "clip.mp4", 512);

        let mut flow = UploadFlow::new();
        flow.stage_video(&path);
        flow.begin_submit().unwrap();

        flow.stage_video("/tmp/other.mp4");
        flow.set_mode(UploadMode::Images);
        assert_eq!(*flow.selection(), UploadSelection::Video(path));
        assert_eq!(flow.mode(), UploadMode::Video);
    }
}
