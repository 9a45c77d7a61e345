//! Emotion analysis endpoints.

use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::ApiClient;
use crate::types::{AnalysisResponse, EmotionScores, EmotionStatus, EmotionTestResult};
use crate::upload::UploadSelection;
use crate::{Error, Result};

impl ApiClient {
    /// Submit files for facial-emotion analysis.
    ///
    /// Builds one multipart request with every staged file under the shared
    /// `files` field. The selection is re-validated here so the client
    /// module stands alone; callers going through `UploadFlow` have already
    /// validated.
    pub async fn analyze(&self, selection: &UploadSelection) -> Result<EmotionScores> {
        selection.validate()?;
        let token = self.bearer_token()?;

        let mut form = Form::new();
        for path in selection.files() {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::Validation(format!("{} has no file name", path.display()))
                })?;
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime.as_ref())?;
            form = form.part("files", part);
        }

        debug!(files = selection.files().len(), "submitting analysis upload");
        let response = self
            .http()
            .post(self.url("/emotion/analysis"))
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await?;
        let body: AnalysisResponse = Self::read_json(response).await?;
        Ok(body.scores)
    }

    /// Past analysis runs for the stored account.
    pub async fn emotion_status(&self) -> Result<EmotionStatus> {
        let token = self.bearer_token()?;
        let email = self.stored_email()?;
        let response = self
            .http()
            .get(self.url("/emotion/status"))
            .query(&[("email", email.as_str())])
            .bearer_auth(&token)
            .send()
            .await?;
        let status = Self::read_json(response).await?;
        Ok(status)
    }

    /// Latest emotion result for the stored account.
    pub async fn emotion_test_data(&self) -> Result<EmotionTestResult> {
        let token = self.bearer_token()?;
        let email = self.stored_email()?;
        debug!(%email, "fetching emotion test data");
        let response = self
            .http()
            .get(self.url("/emotion/test-data"))
            .query(&[("email", email.as_str())])
            .bearer_auth(&token)
            .send()
            .await?;
        let result = Self::read_json(response).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::upload::UploadSelection;
    use crate::{ClientConfig, SessionStore};

    use super::ApiClient;

    #[tokio::test]
    async fn analyze_rejects_an_empty_selection_locally() {
        let store = Arc::new(SessionStore::in_memory());
        store.save_login("tok", "sam@example.com").unwrap();
        let client = ApiClient::new(&ClientConfig::default(), store).unwrap();

        let err = client.analyze(&UploadSelection::None).await.unwrap_err();
        assert!(matches!(err, crate::Error::Validation(_)));
    }

    #[tokio::test]
    async fn analyze_fails_fast_without_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"data").unwrap();

        let client = ApiClient::new(
            &ClientConfig::default(),
            Arc::new(SessionStore::in_memory()),
        )
        .unwrap();
        let err = client
            .analyze(&UploadSelection::Video(path))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::MissingCredential));
    }
}
