//! Cognitive assessment endpoints.

use tracing::debug;

use super::ApiClient;
use crate::types::{
    CognitiveStatus, CognitiveTestResult, QuestionAnswer, QuestionsResponse, SubmissionAck,
    SubmitRequest,
};
use crate::{Error, Result};

impl ApiClient {
    /// Fetch the question set. Read endpoint, safe on every page mount.
    pub async fn questions(&self) -> Result<Vec<crate::types::Question>> {
        let token = self.bearer_token()?;
        debug!("fetching question set");
        let response = self
            .http()
            .get(self.url("/cognitive/questions"))
            .bearer_auth(&token)
            .send()
            .await?;
        let body: QuestionsResponse = Self::read_json(response).await?;
        Ok(body.questions)
    }

    /// Submit a completed assessment. Write endpoint, at most once per
    /// user action.
    pub async fn submit_assessment(&self, answers: &[QuestionAnswer]) -> Result<SubmissionAck> {
        let token = self.bearer_token()?;
        if answers.iter().any(|a| a.selected_answer.is_empty()) {
            return Err(Error::Validation(
                "every question must be answered before submitting".to_string(),
            ));
        }
        debug!(count = answers.len(), "submitting assessment");
        let response = self
            .http()
            .post(self.url("/cognitive/submit"))
            .bearer_auth(&token)
            .json(&SubmitRequest {
                questions_data: answers,
            })
            .send()
            .await?;
        let ack = Self::read_json(response).await?;
        Ok(ack)
    }

    /// Completion status for the stored account.
    pub async fn cognitive_status(&self) -> Result<CognitiveStatus> {
        let token = self.bearer_token()?;
        let email = self.stored_email()?;
        let response = self
            .http()
            .get(self.url("/cognitive/status"))
            .query(&[("email", email.as_str())])
            .bearer_auth(&token)
            .send()
            .await?;
        let status = Self::read_json(response).await?;
        Ok(status)
    }

    /// Full scored result for the stored account.
    pub async fn cognitive_test_data(&self) -> Result<CognitiveTestResult> {
        let token = self.bearer_token()?;
        let email = self.stored_email()?;
        debug!(%email, "fetching cognitive test data");
        let response = self
            .http()
            .get(self.url("/cognitive/test-data"))
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

    use crate::types::QuestionAnswer;
    use crate::{ClientConfig, SessionStore};

    use super::ApiClient;

    #[tokio::test]
    async fn questions_fail_fast_without_a_token() {
        let client = ApiClient::new(
            &ClientConfig::default(),
            Arc::new(SessionStore::in_memory()),
        )
        .unwrap();
        let err = client.questions().await.unwrap_err();
        assert!(matches!(err, crate::Error::MissingCredential));
    }

    #[tokio::test]
    async fn submit_rejects_unanswered_slots_before_the_network() {
        let store = Arc::new(SessionStore::in_memory());
        store.save_login("tok", "sam@example.com").unwrap();
        let client = ApiClient::new(&ClientConfig::default(), store).unwrap();

        let answers = vec![QuestionAnswer {
            question_id: 1,
            question_text: "Q".to_string(),
            selected_answer: String::new(),
        }];
        let err = client.submit_assessment(&answers).await.unwrap_err();
        assert!(matches!(err, crate::Error::Validation(_)));
    }

    #[tokio::test]
    async fn status_requires_a_stored_email() {
        let client = ApiClient::new(
            &ClientConfig::default(),
            Arc::new(SessionStore::in_memory()),
        )
        .unwrap();
        assert!(client.cognitive_status().await.is_err());
    }
}
