use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::rank::{rank, ScreeningReport, UploadedDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub screening_id: Uuid,
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: ScreeningReport,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/screenings
///
/// Multipart form: one `job_description` text field plus one `resume` file
/// part per uploaded document. Both preconditions (non-empty job description,
/// at least one resume) are enforced here; everything after that is the
/// ranking driver's job.
pub async fn handle_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description = String::new();
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
            }
            Some("resume") => {
                let file_name = field.file_name().map(str::to_string).ok_or_else(|| {
                    AppError::Multipart("resume part is missing a file name".to_string())
                })?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                documents.push(UploadedDocument {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            other => {
                return Err(AppError::Multipart(format!(
                    "unexpected field {:?}",
                    other.unwrap_or("<unnamed>")
                )));
            }
        }
    }

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "a non-empty job description is required".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(AppError::Validation(
            "upload at least one resume (.pdf or .txt)".to_string(),
        ));
    }

    info!("Screening {} uploaded resumes", documents.len());
    let report = rank(&job_description, &documents, &state.vocabulary);

    Ok(Json(ScreeningResponse {
        screening_id: Uuid::new_v4(),
        completed_at: Utc::now(),
        report,
    }))
}

/// GET /api/v1/skills
/// Lists the active skill vocabulary so clients can see what is matchable.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state.vocabulary.surfaces(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::screening::skills::SkillVocabulary;
    use crate::state::AppState;

    const BOUNDARY: &str = "------------------------screenertest";

    fn test_router() -> Router {
        build_router(AppState {
            vocabulary: Arc::new(SkillVocabulary::builtin()),
        })
    }

    struct MultipartBuilder {
        body: Vec<u8>,
    }

    impl MultipartBuilder {
        fn new() -> Self {
            Self { body: Vec::new() }
        }

        fn text_field(mut self, name: &str, value: &str) -> Self {
            self.body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
            self
        }

        fn file_field(mut self, name: &str, file_name: &str, content: &[u8]) -> Self {
            self.body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            self.body.extend_from_slice(content);
            self.body.extend_from_slice(b"\r\n");
            self
        }

        fn build(mut self) -> Request<Body> {
            self.body
                .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
            Request::builder()
                .method("POST")
                .uri("/api/v1/screenings")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(self.body))
                .unwrap()
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_screening_ranks_uploaded_resumes() {
        let request = MultipartBuilder::new()
            .text_field(
                "job_description",
                "Data Scientist with Python, SQL and Machine Learning.",
            )
            .file_field("resume", "alice.txt", b"Alice High\npython sql machine learning")
            .file_field("resume", "bob.txt", b"Bob Low\npython only")
            .build();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0]["name"], "Alice High");
        assert_eq!(candidates[0]["score"], 100.0);
        assert_eq!(candidates[1]["name"], "Bob Low");
        assert!(body["screening_id"].is_string());
        assert_eq!(
            body["required_skills"],
            serde_json::json!(["Machine Learning", "Python", "SQL"])
        );
    }

    #[tokio::test]
    async fn test_screening_reports_skipped_documents() {
        let request = MultipartBuilder::new()
            .text_field("job_description", "Python role")
            .file_field("resume", "cv.docx", b"unsupported")
            .file_field("resume", "ok.txt", b"Jane Doe\npython")
            .build();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["candidates"].as_array().unwrap().len(), 1);
        let skipped = body["skipped"].as_array().unwrap();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0]["file_name"], "cv.docx");
    }

    #[tokio::test]
    async fn test_missing_job_description_is_rejected() {
        let request = MultipartBuilder::new()
            .file_field("resume", "ok.txt", b"Jane Doe\npython")
            .build();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_uploads_are_rejected() {
        let request = MultipartBuilder::new()
            .text_field("job_description", "Python role")
            .build();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_skills_endpoint_lists_vocabulary() {
        let request = Request::builder()
            .uri("/api/v1/skills")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let skills = body["skills"].as_array().unwrap();
        assert_eq!(skills.len(), crate::screening::skills::DEFAULT_SKILLS.len());
        assert!(skills.contains(&Value::from("Python")));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }
}
