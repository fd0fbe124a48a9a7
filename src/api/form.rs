use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};

use crate::{error::AppError, models::PreferenceSubmission};

/// How a request body is read into a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Multipart,
    /// Any other content type carries no form fields
    Other,
}

impl BodyKind {
    fn of(request: &Request) -> Self {
        let Some(content_type) = request.headers().get(CONTENT_TYPE) else {
            return BodyKind::UrlEncoded;
        };
        let Ok(content_type) = content_type.to_str() else {
            return BodyKind::Other;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/x-www-form-urlencoded" => BodyKind::UrlEncoded,
            "multipart/form-data" => BodyKind::Multipart,
            _ => BodyKind::Other,
        }
    }
}

/// Extracts a `PreferenceSubmission` from a url-encoded or multipart body
///
/// A body without a content type is read as url-encoded, so an empty request
/// yields an empty submission. Bodies of any other content type contribute
/// no fields. File parts are skipped. Extraction failures keep axum's own
/// status (413 for an oversized body, 400 for a broken multipart stream).
#[async_trait::async_trait]
impl<S> FromRequest<S> for PreferenceSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(&req) {
            BodyKind::Other => Ok(PreferenceSubmission::new()),
            BodyKind::UrlEncoded => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
                Ok(url::form_urlencoded::parse(&body).into_owned().collect())
            }
            BodyKind::Multipart => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;

                let mut submission = PreferenceSubmission::new();
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?
                {
                    if field.file_name().is_some() {
                        continue;
                    }
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
                    submission.insert(name, value);
                }

                Ok(submission)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(content_type: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/recommend");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_body_kind_from_content_type() {
        assert_eq!(BodyKind::of(&request_with(None)), BodyKind::UrlEncoded);
        assert_eq!(
            BodyKind::of(&request_with(Some("application/x-www-form-urlencoded; charset=utf-8"))),
            BodyKind::UrlEncoded
        );
        assert_eq!(
            BodyKind::of(&request_with(Some("multipart/form-data; boundary=xyz"))),
            BodyKind::Multipart
        );
        assert_eq!(BodyKind::of(&request_with(Some("application/json"))), BodyKind::Other);
        assert_eq!(BodyKind::of(&request_with(Some("text/plain"))), BodyKind::Other);
    }
}
