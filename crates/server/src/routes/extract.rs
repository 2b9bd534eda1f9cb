use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;
use shared::{api::error::ServerError, model::ValidateModel, validation_error};
use tracing::debug;

/// Request body sent either as JSON or as an urlencoded form, picked by the
/// content type
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"))
}

#[async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| validation_error!("{}", e.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| validation_error!("{}", e.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// Query string read into `T` and validated. A query that can't be read at
/// all, such as one repeating a key, is reported like an empty one so the
/// first missing mandatory field names the problem.
pub struct ValidQuery<T: ValidateModel>(pub T::Valid);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Default + ValidateModel,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(query)) => query,
            Err(e) => {
                let body = e.body_text();
                debug!(%body, "Unreadable query string");
                T::default().validate()?;
                return Err(validation_error!("{body}"));
            }
        };

        Ok(Self(query.validate()?))
    }
}
