//! Request extraction that rejects with the JSON error envelope.

use std::fmt::Write;

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

/// JSON body that has been deserialized and passed `validator` rules.
///
/// Malformed JSON and rule failures are both rejected with 400; rule failure
/// messages are sorted by field path and joined with `", "`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::BadRequest(validation_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters; a value that does not parse (e.g. a non-numeric id) is a 400.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// Query string parameters; a malformed query is a 400.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Flatten nested validation errors into one human-readable line.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ")
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let mut path = String::from(prefix);
        if !path.is_empty() {
            path.push('.');
        }
        let _ = write!(path, "{field}");

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("{path} is invalid ({})", error.code),
                    };
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(range(min = 0, message = "age must not be negative"))]
        age: i32,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email(message = "email must be a valid email address"))]
        email: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn messages_are_sorted_and_joined() {
        let value = Outer {
            name: String::new(),
            email: "nope".into(),
            inner: Inner { age: -1 },
        };
        let errors = value.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "email must be a valid email address, age must not be negative, name is required"
        );
    }
}
