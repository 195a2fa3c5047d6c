//! Request pieces shared by found and lost item handlers.

use lostfound_db::models::item::ContactInfo;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

/// Contact details as submitted by the reporter.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoInput {
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "Contact email must be a valid email address"))]
    pub email: Option<String>,
}

impl From<ContactInfoInput> for ContactInfo {
    fn from(input: ContactInfoInput) -> Self {
        Self {
            phone: input.phone,
            email: input.email,
        }
    }
}

/// Every image must be an absolute URL.
pub fn validate_image_urls(images: &[String]) -> Result<(), ValidationError> {
    if images.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Every image must be a valid URL".into()))
    }
}
