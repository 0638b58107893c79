use std::borrow::Cow;
use std::collections::BTreeMap;

use ::entity::restaurant;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Field name to the messages rendered next to that field.
pub type FormErrors = BTreeMap<String, Vec<String>>;

/// Submitted restaurant fields.
///
/// Missing fields deserialize to the empty string so that an incomplete
/// submission reaches validation instead of being rejected by the extractor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct RestaurantForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 255, message = "Ensure this value has at most 255 characters.")
    )]
    pub address_first_line: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 32, message = "Ensure this value has at most 32 characters.")
    )]
    pub phone_number: String,
}

impl RestaurantForm {
    /// Trims surrounding whitespace from every field.
    pub fn cleaned(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            address_first_line: self.address_first_line.trim().to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
        }
    }

    /// Cleans and validates the submission.
    pub fn clean(self) -> Result<Self, FormErrors> {
        let form = self.cleaned();
        match form.validate() {
            Ok(()) => Ok(form),
            Err(errors) => Err(form_errors(&errors)),
        }
    }
}

impl From<&restaurant::Model> for RestaurantForm {
    fn from(model: &restaurant::Model) -> Self {
        Self {
            name: model.name.clone(),
            address_first_line: model.address_first_line.clone(),
            phone_number: model.phone_number.clone(),
        }
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE)));
    }
    Ok(())
}

pub fn form_errors(errors: &ValidationErrors) -> FormErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
