//! Request, response, and attempt models.

mod attempt;
mod requests;
mod responses;

pub use attempt::{LoginAttempt, ProviderAssertion};
pub use requests::{AssertionCallbackRequest, LoginRequest, LogoutRequest};
pub use responses::{LoginResponse, MeResponse};

use crate::error::ApiAuthError;
use validator::Validate;

/// Validate a request model, flattening field errors into one message.
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), ApiAuthError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ApiAuthError::Validation(errors.join(", "))
    })
}
