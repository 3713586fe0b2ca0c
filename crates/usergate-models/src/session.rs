use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(custom(function = "not_blank", message = "email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SessionResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_response_uses_camel_case_key() {
        let response = SessionResponse {
            access_token: "a.b.c".to_string(),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, r#"{"accessToken":"a.b.c"}"#);
    }

    #[test]
    fn test_login_dto_rejects_blank_fields() {
        let dto = LoginDto {
            email: " ".to_string(),
            password: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
