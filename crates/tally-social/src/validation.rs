use tally_types::{DomainError, DomainResult};

use crate::input::UserInput;

pub fn validate_user(input: &UserInput) -> DomainResult<()> {
    require("username", "Username", &input.username)?;
    require("email", "Email", &input.email)
}

pub fn validate_content(content: &str) -> DomainResult<()> {
    require("content", "Content", content)
}

fn require(field: &str, label: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(field, format!("{label} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> UserInput {
        UserInput {
            username: username.into(),
            email: email.into(),
            bio: String::new(),
        }
    }

    #[test]
    fn username_checked_before_email() {
        let err = validate_user(&user("", "")).unwrap_err();
        assert_eq!(err, DomainError::validation("username", "Username is required"));
    }

    #[test]
    fn email_is_required() {
        let err = validate_user(&user("john", "")).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn only_empty_strings_are_missing() {
        assert!(validate_user(&user(" ", " ")).is_ok());
        assert!(validate_content(" ").is_ok());
    }

    #[test]
    fn bio_is_optional() {
        assert!(validate_user(&user("john", "john@example.com")).is_ok());
    }

    #[test]
    fn content_is_required() {
        assert!(validate_content("").is_err());
        assert!(validate_content("hello").is_ok());
    }
}
