//! Field validators shared by the wizard steps.
//!
//! Each validator returns `Ok(())` or the message to render inline under
//! the offending field. Validators are pure so they run identically in
//! the browser and in native tests.

/// The code the confirmation step accepts.
/// Stand-in for a real verification backend; no code is actually sent.
pub const EXPECTED_CONFIRMATION_CODE: &str = "1234";

/// Phone numbers must look like `555 555 1234`: three digit groups of
/// 3, 3 and 4, separated by single spaces.
pub fn validate_phone_number(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Phone number is required".to_string());
    }
    if !matches_phone_pattern(value) {
        return Err("Phone number must be in the format 555 555 1234".to_string());
    }
    Ok(())
}

fn matches_phone_pattern(value: &str) -> bool {
    let groups: Vec<&str> = value.split(' ').collect();
    groups.len() == 3
        && groups[0].len() == 3
        && groups[1].len() == 3
        && groups[2].len() == 4
        && groups
            .iter()
            .all(|group| group.chars().all(|c| c.is_ascii_digit()))
}

/// A confirmation code is four digits and must equal the expected code.
pub fn validate_confirmation_code(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Confirmation code is required".to_string());
    }
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Code must be 4 digits".to_string());
    }
    if value != EXPECTED_CONFIRMATION_CODE {
        return Err("Code is incorrect, please try again".to_string());
    }
    Ok(())
}

/// Emails must be `local@domain.tld` with no whitespace or extra `@`.
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email is required".to_string());
    }
    if !matches_email_pattern(value) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

fn matches_email_pattern(value: &str) -> bool {
    let valid_part =
        |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    valid_part(local) && valid_part(host) && valid_part(tld)
}

/// Passwords need at least six characters.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

/// ITINs must look like `123-45-678`: digit groups of 3, 2 and 3 joined
/// by dashes.
pub fn validate_itin(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("ITIN is required".to_string());
    }
    if !matches_itin_pattern(value) {
        return Err("ITIN must be in format 123-45-678".to_string());
    }
    Ok(())
}

fn matches_itin_pattern(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    groups.len() == 3
        && groups[0].len() == 3
        && groups[1].len() == 2
        && groups[2].len() == 3
        && groups
            .iter()
            .all(|group| group.chars().all(|c| c.is_ascii_digit()))
}

/// Required-field check with a field-specific message.
pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_accepts_grouped_digits() {
        assert!(validate_phone_number("555 555 1234").is_ok());
        assert!(validate_phone_number("123 456 7890").is_ok());
    }

    #[test]
    fn test_phone_number_rejects_ungrouped_digits() {
        let err = validate_phone_number("5555551234").unwrap_err();
        assert_eq!(err, "Phone number must be in the format 555 555 1234");
    }

    #[test]
    fn test_phone_number_rejects_wrong_grouping() {
        assert!(validate_phone_number("55 555 1234").is_err());
        assert!(validate_phone_number("555 5555 123").is_err());
        assert!(validate_phone_number("555  555 1234").is_err()); // double space
        assert!(validate_phone_number("555 555 12345").is_err());
        assert!(validate_phone_number("555-555-1234").is_err());
        assert!(validate_phone_number("abc def ghij").is_err());
    }

    #[test]
    fn test_phone_number_required() {
        assert_eq!(
            validate_phone_number("").unwrap_err(),
            "Phone number is required"
        );
    }

    #[test]
    fn test_confirmation_code_accepts_only_the_expected_code() {
        assert!(validate_confirmation_code("1234").is_ok());
        assert_eq!(
            validate_confirmation_code("0000").unwrap_err(),
            "Code is incorrect, please try again"
        );
    }

    #[test]
    fn test_confirmation_code_shape_errors() {
        assert_eq!(
            validate_confirmation_code("").unwrap_err(),
            "Confirmation code is required"
        );
        assert_eq!(
            validate_confirmation_code("123").unwrap_err(),
            "Code must be 4 digits"
        );
        assert_eq!(
            validate_confirmation_code("12a4").unwrap_err(),
            "Code must be 4 digits"
        );
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(validate_email("alex_manager@gmail.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("spa ce@mail.com").is_err());
        assert!(validate_email("@mail.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@mail.").is_err());
    }

    #[test]
    fn test_password_length_boundary() {
        assert_eq!(
            validate_password("abcde").unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert!(validate_password("abcdef").is_ok());
        assert_eq!(
            validate_password("").unwrap_err(),
            "Password is required"
        );
    }

    #[test]
    fn test_itin_pattern() {
        assert!(validate_itin("123-45-678").is_ok());
        assert_eq!(
            validate_itin("12-345-678").unwrap_err(),
            "ITIN must be in format 123-45-678"
        );
        assert!(validate_itin("123-45-6789").is_err());
        assert!(validate_itin("123 45 678").is_err());
        assert_eq!(validate_itin("").unwrap_err(), "ITIN is required");
    }

    #[test]
    fn test_required_uses_the_given_message() {
        assert_eq!(
            validate_required("", "First name is required").unwrap_err(),
            "First name is required"
        );
        assert!(validate_required("Alexander", "First name is required").is_ok());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_well_formed_phone_numbers_always_pass(
            a in 0u32..1000,
            b in 0u32..1000,
            c in 0u32..10000,
        ) {
            let number = format!("{a:03} {b:03} {c:04}");
            prop_assert!(validate_phone_number(&number).is_ok());
        }

        #[test]
        fn test_phone_numbers_without_spaces_never_pass(digits in "[0-9]{10}") {
            prop_assert!(validate_phone_number(&digits).is_err());
        }

        #[test]
        fn test_password_passes_iff_six_or_more_chars(password in ".{0,20}") {
            let result = validate_password(&password);
            if password.chars().count() >= 6 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn test_four_digit_codes_other_than_expected_fail(code in 0u32..10000) {
            let code = format!("{code:04}");
            let result = validate_confirmation_code(&code);
            if code == EXPECTED_CONFIRMATION_CODE {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err(), "Code is incorrect, please try again");
            }
        }

        #[test]
        fn test_well_formed_itins_always_pass(
            a in 0u32..1000,
            b in 0u32..100,
            c in 0u32..1000,
        ) {
            let itin = format!("{a:03}-{b:02}-{c:03}");
            prop_assert!(validate_itin(&itin).is_ok());
        }
    }
}
