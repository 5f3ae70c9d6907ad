//! Field validation shared by the auth forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Loose e-mail shape check: something before `@`, a dotted domain after,
/// no whitespace, exactly one `@`. This is what the forms enforce before
/// any network call; the backend remains the authority.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
