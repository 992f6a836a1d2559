pub const MAX_PASSWORD_LEN: usize = 128;

/// True if pw is non-empty and at most `MAX_PASSWORD_LEN` characters.
///
/// Login only checks shape; strength rules belong to registration.
pub fn is_valid_password(pw: &str) -> bool {
    let len = pw.chars().count();
    len > 0 && len <= MAX_PASSWORD_LEN
}
