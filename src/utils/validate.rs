use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]{6,20}$").expect("Invalid phone regex"));

/// 校验非空文本长度（按字符计，首尾空白不计入）
pub fn validate_text(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(format!(
            "{field} length must be between {min} and {max} characters"
        ));
    }
    Ok(())
}

/// 人名：1..=100 字符
pub fn validate_name(name: &str) -> Result<(), String> {
    validate_text(name, "Name", 1, 100)
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Phone must be 6-20 characters of digits, spaces or +-()");
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), &'static str> {
    if !(3..=120).contains(&age) {
        return Err("Age must be between 3 and 120");
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), &'static str> {
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be a non-negative number");
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5");
    }
    Ok(())
}

/// 统一处理邮箱：去空白、转小写
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 不得为常见弱密码
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
        "Welcome1",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_missing_character_classes() {
        assert!(
            validate_password("abcd1234")
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
        assert!(
            validate_password("ABCD1234")
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
        assert!(
            validate_password("AbcdEfgh")
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_email("tutor@example.com").is_ok());
        assert!(validate_email("first.last+tag@school.co.uk").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("a@b.c").is_err());
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name(&"x".repeat(101)).is_err());
        // 按字符而非字节计数
        assert!(validate_name(&"李".repeat(100)).is_ok());
    }

    #[test]
    fn test_phone_age_price_rating() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("555-CALL-NOW").is_err());

        assert!(validate_age(3).is_ok());
        assert!(validate_age(120).is_ok());
        assert!(validate_age(2).is_err());

        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());

        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
