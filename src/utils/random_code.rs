use rand::Rng;
use rand::distr::Alphanumeric;

/// 生成指定长度的随机字母数字串
pub fn generate_random_code(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// 生成满足密码策略的随机初始密码
pub fn generate_initial_password() -> String {
    // 固定前缀保证大小写与数字各至少一个
    format!("Lm5{}", generate_random_code(13))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_random_code_length() {
        let code = generate_random_code(24);
        assert_eq!(code.len(), 24);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_initial_password_passes_policy() {
        for _ in 0..16 {
            assert!(validate_password(&generate_initial_password()).is_ok());
        }
    }
}
