use rand::Rng;

use crate::config::AuthSettings;

/// Username/password pair for one sign-up run. The shop never exposes user
/// deletion, so generated accounts accumulate; uniqueness per run is what
/// keeps parallel executions from colliding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCredentials {
    pub username: String,
    pub password: String,
}

/// Build credentials for one run: base username, execution-context tag, and
/// a random 6-digit suffix. Pure function over the RNG; nothing is persisted.
pub fn test_credentials(auth: &AuthSettings, context: &str) -> TestCredentials {
    let suffix = rand::thread_rng().gen_range(100_000..=999_999);
    TestCredentials {
        username: format!("{}-{}-{}", auth.base_username, context, suffix),
        password: auth.password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn username_carries_base_context_and_six_digit_suffix() {
        let auth = AuthSettings::default();
        let creds = test_credentials(&auth, "chrome");

        let mut parts = creds.username.rsplitn(2, '-');
        let suffix = parts.next().expect("suffix present");
        let prefix = parts.next().expect("prefix present");

        assert_eq!(prefix, "testuser-chrome");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        assert!(!suffix.starts_with('0'));
    }

    #[test]
    fn password_comes_from_settings() {
        let auth = AuthSettings {
            password: "hunter2".to_string(),
            ..AuthSettings::default()
        };
        assert_eq!(test_credentials(&auth, "chrome").password, "hunter2");
    }

    #[test]
    fn repeated_calls_are_effectively_unique() {
        let auth = AuthSettings::default();
        let usernames: HashSet<String> = (0..50)
            .map(|_| test_credentials(&auth, "chrome").username)
            .collect();
        // 50 draws over 900k suffixes; a collision here means the generator
        // is not actually random.
        assert!(usernames.len() >= 49);
    }
}
