/// Checks a supplied password against the stored one.
pub trait CredentialVerifier: Send + Sync {
    /// Value persisted for a newly supplied password.
    fn protect(&self, password: &str) -> String;

    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Passwords are kept and compared verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextCredentials;

impl CredentialVerifier for PlainTextCredentials {
    fn protect(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips_and_compares_exactly() {
        let stored = PlainTextCredentials.protect("hunter2");
        assert_eq!(stored, "hunter2");
        assert!(PlainTextCredentials.verify(&stored, "hunter2"));
        assert!(!PlainTextCredentials.verify(&stored, "Hunter2"));
        assert!(!PlainTextCredentials.verify(&stored, ""));
    }
}
