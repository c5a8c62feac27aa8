use crate::credentials::hash::DEFAULT_COST;
use secrecy::SecretString;

/// Credential configuration shared across the server, fixed at startup.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub scheme: String,
    pub secret: SecretString,
    pub cost: u32,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(scheme: String) -> Self {
        Self {
            scheme,
            secret: SecretString::default(),
            cost: DEFAULT_COST,
        }
    }

    pub fn set_secret(&mut self, secret: SecretString) {
        self.secret = secret;
    }
}
