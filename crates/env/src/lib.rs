use std::{env::var, sync::Arc, time::Duration};

use eyre::{eyre, Context, Error};
use log::debug;

const DEFAULT_HOST: &str = "0.0.0.0:3333";
const DEFAULT_KEY_INDEX: &str = "1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    salt_key: String,
    key_index: String,
    merchant_id: String,
    redirect_base_url: String,
    api_base_url: String,
    host: String,
    timeout: Duration,
}

impl Env {
    pub fn salt_key(&self) -> &str {
        &self.0.salt_key
    }

    pub fn key_index(&self) -> &str {
        &self.0.key_index
    }

    pub fn merchant_id(&self) -> &str {
        &self.0.merchant_id
    }

    pub fn redirect_base_url(&self) -> &str {
        &self.0.redirect_base_url
    }

    pub fn api_base_url(&self) -> &str {
        &self.0.api_base_url
    }

    pub fn host(&self) -> &str {
        &self.0.host
    }

    pub fn timeout(&self) -> Duration {
        self.0.timeout
    }

    /// Reads the configuration from the process environment.
    ///
    /// Loading `.env` is left to the binary.
    pub fn load() -> Result<Env, Error> {
        Env::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Env, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, Error> {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| eyre!("{} is not set", key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let timeout = optional("PHONEPE_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .context("PHONEPE_TIMEOUT_SECS must be a number of seconds")?;

        let env = EnvInner {
            salt_key: required("PHONEPE_SALT_KEY")?,
            key_index: optional("PHONEPE_KEY_INDEX", DEFAULT_KEY_INDEX),
            merchant_id: required("PHONEPE_MERCHANT_ID")?,
            redirect_base_url: trim_url(required("REDIRECT_BASE_URL")?),
            api_base_url: trim_url(required("PHONEPE_API_BASE_URL")?),
            host: optional("HOST", DEFAULT_HOST),
            timeout: Duration::from_secs(timeout),
        };
        debug!(
            "config loaded: merchant={} api={} redirect={} host={}",
            env.merchant_id, env.api_base_url, env.redirect_base_url, env.host
        );
        Ok(Env(Arc::new(env)))
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}
