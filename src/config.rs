// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. Missing or
//! invalid values abort startup with a [`ConfigError`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_DOMAIN` | Identity provider domain (issuer is `https://<domain>/`) | Required |
//! | `AUTH_AUDIENCE` | Expected JWT audience claim | Required |
//! | `AUTH_ALGORITHMS` | Comma-separated accepted RSA algorithms | `RS256` |
//! | `AUTH_LEEWAY_SECS` | Clock skew tolerance for `exp` | `0` |
//! | `JWKS_CACHE_TTL_SECS` | JWKS cache TTL, `0` disables the cache | `0` |
//! | `JWKS_FETCH_TIMEOUT_SECS` | Timeout for the JWKS request | `10` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use url::Url;

pub const AUTH_DOMAIN_ENV: &str = "AUTH_DOMAIN";
pub const AUTH_AUDIENCE_ENV: &str = "AUTH_AUDIENCE";
pub const AUTH_ALGORITHMS_ENV: &str = "AUTH_ALGORITHMS";
pub const AUTH_LEEWAY_ENV: &str = "AUTH_LEEWAY_SECS";
pub const JWKS_CACHE_TTL_ENV: &str = "JWKS_CACHE_TTL_SECS";
pub const JWKS_FETCH_TIMEOUT_ENV: &str = "JWKS_FETCH_TIMEOUT_SECS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::invalid(
                LOG_FORMAT_ENV,
                format!("expected `json` or `pretty`, got `{other}`"),
            )),
        }
    }
}

/// Identity provider settings used to build the authorization guard.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub domain: String,
    pub audience: String,
    pub algorithms: Vec<Algorithm>,
    pub leeway: u64,
    pub jwks_url: Url,
    /// Zero disables the cache.
    pub jwks_cache_ttl: Duration,
    pub jwks_timeout: Duration,
}

impl AuthSettings {
    /// Expected `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
    pub auth: AuthSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let domain = var(AUTH_DOMAIN_ENV).ok_or(ConfigError::Missing(AUTH_DOMAIN_ENV))?;
        let jwks_url = jwks_url_for(domain.trim())?;
        let audience = var(AUTH_AUDIENCE_ENV).ok_or(ConfigError::Missing(AUTH_AUDIENCE_ENV))?;

        let algorithms = match var(AUTH_ALGORITHMS_ENV) {
            Some(list) => parse_algorithms(&list)?,
            None => vec![Algorithm::RS256],
        };

        let auth = AuthSettings {
            domain: domain.trim().to_string(),
            audience,
            algorithms,
            leeway: parse_number(var(AUTH_LEEWAY_ENV), AUTH_LEEWAY_ENV, 0)?,
            jwks_url,
            jwks_cache_ttl: Duration::from_secs(parse_number(
                var(JWKS_CACHE_TTL_ENV),
                JWKS_CACHE_TTL_ENV,
                0,
            )?),
            jwks_timeout: Duration::from_secs(parse_number(
                var(JWKS_FETCH_TIMEOUT_ENV),
                JWKS_FETCH_TIMEOUT_ENV,
                10,
            )?),
        };

        let host = match var(HOST_ENV) {
            Some(host) => host
                .parse()
                .map_err(|_| ConfigError::invalid(HOST_ENV, format!("`{host}` is not an IP address")))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = parse_number(var(PORT_ENV), PORT_ENV, 8080)?;
        let log_format = var(LOG_FORMAT_ENV)
            .map(|f| f.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            log_format,
            auth,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `https://<domain>/.well-known/jwks.json`, rejecting anything that is not a
/// bare host name.
fn jwks_url_for(domain: &str) -> Result<Url, ConfigError> {
    if domain.contains("://") || domain.contains('/') || domain.chars().any(char::is_whitespace) {
        return Err(ConfigError::invalid(
            AUTH_DOMAIN_ENV,
            "expected a bare domain such as `tenant.auth0.com`",
        ));
    }
    Url::parse(&format!("https://{domain}/.well-known/jwks.json"))
        .map_err(|e| ConfigError::invalid(AUTH_DOMAIN_ENV, e.to_string()))
}

fn parse_algorithms(list: &str) -> Result<Vec<Algorithm>, ConfigError> {
    let algorithms = list
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(|name| {
            let alg = Algorithm::from_str(name)
                .map_err(|_| ConfigError::invalid(AUTH_ALGORITHMS_ENV, format!("unknown algorithm `{name}`")))?;
            if !is_rsa(alg) {
                return Err(ConfigError::invalid(
                    AUTH_ALGORITHMS_ENV,
                    format!("`{name}` is not an RSA algorithm"),
                ));
            }
            Ok(alg)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if algorithms.is_empty() {
        return Err(ConfigError::invalid(AUTH_ALGORITHMS_ENV, "no algorithms listed"));
    }
    Ok(algorithms)
}

fn is_rsa(alg: Algorithm) -> bool {
    matches!(
        alg,
        Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512
    )
}

fn parse_number<T: FromStr>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("`{raw}` is not a valid number"))),
        None => Ok(default),
    }
}
