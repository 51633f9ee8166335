// src/config/descriptor.rs
//
// Command-line service descriptors: `name=url` or `name=url[METHOD]`.
//
use reqwest::Method;
use tracing::debug;

use super::ProbeConfig;
use crate::health::HealthCheck;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("expected exactly one '=' in descriptor, found {count}")]
    Separator { count: usize },
}

/// Parse a single descriptor into a check carrying the run's timeout.
pub fn parse_descriptor(raw: &str, config: &ProbeConfig) -> Result<HealthCheck, DescriptorError> {
    let count = raw.matches('=').count();
    let (name, target) = match raw.split_once('=') {
        Some(parts) if count == 1 => parts,
        _ => return Err(DescriptorError::Separator { count }),
    };

    let (url, method) = split_method(target);

    Ok(HealthCheck::new(name, url, method, config.timeout()))
}

/// Parse every descriptor, keeping input order. Malformed ones are left out.
pub fn parse_descriptors<I, S>(args: I, config: &ProbeConfig) -> Vec<HealthCheck>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter_map(|arg| {
            let arg = arg.as_ref();
            match parse_descriptor(arg, config) {
                Ok(check) => Some(check),
                Err(e) => {
                    debug!(descriptor = arg, error = %e, "dropping descriptor");
                    None
                }
            }
        })
        .collect()
}

/// Strip a trailing `[METHOD]` from the url. Unusable tokens fall back to GET.
fn split_method(target: &str) -> (&str, Method) {
    if !(target.contains('[') && target.ends_with(']')) {
        return (target, Method::GET);
    }

    let Some((url, rest)) = target.split_once('[') else {
        return (target, Method::GET);
    };
    let token = &rest[..rest.len() - 1];

    if token.is_empty() {
        return (url, Method::GET);
    }

    match Method::from_bytes(token.to_ascii_uppercase().as_bytes()) {
        Ok(method) => (url, method),
        Err(_) => {
            debug!(method = token, "invalid method override, using GET");
            (url, Method::GET)
        }
    }
}
