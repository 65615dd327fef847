use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::error::{ConfigError, to_env_var};
use crate::settings::CorsSettings;

const WILDCARD: &str = "*";

/// Builds the CORS layer. A `*` entry allows everything; when credentials
/// are allowed it mirrors the request instead, since browsers reject a
/// literal wildcard together with credentials.
pub fn layer(settings: &CorsSettings) -> Result<CorsLayer, ConfigError> {
    let credentials = settings.allow_credentials;

    let origins = if is_wildcard(&settings.allow_origins) {
        if credentials {
            AllowOrigin::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let origins = parse_all(&settings.allow_origins, "cors.allow_origins", |origin| {
            HeaderValue::from_str(origin).map_err(|err| err.to_string())
        })?;
        AllowOrigin::list(origins)
    };

    let methods = if is_wildcard(&settings.allow_methods) {
        if credentials {
            AllowMethods::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let methods = parse_all(&settings.allow_methods, "cors.allow_methods", |method| {
            Method::from_bytes(method.to_uppercase().as_bytes()).map_err(|err| err.to_string())
        })?;
        AllowMethods::list(methods)
    };

    let headers = if is_wildcard(&settings.allow_headers) {
        if credentials {
            AllowHeaders::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let headers = parse_all(&settings.allow_headers, "cors.allow_headers", |name| {
            HeaderName::from_bytes(name.as_bytes()).map_err(|err| err.to_string())
        })?;
        AllowHeaders::list(headers)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials))
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|value| value.trim() == WILDCARD)
}

fn parse_all<T>(
    values: &[String],
    key: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, ConfigError> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            parse(value).map_err(|reason| ConfigError::InvalidValue {
                env_var: to_env_var(key),
                reason: format!("{value:?}: {reason}"),
            })
        })
        .collect()
}
