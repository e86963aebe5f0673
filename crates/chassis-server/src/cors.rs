use chassis_config::CorsConfig;
use http::header::HeaderName;
use http::Method;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    layer = if config.origins.is_wildcard() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<_> = config
            .origins
            .values()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    };

    // Methods
    layer = if config.methods.is_wildcard() {
        layer.allow_methods(AllowMethods::any())
    } else {
        let methods: Vec<Method> = config
            .methods
            .values()
            .iter()
            .filter_map(|method| method.parse().ok())
            .collect();
        layer.allow_methods(methods)
    };

    // Headers
    layer = if config.headers.is_wildcard() {
        layer.allow_headers(AllowHeaders::any())
    } else {
        let headers: Vec<HeaderName> = config
            .headers
            .values()
            .iter()
            .filter_map(|header| header.parse().ok())
            .collect();
        layer.allow_headers(headers)
    };

    // Max age
    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
