use http::uri::Scheme;

/// The service endpoint that signed requests will be issued against.
///
/// The environment only contributes the default `Host` header; the crate
/// never opens connections itself. Builders hold it behind an [`Arc`] so one
/// environment can back any number of request builders.
///
/// [`Arc`]: std::sync::Arc
#[derive(Clone, Debug)]
pub struct Environment {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
}

impl Environment {
    /// Create an environment for the given scheme and host.
    ///
    /// `port` is the explicit port to reach the service on; `None` means the
    /// scheme default (80 for `http`, 443 for `https`).
    pub fn new(scheme: Scheme, host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// The URI scheme of the service.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// The host name of the service.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port of the service, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The default port for the environment's scheme.
    pub fn default_port(&self) -> u16 {
        if self.scheme == Scheme::HTTPS {
            443
        } else {
            80
        }
    }

    /// The `Host` header value for this environment.
    ///
    /// The port is appended only when it differs from the scheme default,
    /// unless `force_port` is set, in which case any explicit port is always
    /// included.
    pub fn host_header(&self, force_port: bool) -> String {
        match self.port {
            Some(port) if force_port || port != self.default_port() => {
                format!("{}:{}", self.host, port)
            }
            _ => self.host.clone(),
        }
    }
}

impl Default for Environment {
    /// The production SolarNetwork API endpoint.
    fn default() -> Self {
        Self::new(Scheme::HTTPS, "data.solarnetwork.net", None)
    }
}
