//! API utilities for reaching the calculator services
//!
//! The client has no configuration file: the host is picked from the
//! platform category and the two services sit on fixed ports of that host.

/// Port of the calculation service
pub const CALCULATOR_PORT: u16 = 5000;
/// Port of the string concepts service
pub const STRING_CONCEPTS_PORT: u16 = 5001;

/// Platform category that decides which host the services are reached on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android emulator: the development machine is `10.0.2.2`
    Android,
    Other,
}

impl Platform {
    /// Detect the platform from the browser's user agent
    ///
    /// Falls back to [`Platform::Other`] when no window is available.
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| Self::from_user_agent(&ua))
            .unwrap_or(Platform::Other)
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    /// Base address (scheme + host, no port) of both services
    pub fn base_address(&self) -> &'static str {
        match self {
            Platform::Android => "http://10.0.2.2",
            Platform::Other => "http://127.0.0.1",
        }
    }
}

/// Full URLs of both endpoints for one base address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub calculate: String,
    pub string_concepts: String,
}

impl Endpoints {
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::Endpoints;
    ///
    /// let endpoints = Endpoints::for_base("http://127.0.0.1");
    /// assert_eq!(endpoints.calculate, "http://127.0.0.1:5000/calculate");
    /// ```
    pub fn for_base(base: &str) -> Self {
        Self {
            calculate: format!("{}:{}/calculate", base, CALCULATOR_PORT),
            string_concepts: format!("{}:{}/stringconcepts", base, STRING_CONCEPTS_PORT),
        }
    }
}
