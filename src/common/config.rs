/// Settings for a verification run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Verbose logging of both passes
    pub debug: bool,
    /// Refuse to read source files larger than this many bytes
    pub max_source_bytes: Option<u64>,
}

impl Config {
    /// Defaults, with `debug` switched on when `SJCHECK_DEBUG` is set
    pub fn from_env() -> Self {
        Self {
            debug: std::env::var_os(super::consts::DEBUG_ENV).is_some(),
            ..Self::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_max_source_bytes(mut self, limit: u64) -> Self {
        self.max_source_bytes = Some(limit);
        self
    }
}
