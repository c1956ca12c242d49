//! Runtime configuration.

/// Default prompt, also used in echoed batch lines.
pub const DEFAULT_PROMPT: &str = ">> ";

/// How a session presents itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Echo each input line as `[   n] >> text` before its output.
    pub echo: bool,
    /// Prompt shown by the REPL and embedded in echoed lines.
    pub prompt: String,
    /// Dump the normalized query before each response.
    pub parse_dump: bool,
    /// Show the welcome banner when the REPL starts.
    pub banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

impl RuntimeConfig {
    /// Settings for a terminal: prompt and banner, no echo.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            echo: false,
            prompt: DEFAULT_PROMPT.to_string(),
            parse_dump: false,
            banner: true,
        }
    }

    /// Settings for files: every line echoed, no banner.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            echo: true,
            banner: false,
            ..Self::interactive()
        }
    }

    /// Sets whether input lines are echoed.
    #[must_use]
    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets whether normalized queries are dumped.
    #[must_use]
    pub const fn with_parse_dump(mut self, parse_dump: bool) -> Self {
        self.parse_dump = parse_dump;
        self
    }

    /// Sets whether the banner is shown.
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
