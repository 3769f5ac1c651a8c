use std::env;

use log::warn;

pub const DEFAULT_PROMPT: &str = "t$ ";

const TRUE_ARGS: [&str; 9] = [
    "true", "t", "enable", "enabled", "yes", "y", "on", "some", "1",
];
const FALSE_ARGS: [&str; 9] = [
    "false", "f", "disable", "disabled", "no", "n", "off", "none", "0",
];

// Represents any settings for the shell, all of which can be overridden through environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    // The text printed before every line of input (TSH_PROMPT)
    pub prompt: String,
    // Whether the prompt and diagnostics are colored on a terminal (TSH_COLOR, NO_COLOR)
    pub colored_output: bool,
    // Whether to use the line editor when attached to a terminal (TSH_LINE_EDITING)
    pub line_editing: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            colored_output: true,
            line_editing: true,
        }
    }
}

impl Configuration {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from the defaults, overriding every setting the lookup knows a value for
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();

        if let Some(prompt) = lookup("TSH_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(color) = lookup("TSH_COLOR").and_then(|v| parse_flag("TSH_COLOR", &v)) {
            config.colored_output = color;
        }

        // * https://no-color.org asks for any value, even an empty one, to disable color
        if lookup("NO_COLOR").is_some() {
            config.colored_output = false;
        }

        if let Some(editing) =
            lookup("TSH_LINE_EDITING").and_then(|v| parse_flag("TSH_LINE_EDITING", &v))
        {
            config.line_editing = editing;
        }

        config
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    let normalized = value.trim().to_lowercase();

    if TRUE_ARGS.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSE_ARGS.contains(&normalized.as_str()) {
        Some(false)
    } else {
        warn!("Ignoring {}={:?}, expected a true or false value", key, value);
        None
    }
}
