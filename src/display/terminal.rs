//! Color support detection

use std::io::IsTerminal;

/// Whether stdout should get styled output
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Decide on colors from the environment and whether stdout is a TTY
///
/// `NO_COLOR` (https://no-color.org/) wins over `CLICOLOR_FORCE`, which
/// wins over `CLICOLOR=0`.
fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_tty_decides_by_default() {
        assert!(colors_enabled(env(&[]), true));
        assert!(!colors_enabled(env(&[]), false));
    }

    #[test]
    fn test_no_color_disables() {
        assert!(!colors_enabled(env(&[("NO_COLOR", "1")]), true));
        // Any value counts, even empty
        assert!(!colors_enabled(env(&[("NO_COLOR", "")]), true));
    }

    #[test]
    fn test_clicolor_force_enables_when_piped() {
        assert!(colors_enabled(env(&[("CLICOLOR_FORCE", "1")]), false));
        assert!(!colors_enabled(env(&[("CLICOLOR_FORCE", "0")]), false));
    }

    #[test]
    fn test_no_color_overrides_force() {
        let vars = env(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert!(!colors_enabled(vars, true));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!colors_enabled(env(&[("CLICOLOR", "0")]), true));
        assert!(colors_enabled(env(&[("CLICOLOR", "1")]), true));
    }
}
