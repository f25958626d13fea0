use crate::config;

use super::cli::Cli;

/// Load settings, falling back to defaults when the config cannot be read or
/// is invalid. The returned message describes why defaults were used; it is
/// logged once the subscriber is installed.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the server from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

/// Layer command-line flags over loaded settings.
pub fn apply_cli(settings: &mut config::Settings, cli: &Cli) {
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    let roots = cli.scan_roots();
    if !roots.is_empty() {
        settings.library.roots = roots;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn cli_roots_replace_configured_roots() {
        let mut settings = config::Settings::default();
        settings.library.roots = vec![PathBuf::from("/from/config")];
        settings.server.port = 9000;

        let cli = Cli::try_parse_from(["cadenza", "/from/cli"]).unwrap();
        apply_cli(&mut settings, &cli);

        assert_eq!(settings.library.roots, vec![PathBuf::from("/from/cli")]);
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn empty_cli_keeps_configured_values() {
        let mut settings = config::Settings::default();
        settings.library.roots = vec![PathBuf::from("/from/config")];

        let cli = Cli::try_parse_from(["cadenza", "--port", "8181"]).unwrap();
        apply_cli(&mut settings, &cli);

        assert_eq!(settings.library.roots, vec![PathBuf::from("/from/config")]);
        assert_eq!(settings.server.port, 8181);
    }
}
