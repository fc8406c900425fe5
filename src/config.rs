use crate::DEFAULT_HOST;
use crate::DEFAULT_MODEL_PATH;
use crate::DEFAULT_PORT;
use crate::ui::UiVariant;
use clap::Parser;
use std::path::PathBuf;

/// Server settings. Every flag falls back to an environment variable and
/// then to the defaults of the original single-host deployment.
#[derive(Debug, Clone, Parser)]
#[command(name = "house-price", version, about = "Serve the California house price model")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// JSON model artifact to serve.
    #[arg(long = "model", env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
    /// HTTP worker threads; actix picks one per core when unset.
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
    /// How /ui presents the prediction.
    #[arg(long = "ui", env = "UI_VARIANT", value_enum, default_value_t = UiVariant::Gauge)]
    pub ui: UiVariant,
}

impl Config {
    pub fn addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn declared(id: &str) -> Vec<String> {
        Config::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .map(|arg| {
                arg.get_default_values()
                    .iter()
                    .map(|v| v.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn declared_defaults_match_original_deployment() {
        assert_eq!(declared("host"), vec!["0.0.0.0"]);
        assert_eq!(declared("port"), vec!["10000"]);
        assert_eq!(declared("model"), vec!["house_model.json"]);
        assert_eq!(declared("ui"), vec!["gauge"]);
        assert!(declared("workers").is_empty());
    }

    #[test]
    fn no_flags_binds_the_fixed_address() {
        let config = Config::try_parse_from(["house-price"]).unwrap();
        // fields only reflect defaults when their variable is not exported
        let unset = |var: &str| std::env::var_os(var).is_none();
        if unset("HOST") {
            assert_eq!(config.host, "0.0.0.0");
        }
        if unset("PORT") {
            assert_eq!(config.port, 10000);
        }
        if unset("HOST") && unset("PORT") {
            assert_eq!(config.addr(), ("0.0.0.0", 10000));
        }
        if unset("MODEL_PATH") {
            assert_eq!(config.model, PathBuf::from("house_model.json"));
        }
        if unset("WORKERS") {
            assert_eq!(config.workers, None);
        }
        if unset("UI_VARIANT") {
            assert_eq!(config.ui, UiVariant::Gauge);
        }
    }

    #[test]
    fn flags_override_everything() {
        let config = Config::try_parse_from([
            "house-price",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--model",
            "models/forest.json",
            "--workers",
            "2",
            "--ui",
            "plain",
        ])
        .unwrap();
        assert_eq!(config.addr(), ("127.0.0.1", 8080));
        assert_eq!(config.model, PathBuf::from("models/forest.json"));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.ui, UiVariant::Plain);
    }

    #[test]
    fn help_and_bad_flags_stop_at_parse() {
        let help = Config::try_parse_from(["house-price", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let bad = Config::try_parse_from(["house-price", "--verbose"]).unwrap_err();
        assert_eq!(bad.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_unknown_ui_variant() {
        assert!(Config::try_parse_from(["house-price", "--ui", "dial"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Config::try_parse_from(["house-price", "--port", "70000"]).is_err());
    }
}
