//! pactgen CLI entrypoint
//! Parses command-line arguments and prints generator fragments built by the core library.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::{bail, Context};
use clap::Parser;
use pactgen_core::{
    builders, Config, Generator, GeneratorKind, GeneratorSet, OutputFormat, SpecVersion,
    UuidFormat,
};
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pactgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (YAML, or TOML when ending in .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Target contract spec version (v3 or v4), overrides the config file
    #[arg(long, global = true)]
    spec_version: Option<SpecVersion>,
    /// Print JSON on a single line
    #[arg(long, global = true, conflicts_with = "pretty")]
    compact: bool,
    /// Pretty-print JSON
    #[arg(long, global = true)]
    pretty: bool,
    /// Print YAML instead of JSON
    #[arg(long, global = true)]
    yaml: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List every generator type and the spec version that introduced it
    Kinds,
    /// Build a single generator fragment
    New {
        /// Generator type tag, e.g. RandomInt or MockServerURL
        kind: GeneratorKind,
        /// Lower bound (RandomInt)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        /// Upper bound (RandomInt)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        /// Number of digits (RandomDecimal, RandomHexadecimal)
        #[arg(long)]
        digits: Option<i64>,
        /// String length (RandomString)
        #[arg(long)]
        size: Option<i64>,
        /// Regular expression (Regex, MockServerURL)
        #[arg(long)]
        regex: Option<String>,
        /// Date/time pattern (Date, Time, DateTime) or UUID format (Uuid)
        #[arg(long)]
        format: Option<String>,
        /// Provider state expression (ProviderState)
        #[arg(long)]
        expression: Option<String>,
        /// Example URL (MockServerURL)
        #[arg(long)]
        example: Option<String>,
    },
    /// Render a generator set document (JSON or YAML) to its wire form
    Render {
        /// Path to the generator set
        file: PathBuf,
    },
}

/// Flags of the `new` subcommand
struct NewArgs {
    min: Option<i64>,
    max: Option<i64>,
    digits: Option<i64>,
    size: Option<i64>,
    regex: Option<String>,
    format: Option<String>,
    expression: Option<String>,
    example: Option<String>,
}

impl NewArgs {
    fn supplied(&self) -> Vec<&'static str> {
        [
            ("min", self.min.is_some()),
            ("max", self.max.is_some()),
            ("digits", self.digits.is_some()),
            ("size", self.size.is_some()),
            ("regex", self.regex.is_some()),
            ("format", self.format.is_some()),
            ("expression", self.expression.is_some()),
            ("example", self.example.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    fn build(self, kind: GeneratorKind) -> anyhow::Result<Generator> {
        let accepted = accepted_flags(kind);
        for flag in self.supplied() {
            if !accepted.contains(&flag) {
                tracing::warn!("--{flag} is not used by {kind} generators, ignoring it");
            }
        }

        let generator = match kind {
            GeneratorKind::RandomInt => builders::random_int(self.min, self.max),
            GeneratorKind::RandomDecimal => builders::random_decimal(self.digits),
            GeneratorKind::RandomHexadecimal => builders::random_hexadecimal(self.digits),
            GeneratorKind::RandomString => builders::random_string(self.size),
            GeneratorKind::Regex => builders::regex(required(kind, "regex", self.regex)?),
            GeneratorKind::Uuid => {
                let format = self
                    .format
                    .as_deref()
                    .map(str::parse::<UuidFormat>)
                    .transpose()
                    .context("Invalid --format for Uuid")?;
                builders::uuid(format)
            }
            GeneratorKind::Date => builders::date(required(kind, "format", self.format)?),
            GeneratorKind::Time => builders::time(required(kind, "format", self.format)?),
            GeneratorKind::DateTime => builders::date_time(required(kind, "format", self.format)?),
            GeneratorKind::RandomBoolean => builders::random_boolean(),
            GeneratorKind::ProviderState => builders::provider_state(self.expression.as_deref()),
            GeneratorKind::MockServerUrl => {
                builders::mock_server_url(self.regex.as_deref(), self.example.as_deref())
            }
        };
        Ok(generator)
    }
}

fn accepted_flags(kind: GeneratorKind) -> &'static [&'static str] {
    match kind {
        GeneratorKind::RandomInt => &["min", "max"],
        GeneratorKind::RandomDecimal | GeneratorKind::RandomHexadecimal => &["digits"],
        GeneratorKind::RandomString => &["size"],
        GeneratorKind::Regex => &["regex"],
        GeneratorKind::Uuid | GeneratorKind::Date | GeneratorKind::Time | GeneratorKind::DateTime => {
            &["format"]
        }
        GeneratorKind::RandomBoolean => &[],
        GeneratorKind::ProviderState => &["expression"],
        GeneratorKind::MockServerUrl => &["regex", "example"],
    }
}

fn required(kind: GeneratorKind, flag: &str, value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => bail!("{kind} generators require --{flag}"),
    }
}

/// Merge the config file (if any) with command-line overrides
async fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(version) = cli.spec_version {
        config.spec_version = version;
    }
    if cli.pretty {
        config.pretty = true;
    }
    if cli.compact {
        config.pretty = false;
    }
    if cli.yaml {
        config.output_format = OutputFormat::Yaml;
    }
    Ok(config)
}

fn render(value: &JsonValue, config: &Config) -> anyhow::Result<String> {
    let rendered = match config.output_format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
    };
    Ok(rendered)
}

/// One line per generator kind: tag, then the spec version introducing it
fn kinds_table() -> String {
    GeneratorKind::all()
        .map(|kind| format!("{:<20}{}\n", kind.as_str(), kind.spec_version()))
        .collect()
}

/// Warning text when `set` holds generators the target version cannot carry
fn unsupported_warning(set: &GeneratorSet, config: &Config) -> Option<String> {
    let unsupported = set.unsupported_by(config.spec_version);
    if unsupported.is_empty() {
        return None;
    }
    Some(format!(
        "Generators {} need spec {}, target is {}",
        unsupported.join(", "),
        set.minimum_spec_version(),
        config.spec_version
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr so stdout carries only fragments
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let config = resolve_config(&cli).await?;
    tracing::debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Kinds => {
            print!("{}", kinds_table());
        }
        Commands::New {
            kind,
            min,
            max,
            digits,
            size,
            regex,
            format,
            expression,
            example,
        } => {
            let args = NewArgs {
                min,
                max,
                digits,
                size,
                regex,
                format,
                expression,
                example,
            };
            let generator = args.build(kind)?;
            if !generator.is_supported_by(config.spec_version) {
                tracing::warn!(
                    "{kind} generator as built needs spec {}, target is {}",
                    generator.spec_version(),
                    config.spec_version
                );
            }
            println!("{}", render(&generator.to_json(), &config)?);
        }
        Commands::Render { file } => {
            let set = GeneratorSet::from_file(&file)
                .await
                .with_context(|| format!("Failed to load generator set {}", file.display()))?;
            if let Some(warning) = unsupported_warning(&set, &config) {
                tracing::warn!("{warning}");
            }
            println!("{}", render(&set.to_json(), &config)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    async fn write_config(dir: &tempfile::TempDir) -> anyhow::Result<PathBuf> {
        let path = dir.path().join("pactgen.yaml");
        tokio::fs::write(&path, "spec_version: V3\npretty: false\n").await?;
        Ok(path)
    }

    fn no_args() -> NewArgs {
        NewArgs {
            min: None,
            max: None,
            digits: None,
            size: None,
            regex: None,
            format: None,
            expression: None,
            example: None,
        }
    }

    #[test]
    fn test_new_random_int() -> anyhow::Result<()> {
        let args = NewArgs {
            min: Some(1),
            max: Some(10),
            ..no_args()
        };
        let generator = args.build(GeneratorKind::RandomInt)?;
        assert_eq!(
            generator.to_json(),
            json!({"pact:generator:type": "RandomInt", "min": 1, "max": 10})
        );
        Ok(())
    }

    #[test]
    fn test_new_ignores_unrelated_flags() -> anyhow::Result<()> {
        let args = NewArgs {
            size: Some(4),
            expression: Some("ignored".into()),
            ..no_args()
        };
        let generator = args.build(GeneratorKind::RandomString)?;
        assert_eq!(generator, builders::random_string(Some(4)));
        Ok(())
    }

    #[test]
    fn test_new_requires_format_for_date() {
        let err = no_args().build(GeneratorKind::Date).unwrap_err();
        assert!(err.to_string().contains("--format"));
    }

    #[test]
    fn test_new_uuid_format() -> anyhow::Result<()> {
        let args = NewArgs {
            format: Some("URN".into()),
            ..no_args()
        };
        assert_eq!(
            args.build(GeneratorKind::Uuid)?,
            builders::uuid(Some(UuidFormat::Urn))
        );

        let bad = NewArgs {
            format: Some("braced".into()),
            ..no_args()
        };
        assert!(bad.build(GeneratorKind::Uuid).is_err());
        Ok(())
    }

    #[test]
    fn test_cli_parses_kind_tag() {
        let cli = Cli::try_parse_from(["pactgen", "new", "MockServerURL", "--example", "http://x/"])
            .unwrap();
        match cli.command {
            Commands::New { kind, example, .. } => {
                assert_eq!(kind, GeneratorKind::MockServerUrl);
                assert_eq!(example.as_deref(), Some("http://x/"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["pactgen", "new", "randomint"]).is_err());
    }

    #[test]
    fn test_render_formats() -> anyhow::Result<()> {
        let value = builders::random_boolean().to_json();
        let mut config = Config::default();
        config.pretty = false;
        assert_eq!(
            render(&value, &config)?,
            r#"{"pact:generator:type":"RandomBoolean"}"#
        );

        config.output_format = OutputFormat::Yaml;
        let yaml = render(&value, &config)?;
        assert_eq!(serde_yaml::from_str::<JsonValue>(&yaml)?, value);
        Ok(())
    }

    #[tokio::test]
    async fn test_config_file_without_overrides() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_config(&dir).await?;
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["pactgen", "--config", path_arg.as_str(), "kinds"])?;
        let config = resolve_config(&cli).await?;
        assert_eq!(config.spec_version, SpecVersion::V3);
        assert!(!config.pretty);
        assert_eq!(config.output_format, OutputFormat::Json);
        Ok(())
    }

    #[tokio::test]
    async fn test_flags_override_config_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_config(&dir).await?;
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "pactgen",
            "kinds",
            "--config",
            path_arg.as_str(),
            "--spec-version",
            "v4",
            "--pretty",
            "--yaml",
        ])?;
        let config = resolve_config(&cli).await?;
        assert_eq!(config.spec_version, SpecVersion::V4);
        assert!(config.pretty);
        assert_eq!(config.output_format, OutputFormat::Yaml);

        let cli = Cli::try_parse_from(["pactgen", "--compact", "kinds"])?;
        assert!(!resolve_config(&cli).await?.pretty);

        assert!(Cli::try_parse_from(["pactgen", "--pretty", "--compact", "kinds"]).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from(["pactgen", "--config", "/nonexistent/pactgen.yaml", "kinds"])
            .unwrap();
        let err = resolve_config(&cli).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[tokio::test]
    async fn test_render_warns_for_v4_members_under_v3_config() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config_path = write_config(&dir).await?;
        let set_path = dir.path().join("generators.yaml");
        tokio::fs::write(
            &set_path,
            "\"$.id\":\n  \"pact:generator:type\": Uuid\n\"$.href\":\n  \"pact:generator:type\": MockServerURL\n",
        )
        .await?;

        let config_arg = config_path.to_string_lossy().to_string();
        let set_arg = set_path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "pactgen",
            "--config",
            config_arg.as_str(),
            "render",
            set_arg.as_str(),
        ])?;
        let config = resolve_config(&cli).await?;
        let set = GeneratorSet::from_file(&set_path).await?;

        let warning = unsupported_warning(&set, &config).expect("V3 target should warn");
        assert!(warning.contains("$.href"));
        assert!(!warning.contains("$.id"));
        assert!(warning.contains("V4"));

        let v4 = Config::new(SpecVersion::V4);
        assert_eq!(unsupported_warning(&set, &v4), None);
        Ok(())
    }

    #[test]
    fn test_kinds_table() {
        let table = kinds_table();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("RandomInt"));
        assert!(lines[0].ends_with("V3"));
        assert!(lines[11].starts_with("MockServerURL"));
        assert!(lines[11].ends_with("V4"));
    }
}
