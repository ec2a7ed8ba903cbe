/*
[INPUT]:  Optional YAML config file, TASK_DASHBOARD__* environment, task seed files
[OUTPUT]: Parsed DashboardConfig and seed task lists
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use task_dashboard_adapter::{ClientConfig, DEFAULT_BASE_URL, RequestMode, Task};

const ENV_PREFIX: &str = "TASK_DASHBOARD";
const APP_DIR: &str = "task-dashboard";

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Older servers do not understand the `mode` query parameter
    #[serde(default = "default_true")]
    pub send_mode: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            send_mode: true,
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Initial request mode: heuristic, llm or hybrid
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Where result files are written; falls back to the user's download dir
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_mode() -> String {
    RequestMode::default().as_str().to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DashboardConfig {
    /// Load configuration from an explicit file (required) or the user
    /// config dir (optional), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as `load`, reading overrides from `env` instead of the process
    /// environment when given.
    fn load_with_env(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self> {
        let file = match path {
            Some(path) => Some(config::File::from(path).required(true)),
            None => default_config_path().map(|path| config::File::from(path).required(false)),
        };

        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file.format(config::FileFormat::Yaml));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn initial_mode(&self) -> Result<RequestMode> {
        self.ui.mode.parse::<RequestMode>().map_err(|err| anyhow!(err))
    }

    fn validate(&self) -> Result<()> {
        self.initial_mode().context("ui.mode")?;
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow!("api.base_url must not be empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(anyhow!("api.timeout_secs must be above zero"));
        }
        if self.ui.tick_ms == 0 {
            return Err(anyhow!("ui.tick_ms must be above zero"));
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    List(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

/// Load a task list from YAML or JSON, either a bare list or `{ tasks: [...] }`
pub fn load_tasks_file(path: &Path) -> Result<Vec<Task>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read tasks file {}", path.display()))?;
    parse_tasks(&content).with_context(|| format!("parse tasks file {}", path.display()))
}

pub fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let seed: SeedFile = serde_yaml::from_str(content)?;
    Ok(match seed {
        SeedFile::List(tasks) => tasks,
        SeedFile::Wrapped { tasks } => tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("task-dashboard-config-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.client_config().timeout, Duration::from_secs(30));
        assert!(config.api.send_mode);
        assert_eq!(config.initial_mode().unwrap(), RequestMode::Hybrid);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let path = write_config(
            "partial",
            "api:\n  base_url: http://localhost:7860\nui:\n  mode: LLM\n",
        );
        let config = DashboardConfig::load_with_env(Some(&path), Some(env(&[]))).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:7860");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.initial_mode().unwrap(), RequestMode::Llm);
        assert_eq!(config.ui.tick_ms, 250);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let path = write_config("turbo", "ui:\n  mode: turbo\n");
        let err = DashboardConfig::load_with_env(Some(&path), Some(env(&[]))).unwrap_err();
        assert!(format!("{err:#}").contains("turbo"));
    }

    #[test]
    fn test_load_from_file() {
        let path = write_config(
            "file",
            "api:\n  timeout_secs: 5\nexport:\n  download_dir: /tmp/results\n",
        );

        let config = DashboardConfig::load_with_env(Some(&path), Some(env(&[]))).unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(
            config.export.resolved_download_dir(),
            PathBuf::from("/tmp/results")
        );
    }

    #[test]
    fn test_environment_overrides_config_file() {
        let path = write_config(
            "env",
            "api:\n  base_url: http://file.local:1\n  timeout_secs: 5\nui:\n  mode: heuristic\nlogging:\n  level: warn\n",
        );
        let overrides = env(&[
            ("TASK_DASHBOARD__API__BASE_URL", "http://env.local:1"),
            ("TASK_DASHBOARD__API__TIMEOUT_SECS", "7"),
            ("TASK_DASHBOARD__UI__MODE", "llm"),
            ("TASK_DASHBOARD__LOGGING__LEVEL", "debug"),
            ("OTHER_APP__API__BASE_URL", "http://ignored.local"),
        ]);

        let config = DashboardConfig::load_with_env(Some(&path), Some(overrides)).unwrap();
        assert_eq!(config.api.base_url, "http://env.local:1");
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.initial_mode().unwrap(), RequestMode::Llm);
        assert_eq!(config.logging.level, "debug");
        // Untouched keys keep the file value or the default.
        assert_eq!(config.api.connect_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_environment_override_is_rejected() {
        let path = write_config("env-bad", "ui:\n  mode: hybrid\n");
        let overrides = env(&[("TASK_DASHBOARD__UI__MODE", "turbo")]);
        let err = DashboardConfig::load_with_env(Some(&path), Some(overrides)).unwrap_err();
        assert!(format!("{err:#}").contains("turbo"));
    }

    #[test]
    fn test_seed_without_effort_uses_default() {
        let tasks = parse_tasks("- title: Call supplier\n  urgency: 4\n  impact: 2\n").unwrap();
        assert_eq!(tasks, vec![Task::new("Call supplier", 4, 2, 1.0)]);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("task-dashboard-does-not-exist.yaml");
        assert!(DashboardConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_parse_tasks_accepts_both_shapes() {
        let list = parse_tasks(
            "- title: Plan sprint\n  urgency: 4\n  impact: 3\n  effort_hours: 2\n",
        )
        .unwrap();
        assert_eq!(list, vec![Task::new("Plan sprint", 4, 3, 2.0)]);

        let wrapped = parse_tasks(
            r#"{"tasks": [{"title": "Review PR", "urgency": 2, "impact": 2, "effort_hours": 0.5}]}"#,
        )
        .unwrap();
        assert_eq!(wrapped, vec![Task::new("Review PR", 2, 2, 0.5)]);
    }
}
