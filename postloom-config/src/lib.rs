//! Loader for workspace configuration with YAML + environment overlays.
//!
//! A `postloom.yaml` file describes the four provider integrations (search,
//! generator, translator, publisher) plus the selected post language.
//! `POSTLOOM_`-prefixed environment variables override file values, and
//! `${VAR}` placeholders inside any string are expanded recursively so keys
//! can stay out of the file.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level configuration for one Postloom session.
#[derive(Debug, Deserialize)]
pub struct PostloomConfig {
    pub version: Option<String>,
    /// Language the generated posts are written in.
    #[serde(default = "default_language")]
    pub language: String,
    pub search: SearchSettings,
    pub generator: ProviderSettings,
    pub translator: ProviderSettings,
    pub publisher: PublisherSettings,
}

fn default_language() -> String {
    "English".into()
}

/// Search provider (Serper-compatible) settings.
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    pub api_key: String,
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    /// Which vertical to query: general web results or news.
    #[serde(default)]
    pub mode: SearchModeSetting,
    #[serde(default = "default_result_count")]
    pub result_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchModeSetting {
    #[default]
    Search,
    News,
}

fn default_search_endpoint() -> String {
    "https://google.serper.dev".into()
}
fn default_result_count() -> u32 {
    10
}

/// The tag is `provider`; each variant carries its own endpoint default.
#[derive(Debug, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderSettings {
    Openai {
        model: String,
        api_key: String,
        #[serde(default = "default_temperature")]
        temperature: f32,
        #[serde(default = "default_openai_endpoint")]
        endpoint: String,
    },
    Sutra {
        model: String,
        api_key: String,
        #[serde(default = "default_temperature")]
        temperature: f32,
        #[serde(default = "default_sutra_endpoint")]
        endpoint: String,
    },
}

impl ProviderSettings {
    pub fn model(&self) -> &str {
        match self {
            Self::Openai { model, .. } | Self::Sutra { model, .. } => model,
        }
    }

    pub fn api_key(&self) -> &str {
        match self {
            Self::Openai { api_key, .. } | Self::Sutra { api_key, .. } => api_key,
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            Self::Openai { temperature, .. } | Self::Sutra { temperature, .. } => *temperature,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Openai { endpoint, .. } | Self::Sutra { endpoint, .. } => endpoint,
        }
    }
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".into()
}
fn default_sutra_endpoint() -> String {
    "https://api.two.ai/v2".into()
}
fn default_temperature() -> f32 {
    0.7
}

/// Publish automation provider settings.
#[derive(Debug, Deserialize)]
pub struct PublisherSettings {
    pub api_key: String,
    #[serde(default = "default_automation_endpoint")]
    pub endpoint: String,
    /// Account identity posts are created on behalf of (e.g. an author URN).
    pub author: String,
}

fn default_automation_endpoint() -> String {
    "https://backend.composio.dev/api".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct PostloomConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for PostloomConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PostloomConfigLoader {
    /// Start with sensible defaults: YAML file + `POSTLOOM_` env overrides.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("POSTLOOM").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use postloom_config::{PostloomConfigLoader, ProviderSettings};
    ///
    /// let cfg = PostloomConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "test"
    /// search:
    ///   api_key: "k1"
    /// generator:
    ///   provider: openai
    ///   model: "gpt-4"
    ///   api_key: "k2"
    /// translator:
    ///   provider: sutra
    ///   model: "sutra-v2"
    ///   api_key: "k3"
    /// publisher:
    ///   api_key: "k4"
    ///   author: "urn:li:person:abc"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.language, "English");
    /// assert_eq!(cfg.search.result_count, 10);
    /// assert!(matches!(cfg.translator, ProviderSettings::Sutra { .. }));
    /// assert_eq!(cfg.translator.endpoint(), "https://api.two.ai/v2");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    ///
    /// The loader combines YAML with `POSTLOOM_`-prefixed environment
    /// variables and expands `${VAR}` placeholders before materialising the
    /// typed structs.
    pub fn load(self) -> Result<PostloomConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Convert to serde_json::Value first so ${VAR} expansion can walk
        // every string regardless of where it sits in the tree.
        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: PostloomConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use temp_env;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("SERPER_KEY", Some("abc123"), || {
            let mut v = json!("key-${SERPER_KEY}");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("key-abc123"));
        });
    }

    #[test]
    fn expands_in_array_and_object() {
        temp_env::with_vars(
            [("POST_LANG", Some("Hindi")), ("POST_MODE", Some("news"))],
            || {
                let mut v = json!([
                    "lang-$POST_LANG",
                    { "mode": "${POST_MODE}" },
                    7,
                    false,
                    null
                ]);
                expand_env_in_value(&mut v);
                assert_eq!(v, json!(["lang-Hindi", { "mode": "news" }, 7, false, null]));
            },
        );
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("INNER", Some("core")),
                ("MIDDLE", Some("mid-${INNER}")),
                ("OUTER", Some("start-${MIDDLE}-end")),
            ],
            || {
                let mut v = json!("X=${OUTER}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=start-mid-core-end"));
            },
        );
    }

    #[test]
    fn stops_on_cycles_and_leaves_value_reasonable() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            // Only requirement is termination under the depth cap.
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${DOES_NOT_EXIST}"));
    }
}
