use anyhow::{Context, Result};
use directories::BaseDirs;
use log::debug;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::keywords::Keywords;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the durable JSON stores live.
    pub data_dir: PathBuf,
    /// Session-scoped directory that receives the `_backup` mirror files.
    pub session_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Display format for dates. Default is "%d/%m/%Y" (e.g. 19/08/2025).
    pub date_format: String,
    /// Accepted formats for dates typed on the command line.
    pub input_date_formats: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    session_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    /// Optional table:
    /// [synonyms]
    /// hoje = "today"
    /// ontem = "yesterday"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);
        let session_dir = file_config
            .session_dir
            .unwrap_or_else(Self::default_session_dir);
        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%d/%m/%Y".to_string());
        let input_date_formats = file_config
            .input_date_formats
            .unwrap_or_else(Self::default_input_formats);

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Ok(Self {
            data_dir,
            session_dir,
            editor: file_config.editor,
            date_format,
            input_date_formats,
        })
    }

    fn default_input_formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]
    }

    /// Default durable root: `{data_dir}/sit`
    /// - macOS:   `~/Library/Application Support/sit`
    /// - Linux:   `$XDG_DATA_HOME/sit` or `~/.local/share/sit`
    /// - Windows: `%APPDATA%\sit`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("sit");
            p
        } else {
            PathBuf::from("./sit")
        }
    }

    /// Default mirror root: the platform runtime dir when there is one
    /// (`$XDG_RUNTIME_DIR/sit`, cleared at session end), otherwise `{tmp}/sit`.
    fn default_session_dir() -> PathBuf {
        if let Some(dir) = BaseDirs::new().and_then(|base| {
            base.runtime_dir()
                .map(|runtime| runtime.join("sit"))
        }) {
            dir
        } else {
            std::env::temp_dir().join("sit")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("sit").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("sit").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            debug!("using config file {}", path.display());
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with current canonical Keyword (eg. "today").
    /// Lowercases both alias and target for case-insensitive behavior.
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::keywords::{Keyword, Keywords};
    use std::path::Path;
    use std::path::PathBuf;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(root: PathBuf) -> Config {
        Config {
            data_dir: root.join("data"),
            session_dir: root.join("session"),
            editor: None,
            date_format: "%d/%m/%Y".to_string(),
            input_date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("sit").join("config.toml");
            let expected_native = b.config_dir().join("sit").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_dirs_and_formats() {
        let toml = r#"
            data_dir = "/tmp/my-sit"
            session_dir = "/tmp/my-sit-session"
            date_format = "%Y-%m-%d"
            input_date_formats = ["%d-%m-%Y"]
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.data_dir.as_deref(), Some(Path::new("/tmp/my-sit")));
        assert_eq!(
            fc.session_dir.as_deref(),
            Some(Path::new("/tmp/my-sit-session"))
        );
        assert_eq!(fc.date_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(fc.input_date_formats, Some(vec!["%d-%m-%Y".to_string()]));
    }

    #[test]
    fn parse_file_accepts_synonyms_and_extends_registry() {
        let toml = r#"
            data_dir = "/tmp/my-sit"

            [synonyms]
            hoje = "today"
            ONTEM = "yesterday"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        super::Config::load_synonyms(&fc.synonyms);

        assert!(Keywords::matches(Keyword::Today, "hoje"));
        assert!(Keywords::matches(Keyword::Yesterday, "ontem"));
    }

    #[test]
    fn parse_file_no_accepts_canonical_synonyms() {
        let toml = r#"
            data_dir = "/tmp/my-sit"

            [synonyms]
            today = "yesterday"
            htj = "today"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        super::Config::load_synonyms(&fc.synonyms);

        assert!(!Keywords::matches(Keyword::Yesterday, "today"));
        assert!(Keywords::matches(Keyword::Today, "htj"));
    }
}
