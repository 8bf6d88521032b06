use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::builder::BuildLimits;
use crate::mimetype::CustomMimetypes;

/// Global configuration loaded from `~/.config/formstream/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormstreamConfig {
    /// Size of each read when copying a part body into the output.
    pub chunk_size_bytes: usize,
    /// Output bytes kept in memory before the body spills to a temp file.
    pub spool_threshold_bytes: usize,
    /// Extra `extension = "mime/type"` mappings, checked before the built-in table.
    #[serde(default)]
    pub mimetypes: BTreeMap<String, String>,
}

impl Default for FormstreamConfig {
    fn default() -> Self {
        let limits = BuildLimits::default();
        Self {
            chunk_size_bytes: limits.chunk_size,
            spool_threshold_bytes: limits.spool_threshold,
            mimetypes: BTreeMap::new(),
        }
    }
}

impl FormstreamConfig {
    /// Build limits from this config; a zero chunk size means the default.
    pub fn limits(&self) -> BuildLimits {
        let defaults = BuildLimits::default();
        BuildLimits {
            chunk_size: if self.chunk_size_bytes == 0 {
                defaults.chunk_size
            } else {
                self.chunk_size_bytes
            },
            spool_threshold: self.spool_threshold_bytes,
        }
    }

    /// Resolver with the configured mappings layered over the built-in table.
    pub fn mimetypes(&self) -> CustomMimetypes {
        CustomMimetypes::new(&self.mimetypes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("formstream")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FormstreamConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FormstreamConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FormstreamConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mimetype::MimetypeResolver;

    #[test]
    fn default_config_values() {
        let cfg = FormstreamConfig::default();
        assert_eq!(cfg.chunk_size_bytes, 1024 * 1024);
        assert_eq!(cfg.spool_threshold_bytes, 2 * 1024 * 1024);
        assert!(cfg.mimetypes.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FormstreamConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FormstreamConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.chunk_size_bytes, cfg.chunk_size_bytes);
        assert_eq!(parsed.spool_threshold_bytes, cfg.spool_threshold_bytes);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chunk_size_bytes = 4096
            spool_threshold_bytes = 65536

            [mimetypes]
            zzz = "custom/type"
            RAR = "test/test"
        "#;
        let cfg: FormstreamConfig = toml::from_str(toml).unwrap();
        let limits = cfg.limits();
        assert_eq!(limits.chunk_size, 4096);
        assert_eq!(limits.spool_threshold, 65536);

        let m = cfg.mimetypes();
        assert_eq!(m.resolve_extension("zzz"), Some("custom/type"));
        assert_eq!(m.resolve_extension("rar"), Some("test/test"));
        assert_eq!(m.resolve_extension("png"), Some("image/png"));
    }

    #[test]
    fn zero_chunk_size_falls_back() {
        let toml = r#"
            chunk_size_bytes = 0
            spool_threshold_bytes = 0
        "#;
        let cfg: FormstreamConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.limits().chunk_size, BuildLimits::default().chunk_size);
        assert_eq!(cfg.limits().spool_threshold, 0);
    }
}
