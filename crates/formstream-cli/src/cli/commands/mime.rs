//! Mime command: show how filenames resolve.

use anyhow::Result;
use formstream_core::config::FormstreamConfig;
use formstream_core::MimetypeResolver;

/// One `filename<TAB>type` line per input; `-` when the type is unknown.
pub fn describe(cfg: &FormstreamConfig, filenames: &[String]) -> Vec<String> {
    let resolver = cfg.mimetypes();
    filenames
        .iter()
        .map(|f| format!("{}\t{}", f, resolver.resolve_filename(f).unwrap_or("-")))
        .collect()
}

pub fn run_mime(cfg: &FormstreamConfig, filenames: &[String]) -> Result<()> {
    for line in describe(cfg, filenames) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_known_and_unknown() {
        let mut cfg = FormstreamConfig::default();
        cfg.mimetypes.insert("zzz".into(), "custom/type".into());
        let lines = describe(
            &cfg,
            &["a/b/httplug.png".to_string(), "x.zzz".to_string(), "README".to_string()],
        );
        assert_eq!(
            lines,
            ["a/b/httplug.png\timage/png", "x.zzz\tcustom/type", "README\t-"]
        );
    }
}
