//! Load `.sessionbuilder.toml` from the crawl root (CLI only). Lib callers pass [`CrawlOpts`](crate::CrawlOpts) directly.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::types::Mode;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct SettingsToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    raw: Option<bool>,
    make: Option<bool>,
    output: Option<String>,
    verbose: Option<bool>,
    follow_links: Option<bool>,
    strict: Option<bool>,
}

/// Load the settings file from `dir`. `Ok(None)` when there is none; an unreadable or
/// unparsable file is an error for the caller to report once logging is up.
pub fn load_settings_toml(dir: &Path) -> anyhow::Result<Option<SettingsToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(anyhow::Error::new(e).context(path.display().to_string())),
    };
    let file = parse_settings_toml(&s).with_context(|| path.display().to_string())?;
    Ok(Some(file))
}

pub(crate) fn parse_settings_toml(s: &str) -> Result<SettingsToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
/// A relative `output` is resolved against `root`.
pub fn apply_file_to_opts(file: &SettingsToml, root: &Path, opts: &mut Opts) {
    let sec = &file.settings;
    if let Some(raw) = sec.raw {
        opts.mode = Mode::from_raw_flag(raw);
    }
    apply_file_opt!(sec, opts, make => make_defaults);
    if let Some(ref p) = sec.output {
        let p = PathBuf::from(p);
        opts.output = Some(if p.is_relative() { root.join(p) } else { p });
    }
    apply_file_opt!(sec, opts, verbose => verbose);
    apply_file_opt!(sec, opts, follow_links => follow_links);
    apply_file_opt!(sec, opts, strict => strict);
}
