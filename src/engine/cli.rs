//! CLI command handler: resolve options (defaults < settings file < flags), then run.

use anyhow::Result;
use log::{debug, warn};

use crate::engine::arg_parser::Cli;
use crate::engine::progress::print_event;
use crate::error::CrawlError;
use crate::sessions::build_sessions;
use crate::types::Mode;
use crate::utils::{apply_file_to_opts, load_settings_toml, setup_logging};
use crate::Opts;

/// Resolve options. A broken settings file is returned rather than logged: the logger is not up yet.
fn setup_opts(cli: &Cli) -> (Opts, Option<anyhow::Error>) {
    let mut opts = Opts::default();
    let mut settings_error = None;
    match load_settings_toml(&cli.path) {
        Ok(Some(file)) => apply_file_to_opts(&file, &cli.path, &mut opts),
        Ok(None) => {}
        Err(e) => settings_error = Some(e),
    }
    if let Some(raw) = cli.raw {
        opts.mode = Mode::from_raw_flag(raw);
    }
    if let Some(v) = cli.make {
        opts.make_defaults = v;
    }
    if cli.output.is_some() {
        opts.output = cli.output.clone();
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(v) = cli.follow_links {
        opts.follow_links = v;
    }
    if let Some(v) = cli.strict {
        opts.strict = v;
    }
    (opts, settings_error)
}

/// Validate the search path, crawl it and write the spreadsheet when anything was found.
pub fn handle_run(cli: &Cli) -> Result<()> {
    if !cli.path.is_dir() {
        setup_logging(cli.verbose.unwrap_or(false));
        return Err(CrawlError::InvalidRoot(cli.path.clone()).into());
    }
    let (opts, settings_error) = setup_opts(cli);
    setup_logging(opts.verbose);
    if let Some(e) = settings_error {
        warn!("ignoring settings file: {:#}", e);
    }
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    build_sessions(&cli.path, &opts, print_event)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(dir: &std::path::Path, extra: &[&str]) -> Cli {
        let mut args = vec!["sessionbuilder", "-p", dir.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn unparsable_settings_file_is_reported_and_ignored() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".sessionbuilder.toml"), "[settings]\nraw = \"yes\"").unwrap();
        let (opts, err) = setup_opts(&cli_for(temp.path(), &[]));
        assert!(err.is_some());
        assert_eq!(opts.mode, Mode::Final);
        assert!(opts.output.is_none());
    }

    #[test]
    fn flags_override_settings_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".sessionbuilder.toml"),
            "[settings]\nraw = true\noutput = \"list.xlsx\"\n",
        )
        .unwrap();

        let (opts, err) = setup_opts(&cli_for(temp.path(), &[]));
        assert!(err.is_none());
        assert_eq!(opts.mode, Mode::Raw);
        assert_eq!(opts.output, Some(temp.path().join("list.xlsx")));

        let (opts, _) = setup_opts(&cli_for(temp.path(), &["-r", "false", "-o", "/x.xlsx"]));
        assert_eq!(opts.mode, Mode::Final);
        assert_eq!(opts.output, Some(PathBuf::from("/x.xlsx")));
    }
}
