use clap::Parser;
use std::path::PathBuf;

/// Build a title/description spreadsheet from interview recordings and their markdown companions.
#[derive(Clone, Debug, Parser)]
#[command(name = "sessionbuilder")]
#[command(
    about = "Recursively looks for videos and a corresponding markdown file to create a title and description spreadsheet.",
    long_about = "Recursively looks for videos and a corresponding markdown file to create a title \
and description spreadsheet. The first line of the markdown file may hold {tags}; the next line \
is the video title and the rest is the description.",
    after_help = "Example:\n\tsessionbuilder -p ~/conference -o ~/conference/Sessions.xlsx"
)]
pub struct Cli {
    /// Search path. Raw mode: .../1_Monday/NameOfInterview/<filename>.md;
    /// final mode: .../1_Monday/NameOfInterview.mp4 (looks for NameOfInterview.md beside it).
    #[arg(long, short = 'p', value_name = "DIR")]
    pub path: PathBuf,

    /// Crawl raw footage folders instead of final encoded files.
    #[arg(long, short = 'r', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub raw: Option<bool>,

    /// Make default markdown files beside videos that have none.
    #[arg(long, short = 'm', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub make: Option<bool>,

    /// Spreadsheet output location. Default: sessions.xlsx in DIR.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Strict mode: fail on the first unreadable item instead of skipping it.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_flags_unset() {
        let cli = Cli::try_parse_from(["sessionbuilder", "-p", "/r"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/r"));
        assert_eq!(cli.raw, None);
        assert_eq!(cli.make, None);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn bare_flags_mean_true() {
        let cli = Cli::try_parse_from(["sessionbuilder", "-p", "/r", "-r", "-m", "-o", "/x.xlsx"]).unwrap();
        assert_eq!(cli.raw, Some(true));
        assert_eq!(cli.make, Some(true));
        assert_eq!(cli.output, Some(PathBuf::from("/x.xlsx")));
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["sessionbuilder", "-r"]).is_err());
    }
}
