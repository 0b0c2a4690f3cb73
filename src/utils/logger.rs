use colored::{Color, ColoredString, Colorize};
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Console colors for crawl progress lines.
pub struct Colors;

impl Colors {
    pub const DIRECTORY: Color = Color::White;
    pub const MEDIA: Color = Color::Cyan;
    pub const FOUND: Color = Color::Green;
    /// Title still equals the stub placeholder.
    pub const NEEDS_EDIT: Color = Color::Red;
    pub const STUB: Color = Color::Green;
    pub const NOTHING_FOUND: Color = Color::Red;

    pub fn colorize(color: Color, text: &str) -> ColoredString {
        text.color(color)
    }
}

pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // try_init: the CLI may be driven more than once in one process (tests).
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level) // Our crate: use requested level
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}
