//! Tracing subscriber: terminal-aware console output and the swap log file.
use std::fs;
use std::io::{IsTerminal as _, Write as _};
use std::path::Path;
use std::sync::Mutex;

use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

use super::utils::{color_enabled, log_file_path, utc_datetime, utc_time};
use super::{DRY_RUN_TARGET, STAGE_TARGET};
use crate::commands::version::version;

/// Presentation class of an event, derived from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Kind {
    Stage,
    DryRun,
    Info,
    Debug,
    Warn,
    Error,
}

impl Kind {
    fn of(metadata: &Metadata<'_>) -> Self {
        match (*metadata.level(), metadata.target()) {
            (Level::ERROR, _) => Self::Error,
            (Level::WARN, _) => Self::Warn,
            (Level::INFO, STAGE_TARGET) => Self::Stage,
            (Level::INFO, DRY_RUN_TARGET) => Self::DryRun,
            (Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    const fn to_stderr(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }
}

/// Collects the `message` field of an event.
#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.0);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

fn message_of(event: &Event<'_>) -> String {
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    visitor.0
}

/// Render one console line. Escape codes are only added when `color` is set.
pub(super) fn render_console(kind: Kind, msg: &str, color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };
    match kind {
        Kind::Stage => format!("{} {}", paint("1;34", "==>"), paint("1", msg)),
        Kind::DryRun => format!("  {} {msg}", paint("33", "[dry run]")),
        Kind::Info => format!("  {msg}"),
        Kind::Debug => format!("  {}", paint("2", msg)),
        Kind::Warn => format!("{} {msg}", paint("33", "warning:")),
        Kind::Error => paint("31", msg),
    }
}

/// Render one log file line stamped with `time`.
pub(super) fn render_file(kind: Kind, msg: &str, time: &str) -> String {
    let tag = match kind {
        Kind::Stage => "==> ",
        Kind::DryRun => "[dry run] ",
        Kind::Info => "",
        Kind::Debug => "[debug] ",
        Kind::Warn => "[warn] ",
        Kind::Error => "[error] ",
    };
    format!("[{time}] {tag}{msg}")
}

/// Console formatter. Colour is decided per stream because warnings and
/// errors go to stderr while everything else goes to stdout.
struct ConsoleFormatter {
    stdout_color: bool,
    stderr_color: bool,
}

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let kind = Kind::of(event.metadata());
        let color = if kind.to_stderr() {
            self.stderr_color
        } else {
            self.stdout_color
        };
        writeln!(writer, "{}", render_console(kind, &message_of(event), color))
    }
}

/// Appends every event to a log file, one timestamped line each.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open `path` for appending and write a header for this run of
    /// `command`. Earlier runs stay in the file.
    pub(super) fn open(path: &Path, command: &str) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(
            file,
            "--- swap-profile {} {command} {} UTC ---",
            version(),
            utc_datetime()
        )?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: Subscriber> Layer<S> for FileLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let line = render_file(Kind::of(event.metadata()), &message_of(event), &utc_time());
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{line}").ok();
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout; `debug`
/// reaches the console only when `verbose` is set. Colour is used only on
/// terminals and never when `NO_COLOR` is set.
///
/// With `log_stem`, every event at `DEBUG` and above is also appended to
/// `$XDG_CACHE_HOME/swap-profile/<log_stem>.log`. A log file that cannot be
/// opened is skipped silently. Must be called once, before any logging.
pub fn init_subscriber(verbose: bool, log_stem: Option<&str>) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        filter::LevelFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let no_color = std::env::var_os("NO_COLOR");
    let formatter = ConsoleFormatter {
        stdout_color: color_enabled(std::io::stdout().is_terminal(), no_color.as_deref()),
        stderr_color: color_enabled(std::io::stderr().is_terminal(), no_color.as_deref()),
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(formatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = log_stem
        .and_then(|stem| FileLayer::open(&log_file_path(stem)?, stem).ok())
        .map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [Kind; 6] = [
        Kind::Stage,
        Kind::DryRun,
        Kind::Info,
        Kind::Debug,
        Kind::Warn,
        Kind::Error,
    ];

    #[test]
    fn plain_console_output_has_no_escape_codes() {
        for kind in ALL {
            let line = render_console(kind, "message", false);
            assert!(!line.contains('\x1b'), "{kind:?} rendered {line:?}");
            assert!(line.contains("message"));
        }
    }

    #[test]
    fn plain_console_layout() {
        assert_eq!(
            render_console(Kind::Stage, "Available profiles", false),
            "==> Available profiles"
        );
        assert_eq!(render_console(Kind::Info, "row", false), "  row");
        assert_eq!(
            render_console(Kind::DryRun, "Would copy", false),
            "  [dry run] Would copy"
        );
        assert_eq!(
            render_console(Kind::Warn, "kept CLAUDE.md", false),
            "warning: kept CLAUDE.md"
        );
        assert_eq!(render_console(Kind::Error, "fatal: boom", false), "fatal: boom");
    }

    #[test]
    fn coloured_stage_header_is_bold_blue() {
        let line = render_console(Kind::Stage, "Swapping", true);
        assert_eq!(line, "\x1b[1;34m==>\x1b[0m \x1b[1mSwapping\x1b[0m");
    }

    #[test]
    fn file_lines_are_tagged() {
        assert_eq!(render_file(Kind::Info, "copied", "12:00:00"), "[12:00:00] copied");
        assert_eq!(
            render_file(Kind::Warn, "careful", "12:00:00"),
            "[12:00:00] [warn] careful"
        );
        assert_eq!(
            render_file(Kind::Stage, "Swapping", "12:00:00"),
            "[12:00:00] ==> Swapping"
        );
    }

    #[test]
    fn only_warnings_and_errors_go_to_stderr() {
        let to_stderr: Vec<Kind> = ALL.into_iter().filter(|k| k.to_stderr()).collect();
        assert_eq!(to_stderr, vec![Kind::Warn, Kind::Error]);
    }

    #[test]
    fn reopening_appends_a_new_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("swap.log");
        drop(FileLayer::open(&path, "swap").unwrap());
        drop(FileLayer::open(&path, "swap").unwrap());
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("--- swap-profile").count(), 2);
    }
}
