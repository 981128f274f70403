//! Colorful console output for benchmark events.
//!
//! Provides a custom `tracing` layer that formats benchmark events with
//! colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end, sizes measured,
//!   files written)
//! - **WARN**: Input fallbacks and deep recursion diagnostics

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the benchmark console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the algobench banner and sets up tracing. `RUST_LOG` overrides
/// the default `info` level for algobench crates.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::builder().from_env_lossy();
        for target in ["algobench", "algobench_benchmark", "algobench_config"] {
            if let Ok(directive) = format!("{target}=info").parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a benchmark family for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the current family started.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
       _             _                     _
  __ _| | __ _  ___ | |__   ___ _ __   ___| |__
 / _` | |/ _` |/ _ \| '_ \ / _ \ '_ \ / __| '_ \
| (_| | | (_| | (_) | |_) |  __/ | | | (__| | | |
 \__,_|_|\__, |\___/|_.__/ \___|_| |_|\___|_| |_|
         |___/
"#;

    let version_line = format!(
        "            v{} - Recursive vs Iterative Benchmarks\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from algobench crates
        if !target.starts_with("algobench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    family: Option<String>,
    sizes: Option<String>,
    input: Option<String>,
    fallback: Option<String>,
    error: Option<String>,
    path: Option<String>,
    format: Option<String>,
    n: Option<u64>,
    repeats: Option<u64>,
    seed: Option<u64>,
    results: Option<u64>,
    duration_ms: Option<u64>,
    limit: Option<u64>,
    panels: Option<u64>,
    recursive_ms: Option<f64>,
    iterative_ms: Option<f64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, s: String) {
        match name {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "family" => self.family = Some(s),
            "sizes" => self.sizes = Some(s),
            "input" => self.input = Some(s),
            "fallback" => self.fallback = Some(s),
            "error" => self.error = Some(s),
            "path" => self.path = Some(s),
            "format" => self.format = Some(s),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "repeats" => self.repeats = Some(value),
            "seed" => self.seed = Some(value),
            "results" => self.results = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "limit" => self.limit = Some(value),
            "panels" => self.panels = Some(value),
            "fallback" => self.fallback = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "recursive_ms" => self.recursive_ms = Some(value),
            "iterative_ms" => self.iterative_ms = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "benchmark_start" => format_benchmark_start(v),
        "size_measured" => format_size_measured(v),
        "benchmark_end" => format_benchmark_end(v),
        "chart_written" | "report_written" => format_file_written(v),
        "input_fallback" | "deep_recursion" => format_warning(v),
        _ if level == Level::WARN || level == Level::ERROR => format_warning(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    mark_run_start();
    let family = v.family.as_deref().unwrap_or("unknown");
    let sizes = v.sizes.as_deref().unwrap_or("[]");
    let repeats = v.repeats.unwrap_or(0);

    let mut output = format!(
        "{} {} {} │ sizes {} │ {} repeats",
        format_elapsed(),
        "▶".bright_green().bold(),
        family_label(family).white().bold(),
        sizes.bright_yellow(),
        repeats.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let Some(seed) = v.seed {
        output.push_str(&format!(" │ seed {}", seed.bright_magenta()));
    }

    output
}

fn format_size_measured(v: &EventVisitor) -> String {
    let n = v.n.unwrap_or(0);
    let recursive = v.recursive_ms.unwrap_or(0.0);
    let iterative = v.iterative_ms.unwrap_or(0.0);

    let (rec_str, it_str) = if recursive < iterative {
        (
            format_ms(recursive).bright_green().to_string(),
            format_ms(iterative).yellow().to_string(),
        )
    } else if iterative < recursive {
        (
            format_ms(recursive).yellow().to_string(),
            format_ms(iterative).bright_green().to_string(),
        )
    } else {
        (
            format_ms(recursive).white().to_string(),
            format_ms(iterative).white().to_string(),
        )
    };

    format!(
        "{} {} n = {:>10} │ recursive {} │ iterative {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        n.to_formatted_string(&Locale::en).white(),
        rec_str,
        it_str,
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    let family = v.family.as_deref().unwrap_or("unknown");
    let results = v.results.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} complete │ {} sizes │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        family_label(family).white().bold(),
        results.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_file_written(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let kind = match (v.event.as_deref(), v.format.as_deref()) {
        (Some("chart_written"), _) => "chart".to_string(),
        (_, Some(format)) => format!("{format} report"),
        _ => "report".to_string(),
    };

    let mut output = format!(
        "{} {} Wrote {} to {}",
        format_elapsed(),
        "✓".bright_green(),
        kind,
        path.bright_white().bold(),
    );
    if let Some(panels) = v.panels {
        output.push_str(&format!(" │ {} panels", panels));
    }
    output
}

fn format_warning(v: &EventVisitor) -> String {
    let message = v.message.as_deref().unwrap_or("warning");
    let mut output = format!("{} {}", "⚠".bright_yellow().bold(), message.yellow());

    if let Some(ref input) = v.input {
        output.push_str(&format!(" │ input {:?}", input));
    }
    if let Some(ref fallback) = v.fallback {
        output.push_str(&format!(" │ using {}", fallback.bright_yellow()));
    }
    if let Some(ref error) = v.error {
        output.push_str(&format!(" │ {}", error.bright_black()));
    }
    if let (Some(n), Some(limit)) = (v.n, v.limit) {
        output.push_str(&format!(
            " │ n = {} > {}",
            n.to_formatted_string(&Locale::en),
            limit.to_formatted_string(&Locale::en)
        ));
    }

    output
}

fn family_label(key: &str) -> &str {
    match key {
        "bubble_sort" => "Bubble Sort",
        "merge_sort" => "Merge Sort",
        "binary_search" => "Binary Search",
        other => other,
    }
}

fn format_ms(ms: f64) -> String {
    format!("{:.6} ms", ms)
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_family_label() {
        assert_eq!(family_label("merge_sort"), "Merge Sort");
        assert_eq!(family_label("custom"), "custom");
    }

    #[test]
    fn test_unknown_info_event_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_size_measured_mentions_both_variants() {
        let v = EventVisitor {
            event: Some("size_measured".to_string()),
            n: Some(1_000),
            recursive_ms: Some(0.5),
            iterative_ms: Some(0.25),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("1,000"));
        assert!(out.contains("0.500000 ms"));
        assert!(out.contains("0.250000 ms"));
    }

    #[test]
    fn test_fallback_warning() {
        let v = EventVisitor {
            event: Some("input_fallback".to_string()),
            message: Some("Invalid input. Using default.".to_string()),
            input: Some("abc".to_string()),
            fallback: Some("5".to_string()),
            ..Default::default()
        };
        let out = format_event(&v, Level::WARN);
        assert!(out.contains("Invalid input. Using default."));
        assert!(out.contains("\"abc\""));
    }
}
