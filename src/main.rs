use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use win10colors::config::{self, OutputFormat};
use win10colors::report::{Report, Sections};
use win10colors::FrameOptions;

#[derive(Parser)]
#[command(name = "win10colors", about = "Print Windows 10 accent and frame colors")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Accent color and its shades
    Accent,
    /// Colors for painting window captions and frames
    Frame {
        /// Colors for a frame drawn with blur-behind
        #[arg(long)]
        glass: bool,
        /// Accent-colored title bars regardless of the user setting
        #[arg(long)]
        colored_title_bars: bool,
    },
    /// Dark mode state of apps and shell
    Theme,
    /// Everything (default)
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // The log filter lives in the config, so config problems get a
    // temporary stderr subscriber of their own.
    let cfg = tracing::subscriber::with_default(
        tracing_subscriber::fmt().with_writer(std::io::stderr).finish(),
        config::load_config,
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cfg.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut options = cfg.frame_options();
    let sections = match cli.command.unwrap_or(Command::Dump) {
        Command::Accent => Sections {
            accent: true,
            frame: false,
            theme: false,
        },
        Command::Frame {
            glass,
            colored_title_bars,
        } => {
            if glass {
                options |= FrameOptions::GLASS_EFFECT;
            }
            if colored_title_bars {
                options |= FrameOptions::TITLE_BARS_COLORED;
            }
            Sections {
                accent: false,
                frame: true,
                theme: false,
            }
        }
        Command::Theme => Sections {
            accent: false,
            frame: false,
            theme: true,
        },
        Command::Dump => Sections::ALL,
    };

    let report = collect(sections, options)?;
    let json = cli.json || cfg.format == OutputFormat::Json;
    print_report(&report, json)
}

#[cfg(windows)]
fn collect(sections: Sections, options: FrameOptions) -> Result<Report> {
    use win10colors::platform::{init_com, WindowsColorSource};
    use win10colors::AccentResolver;

    init_com();
    let resolver = AccentResolver::new(WindowsColorSource::new());
    Ok(Report::collect(&resolver, sections, options))
}

#[cfg(not(windows))]
fn collect(_sections: Sections, _options: FrameOptions) -> Result<Report> {
    anyhow::bail!(
        "unsupported platform ({}): accent colors can only be queried on Windows",
        std::env::consts::OS
    )
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

