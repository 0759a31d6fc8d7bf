use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use vim_startuptime::Result;
use vim_startuptime::config::{self, LogSource, ReportFormat};
use vim_startuptime::log::read_log_file;
use vim_startuptime::model;
use vim_startuptime::render::{self, Report};
use vim_startuptime::runner;

#[derive(Parser)]
#[command(name = "vim-startuptime")]
#[command(about = "A tool for analyzing vim's startup time", long_about = None)]
#[command(after_help = "...lies, damned lies and statistics.")]
struct Cli {
    /// Number of runs to make before averaging them.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Log file to analyze instead of launching vim.
    #[arg(short, long, conflicts_with = "runs")]
    log: Option<PathBuf>,

    /// Location of your addons/bundle dir so results can be grouped.
    #[arg(short, long, default_value = config::DEFAULT_ADDONS_DIR)]
    addons_dir: String,

    /// Save results to a file instead of printing them.
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Editor executable to profile.
    #[arg(long, default_value = config::DEFAULT_VIM)]
    vim: String,

    #[arg(long, value_enum, default_value_t)]
    format: ReportFormat,

    /// Extra arguments passed to every vim launch.
    #[arg(last = true)]
    vim_args: Vec<String>,
}

impl Cli {
    fn source(&self) -> LogSource {
        match &self.log {
            Some(path) => LogSource::File(path.clone()),
            None => LogSource::Launch {
                vim: self.vim.clone(),
                runs: self.runs as usize,
                args: self.vim_args.clone(),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // 1) Obtain the log text.
    let text = match cli.source() {
        LogSource::File(path) => read_log_file(&path)?,
        LogSource::Launch { vim, runs, args } => runner::collect_runs(&vim, runs, &args)?,
    };

    // 2) Parse + aggregate.
    let parsed = model::parse_str(&text)?;

    // 3) Group by addon.
    let addons_dir = config::resolve_addons_dir(&cli.addons_dir)?;
    let addons = model::group(&parsed.actions, &addons_dir);

    // 4) Render.
    let report = Report::new(&parsed, &addons)?;
    let out = match cli.format {
        ReportFormat::Text => render::render_text_report(&report)?,
        ReportFormat::Json => render::render_json_report(&report)?,
    };

    match &cli.save {
        Some(path) => std::fs::write(path, out)
            .with_context(|| format!("write report to {}", path.display()))?,
        None => print!("{}", out),
    }

    Ok(())
}
