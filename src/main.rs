//! selah - Fast USFM to HTML renderer

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selah")]
#[command(version, about = "Fast USFM to HTML renderer", long_about = None)]
#[command(after_help = "EXAMPLES:
    selah 01-GEN.usfm -o genesis.html       Render one book
    selah *.usfm -o bible.html --title WEB  Render a whole translation")]
struct Cli {
    /// Input USFM files, rendered in order
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// Output HTML file
    #[arg(short, long, value_name = "OUTPUT")]
    output: String,

    /// Document title
    #[arg(long, default_value = "Bible")]
    title: String,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> selah::Result<()> {
    let html = selah::render_files(&cli.inputs, &cli.title)?;
    std::fs::write(&cli.output, html)?;
    Ok(())
}
