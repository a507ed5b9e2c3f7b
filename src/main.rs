use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use weekend_picker::report::{
    narrative_section, render, OpenAiNarrator, DEFAULT_NARRATIVE_MODEL,
};
use weekend_picker::{
    generate_candidates, load_request, rank, OutputFormat, ReportConfig, ResultPayload,
};

const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "weekend-picker",
    version,
    about = "Rank Friday-Sunday weekend options under hard and soft date constraints"
)]
struct Cli {
    #[arg(long, help = "Path to input JSON file")]
    input: PathBuf,
    #[arg(
        long,
        default_value_t = ReportConfig::DEFAULT_TOP_N as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Return top N weekend options"
    )]
    top_n: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    output_format: OutputFormat,
    #[arg(long, help = "Generate additional narrative text using the OpenAI API")]
    include_openai_narrative: bool,
    #[arg(
        long,
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        help = "OpenAI API key for narrative output"
    )]
    openai_api_key: Option<String>,
    #[arg(long, default_value = DEFAULT_NARRATIVE_MODEL, help = "OpenAI model for narrative output")]
    model: String,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        let top_n = usize::try_from(self.top_n).unwrap_or(usize::MAX);
        ReportConfig::new(top_n, self.output_format)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.report_config();

    let request = match load_request(&cli.input) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Input validation error: {e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let candidates = generate_candidates(request.min_date(), request.max_date());
    let ranked = rank(&request, &candidates);
    if candidates.is_empty() {
        tracing::warn!("no Friday-Sunday weekend fits inside the search window");
    }
    tracing::info!(
        candidates = candidates.len(),
        ranked = ranked.len(),
        top_n = config.top_n,
        "ranking complete"
    );

    let payload = ResultPayload::build(&request, &ranked, config.top_n);
    match render(&payload, config.format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Unhandled error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if !cli.include_openai_narrative {
        return ExitCode::SUCCESS;
    }

    let narrator = match OpenAiNarrator::new(cli.openai_api_key.unwrap_or_default(), cli.model) {
        Ok(narrator) => narrator,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };
    match narrative_section(&narrator, &payload) {
        Ok(section) => {
            println!("{section}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(model = %narrator.model(), "narrative generation failed");
            eprintln!("OpenAI narrative error: {e}");
            ExitCode::FAILURE
        }
    }
}
