//! CLI tool to post JSON (and an optional file) to the /bfhl endpoint and
//! print the filtered response.
//!
//! Usage:
//!   bfhl-submit '{"data": ["A", "C", "1", "z"]}' -f numbers -f highestLowercaseAlphabet
//!   bfhl-submit --input request.json --file scan.png -f alphabets

use bfhl_form::{
    Attachment, FILTER_OPTIONS, FilterTag, FormConfig, FormState, HttpTransport, accepts, logging,
};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::warn;

/// Submit JSON and an optional attachment, then show the selected response fields.
///
/// Filter options: numbers, alphabets, highestLowercaseAlphabet. Lines are
/// always printed in that order.
#[derive(Parser)]
#[command(name = "bfhl-submit")]
struct Cli {
    /// JSON text to submit
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    json: Option<String>,

    /// Read the JSON text from a file instead
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Attach a file (image, .pdf, .doc, .docx suggested)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Response field to show; repeat for more than one
    #[arg(short = 'f', long = "filter", value_name = "OPTION")]
    filters: Vec<FilterTag>,

    /// Show every response field
    #[arg(short, long, conflicts_with = "filters")]
    all: bool,

    /// Endpoint to post to
    #[arg(long, env = "BFHL_ENDPOINT", default_value = bfhl_form::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Log request details on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let json_text = match (&cli.json, &cli.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading input file '{}': {e}", path.display());
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("No JSON input given");
            process::exit(1);
        }
    };

    let mut form: FormState = FormState::new();
    form.on_input_change(json_text);

    if let Some(path) = &cli.file {
        match Attachment::from_path(path) {
            Ok(attachment) => {
                if !accepts(&attachment.name, attachment.mime.as_deref()) {
                    warn!(file = %attachment.name, "file does not match the suggested types");
                }
                form.on_file_change([attachment]);
            }
            Err(e) => {
                eprintln!("Error reading file '{}': {e}", path.display());
                process::exit(1);
            }
        }
    }

    let config = FormConfig::with_endpoint(cli.endpoint);
    let transport = match HttpTransport::new(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error creating HTTP client: {e}");
            process::exit(1);
        }
    };

    form.submit(&transport);

    if let Some(message) = form.error() {
        eprintln!("{message}");
        process::exit(1);
    }

    if cli.all {
        form.on_filter_change(FILTER_OPTIONS.iter().map(|opt| opt.tag));
    } else {
        form.on_filter_change(cli.filters);
    }

    if let Some(view) = form.filtered_view()
        && !view.is_empty()
    {
        println!("Filtered Response");
        println!("{view}");
    }
}
