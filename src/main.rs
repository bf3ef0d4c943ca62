//! # ticketpress CLI
//!
//! Command-line interface for ticket template previews.
//!
//! ## Usage
//!
//! ```bash
//! # Render a template file to an HTML page
//! ticketpress preview ticket.txt --paper 58mm --output preview.html
//!
//! # Render the template field of a stored TicketTemplate JSON document
//! ticketpress preview template.json --json
//!
//! # Encode a logo as an escaped raster fragment
//! ticketpress encode logo.png --paper 80mm
//!
//! # Take the paper width from a printer profile document
//! ticketpress encode logo.png --printer printer.json
//!
//! # List placeholder tokens and their sample values
//! ticketpress placeholders
//!
//! # Start the HTTP API
//! ticketpress serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ticketpress::{
    TicketError,
    model::TicketTemplate,
    preview,
    printer::{PaperWidth, PrinterProfile},
    render::raster::{DEFAULT_MAX_IMAGE_BYTES, EncoderOptions, encode_image},
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
    template::SampleData,
};

/// ticketpress - ESC/POS ticket template preview utility
#[derive(Parser, Debug)]
#[command(name = "ticketpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a template to a standalone HTML page
    Preview {
        /// Template file (raw or escaped control codes)
        file: PathBuf,

        /// Read the file as a TicketTemplate JSON document
        #[arg(long)]
        json: bool,

        /// Paper width (58mm or 80mm)
        #[arg(long, default_value_t = PaperWidth::Wide)]
        paper: PaperWidth,

        /// PrinterProfile JSON whose paperType replaces --paper
        #[arg(long, value_name = "FILE")]
        printer: Option<PathBuf>,

        /// Write the page to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Encode an image as a raster control-code fragment
    Encode {
        /// PNG, JPEG, BMP or GIF file
        image: PathBuf,

        /// Paper width (58mm or 80mm)
        #[arg(long, default_value_t = PaperWidth::Wide)]
        paper: PaperWidth,

        /// PrinterProfile JSON whose paperType replaces --paper
        #[arg(long, value_name = "FILE")]
        printer: Option<PathBuf>,

        /// Largest accepted file, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
        max_image_bytes: usize,

        /// Write raw printer bytes instead of escaped text
        #[arg(long)]
        raw: bool,
    },

    /// List placeholder tokens and their sample values
    Placeholders,

    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,

        /// Largest accepted image upload, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
        max_image_bytes: usize,

        /// Paper width used when a request names none
        #[arg(long, default_value_t = PaperWidth::Wide)]
        paper: PaperWidth,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TicketError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            file,
            json,
            paper,
            printer,
            output,
        } => {
            let paper = paper_for(paper, printer.as_deref())?;
            let template = read_template(&file, json)?;
            let page = preview::render_page(&template, &SampleData::default(), paper);

            match output {
                Some(path) => {
                    std::fs::write(&path, page)?;
                    info!(path = %path.display(), %paper, "wrote preview");
                }
                None => io::stdout().write_all(page.as_bytes())?,
            }
        }

        Commands::Encode {
            image,
            paper,
            printer,
            max_image_bytes,
            raw,
        } => {
            let paper = paper_for(paper, printer.as_deref())?;
            let bytes = std::fs::read(&image)?;
            let file_name = image.file_name().and_then(|name| name.to_str());
            let options = EncoderOptions::new(paper).with_max_bytes(max_image_bytes);
            let encoded = encode_image(file_name, &bytes, &options)?;

            info!(
                width = encoded.width,
                height = encoded.height,
                %paper,
                "encoded {}",
                image.display()
            );

            let mut stdout = io::stdout();
            if raw {
                // Every fragment char is a single printer byte
                let bytes: Vec<u8> = encoded.fragment.chars().map(|c| c as u8).collect();
                stdout.write_all(&bytes)?;
            } else {
                writeln!(stdout, "{}", encoded.escaped())?;
            }
        }

        Commands::Placeholders => {
            let samples = SampleData::default();
            let width = samples
                .placeholders()
                .iter()
                .map(|p| p.token.len())
                .max()
                .unwrap_or(0);
            for placeholder in samples.placeholders() {
                println!("{:width$}  {}", placeholder.token, placeholder.sample);
            }
        }

        Commands::Serve {
            listen,
            max_image_bytes,
            paper,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                max_image_bytes,
                default_paper: paper,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Load template text from a raw file or a TicketTemplate document.
fn read_template(path: &Path, json: bool) -> Result<String, TicketError> {
    let contents = std::fs::read_to_string(path)?;
    if !json {
        return Ok(contents);
    }

    let document: TicketTemplate = serde_json::from_str(&contents).map_err(|e| {
        TicketError::Template(format!("{}: {}", path.display(), e))
    })?;
    Ok(document.template)
}

/// Paper width from a printer profile document, or `paper` without one.
fn paper_for(paper: PaperWidth, profile: Option<&Path>) -> Result<PaperWidth, TicketError> {
    let Some(path) = profile else {
        return Ok(paper);
    };

    let contents = std::fs::read_to_string(path)?;
    let profile: PrinterProfile = serde_json::from_str(&contents)
        .map_err(|e| TicketError::Profile(format!("{}: {}", path.display(), e)))?;
    info!(printer_id = profile.printer_id, paper = %profile.paper_type, "using printer profile");
    Ok(profile.paper_type)
}
