//! Content directory scaffolder.
//!
//! Writes the built-in sample bundle as a content directory so a club can
//! start from working documents and edit them in place:
//!
//! ```text
//! clubdesk-contentgen <output-dir> [--force]
//! ```
//!
//! Existing documents are never overwritten unless `--force` is given.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clubdesk::{sample_bundle, ContentWriter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let force = args.iter().any(|arg| arg == "--force");
    let dirs: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let [output_dir] = dirs.as_slice() else {
        eprintln!("Usage: clubdesk-contentgen <output-dir> [--force]");
        return ExitCode::from(2);
    };
    let output_dir = PathBuf::from(output_dir.as_str());

    let bundle = sample_bundle();
    match ContentWriter::new(&output_dir).write_bundle(&bundle, force) {
        Ok(written) => {
            for path in &written {
                println!("wrote {}", path.display());
            }
            println!(
                "Scaffolded {} documents in {} ({} sessions, {} trainers, {} forms)",
                written.len(),
                output_dir.display(),
                bundle.schedule.sessions.len(),
                bundle.trainers.len(),
                bundle.forms.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
