use ksonnet_gen::{
    codegen::{CodegenLibrary, write_to_disk},
    ir::IrLibrary,
    parse::Document,
};
use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use self::config::{Codegen, Command, Main};

fn main() -> Result<()> {
    let Ok(main) = Main::parse().map_err(|err| err.exit());
    init_logging(main.verbose);

    match main.command {
        Command::Codegen(Codegen {
            input,
            output,
            options,
        }) => {
            let source = std::fs::read_to_string(&input)
                .into_diagnostic()
                .with_context(|| format!("Failed to read `{}`", input.display()))?;

            let doc = match input.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Document::from_json(&source),
                _ => Document::from_yaml(&source),
            }
            .into_diagnostic()
            .context("Failed to parse Swagger document")?;

            if let Some(info) = &doc.info {
                println!(
                    "Swagger: {} (version {})",
                    info.title.as_deref().unwrap_or("untitled"),
                    info.version.as_deref().unwrap_or("unknown"),
                );
            }

            let library = IrLibrary::from_doc(&doc)
                .into_diagnostic()
                .context("Failed to build API model")?;

            let (emitted, total) = library
                .objects()
                .fold((0, 0), |(emitted, total), object| {
                    (emitted + usize::from(object.top_level), total + 1)
                });
            println!(
                "Found {total} objects across {} groups ({emitted} top-level, {} skipped definitions)",
                library.groups.len(),
                library.skipped.len(),
            );

            println!(
                "Generating `{}` in `{}`...",
                options.file_name,
                output.display()
            );
            write_to_disk(&output, CodegenLibrary::new(&library, &options))?;

            println!("Generation complete");
        }
    }

    Ok(())
}

/// Sends log events to stderr. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
