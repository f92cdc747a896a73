//! Validation command handler

use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use petspec_schemas::{load_pet_spec, PetSpecValidator};
use std::fs;
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(output), fields(file = %args.spec.display()))]
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    info!("Starting validation");
    output.info(&format!("Validating pet spec: {}", args.spec.display()))?;

    if !args.spec.exists() {
        return Err(Error::FileNotFound {
            path: args.spec.clone(),
        });
    }

    let mut spec = load_pet_spec(&args.spec)?;
    debug!("Document parsed");

    if let Some(base_url) = &args.base_url {
        debug!(base_url = %base_url, "Resolving relative asset paths against base URL");
    }
    let validator = match args.base_url.as_deref() {
        Some(url) => PetSpecValidator::with_base_url(url),
        None => PetSpecValidator::new(),
    };

    match validator.validate(&mut spec) {
        Ok(()) => {
            info!("Validation succeeded");
            output.success("✓ Pet spec is valid")?;

            if args.detailed {
                output.section("Normalized Specification")?;
                output.data(&spec)?;
            }

            if let Some(path) = &args.save_to {
                fs::write(path, serde_json::to_string_pretty(&spec)?)?;
                output.success(&format!("✓ Normalized spec saved to {}", path.display()))?;
            }

            Ok(())
        }
        Err(validation_error) => {
            warn!(error = %validation_error, "Validation failed");
            output.error("✗ Pet spec validation failed")?;
            output.error(&format!("  {}", validation_error))?;

            Err(Error::Validation(validation_error))
        }
    }
}
