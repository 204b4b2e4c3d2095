//! `projgen check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use projgen::ops::check;
use projgen::util::diagnostic::emit;

pub fn execute(args: CheckArgs, no_color: bool) -> Result<()> {
    let project = super::load(&args.file)?;
    let config = super::config_for(&args.file);
    let color = config.color() && !no_color;

    let report = check(&project, &args.file, &config);
    for diagnostic in &report.diagnostics {
        emit(diagnostic, color);
    }

    if report.has_errors() {
        bail!("{} has problems: {}", args.file.display(), report.summary());
    }

    println!("{}: {}", args.file.display(), report.summary());
    Ok(())
}
