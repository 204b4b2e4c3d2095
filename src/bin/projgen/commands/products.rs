//! `projgen products` command

use anyhow::{Context, Result};

use crate::cli::ProductsArgs;
use projgen::ops::ProductsReport;

pub fn execute(args: ProductsArgs) -> Result<()> {
    let project = super::load(&args.file)?;
    let report = ProductsReport::assemble(&project);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize products report")?;
        println!("{}", json);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
