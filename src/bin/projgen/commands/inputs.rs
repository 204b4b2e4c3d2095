//! `projgen inputs` command

use anyhow::Result;

use crate::cli::InputsArgs;
use projgen::ops::render_inputs;

pub fn execute(args: InputsArgs) -> Result<()> {
    let project = super::load(&args.file)?;
    print!("{}", render_inputs(&project, args.target.as_deref())?);
    Ok(())
}
