use std::io::Write;

use clap::Args;
use midpoint_common::{BoundedInt, DEFAULT_BIT_WIDTH};

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// Integer literal to wrap.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Target width in bits, sign bit included.
    #[arg(long, default_value_t = DEFAULT_BIT_WIDTH)]
    pub bit_width: u32,
}

pub fn handle_command(args: WrapArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let int = BoundedInt::parse(&args.value, args.bit_width)?;
    tracing::debug!(value = %args.value, bit_width = args.bit_width, wrapped = %int);

    writeln!(
        out,
        "{} -> {int} (i{}: {}..={})",
        args.value.trim(),
        int.bit_width(),
        int.min_value(),
        int.max_value()
    )?;
    Ok(())
}
