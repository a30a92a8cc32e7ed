use std::io::Write;

use clap::Args;
use midpoint_config::{Config, SearchConfig};
use midpoint_search::{BinarySearch, Mode, SearchReport, Termination};

use super::demo::DEMO_LENGTH;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Value to look for.
    #[arg(long, allow_hyphen_values = true)]
    pub target: i64,

    /// Length of the searched sequence `[1..=len]`.
    #[arg(long, default_value_t = DEMO_LENGTH)]
    pub len: usize,

    /// Index width in bits, sign bit included. Overrides MIDPOINT_SEARCH_BITWIDTH.
    #[arg(long)]
    pub bit_width: Option<u32>,

    /// Midpoint strategy. Overrides MIDPOINT_SEARCH_MODE.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Print the full report as JSON instead of the loop trace.
    #[arg(long)]
    pub json: bool,
}

pub fn handle_command(args: SearchArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = SearchConfig::from_env()?;
    let SearchArgs { target, len, bit_width, mode, json } = args;

    let search = BinarySearch::new(
        mode.unwrap_or(config.mode),
        bit_width.unwrap_or(config.bit_width),
    )?;
    let sequence: Vec<i64> = (1..=len as i64).collect();

    if json {
        let report = search.run(&sequence, &target, len);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        run_traced(&search, &sequence, target, out)?;
    }
    Ok(())
}

/// Run `search`, writing each loop iteration as it happens and then the result.
pub(crate) fn run_traced(
    search: &BinarySearch,
    sequence: &[i64],
    target: i64,
    out: &mut impl Write,
) -> anyhow::Result<SearchReport> {
    let mut write_result = Ok(());
    let report = search.run_with(sequence, &target, sequence.len(), |record| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{record}");
        }
    });
    write_result?;

    match report.termination {
        Termination::IterationCap { .. } => writeln!(out, "Error: Entered a forever loop")?,
        Termination::MidpointOutOfRange { mid } => {
            writeln!(out, "Error: Midpoint {mid} is outside the sequence")?
        }
        Termination::Found { .. } | Termination::Exhausted => {}
    }
    writeln!(out, "Found at index = {}", report.result)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traced_output() {
        let search = BinarySearch::new(Mode::OverflowSafe, 8).unwrap();
        let sequence: Vec<i64> = (1..=106).collect();
        let mut out = Vec::new();

        run_traced(&search, &sequence, 100, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Loop 1: low = 0\t high = 105\t mid = 52");
        assert_eq!(lines[4], "Found at index = 99");
    }

    #[test]
    fn traced_output_reports_wrapped_midpoint() {
        let search = BinarySearch::new(Mode::OverflowProne, 8).unwrap();
        let sequence: Vec<i64> = (1..=106).collect();
        let mut out = Vec::new();

        run_traced(&search, &sequence, 100, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Loop 2: low = 53\t high = 105\t mid = -49"));
        assert!(out.contains("Loop 106: low = 22\t high = 105\t mid = 63"));
        assert!(!out.contains("outside the sequence"));
        assert!(out.ends_with("Error: Entered a forever loop\nFound at index = -1\n"));
    }

    #[test]
    fn traced_output_reports_forever_loop() {
        let search = BinarySearch::new(Mode::OverflowSafe, 4).unwrap();
        let sequence: Vec<i64> = (1..=8).collect();
        let mut out = Vec::new();

        let report = run_traced(&search, &sequence, 100, &mut out).unwrap();

        assert_eq!(report.termination, Termination::IterationCap { iterations: 8 });
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Error: Entered a forever loop"));
    }
}
