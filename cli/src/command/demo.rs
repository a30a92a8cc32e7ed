use std::io::Write;

use midpoint_common::{int::max_value, DEFAULT_BIT_WIDTH};
use midpoint_search::{BinarySearch, Mode};

use super::search::run_traced;

/// Length of the demo sequence `[1..=max_value - 21]`; small targets stay clear of overflow.
pub const DEMO_LENGTH: usize = (max_value(DEFAULT_BIT_WIDTH) - 21) as usize;

const SCENARIOS: [(i64, Mode, &str); 3] = [
    (7, Mode::OverflowProne, "Working"),
    (100, Mode::OverflowProne, "Unknown"),
    (100, Mode::OverflowSafe, "Working"),
];

/// Run the reference scenarios. The demo always searches with the default 8-bit index width;
/// `MIDPOINT_SEARCH_BITWIDTH` and `MIDPOINT_SEARCH_MODE` only apply to `midpoint search`.
pub fn handle_command(out: &mut impl Write) -> anyhow::Result<()> {
    let sequence: Vec<i64> = (1..=DEMO_LENGTH as i64).collect();

    for (n, (target, mode, expectation)) in SCENARIOS.into_iter().enumerate() {
        let search = BinarySearch::with_default_width(mode);

        writeln!(out)?;
        writeln!(
            out,
            "======================= Test: {} -- Find: {target:>3} -- Mode: {mode} -- Expectation: {expectation} =======================",
            n + 1
        )?;
        run_traced(&search, &sequence, target, out)?;
    }
    Ok(())
}
