//! `menu order`: apply picks, place one order, print the history.

use anyhow::{bail, Context, Result};
use menu_config::MenuConfig;
use menu_form::QuantityChange;
use std::io::Write;

use super::{flush_notices, open_desk, Desk};

/// Split `"<item>=<qty>"` at the last `=`, so item names may contain `=`.
pub fn parse_pick(raw: &str) -> Result<(String, u32)> {
    let Some((item, qty)) = raw.rsplit_once('=') else {
        bail!("invalid --pick '{}'. expected \"<item>=<qty>\"", raw);
    };
    let item = item.trim();
    if item.is_empty() {
        bail!("invalid --pick '{}': item name is empty", raw);
    }
    let qty: u32 = qty
        .trim()
        .parse()
        .with_context(|| format!("invalid --pick '{}': quantity must be a whole number", raw))?;
    Ok((item.to_string(), qty))
}

/// Apply one selection and report clamping the way the spinner would show it.
pub fn apply_pick<W: Write>(desk: &mut Desk, item: &str, qty: u32, out: &mut W) -> Result<()> {
    let change = desk.set_quantity(item, qty)?;
    write_change(&change, out)
}

pub fn write_change<W: Write>(change: &QuantityChange, out: &mut W) -> Result<()> {
    if change.was_clamped() {
        writeln!(
            out,
            "{}: requested {}, set to {} ({} remaining in {})",
            change.item, change.requested, change.applied, change.remaining, change.category
        )?;
    } else {
        writeln!(
            out,
            "{}: {} ({} remaining in {})",
            change.item, change.applied, change.remaining, change.category
        )?;
    }
    Ok(())
}

pub fn run_order<W: Write>(
    config: MenuConfig,
    picks: &[String],
    export: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let picks = picks
        .iter()
        .map(|p| parse_pick(p))
        .collect::<Result<Vec<_>>>()?;

    let mut desk = open_desk(config)?;
    flush_notices(&mut desk, out)?;

    for (item, qty) in &picks {
        apply_pick(&mut desk, item, *qty, out)?;
    }

    desk.place_order();
    flush_notices(&mut desk, out)?;
    write!(out, "{}", desk.history_view())?;

    if let Some(path) = export {
        // Failures are reported as a notice; the order itself stands.
        let _ = desk.export(path);
        flush_notices(&mut desk, out)?;
    }
    Ok(())
}
