//! Command handlers for the `menu` binary.
//!
//! Shared helpers live here; `order` and `session` hold the longer flows.

pub mod order;
pub mod session;

use anyhow::{Context, Result};
use menu_config::{report_unused_keys, LoadedConfig, MenuConfig, UnusedKeyPolicy};
use menu_desk::{Notice, OrderDesk};
use std::io::Write;

pub type Desk = OrderDesk<Vec<Notice>>;

/// No paths means no layers: every key takes its default.
pub fn load_config(paths: &[String]) -> Result<LoadedConfig> {
    if paths.is_empty() {
        return Ok(LoadedConfig::empty());
    }
    menu_config::load_layered_yaml(paths).context("load config layers")
}

pub fn check_unused_keys(loaded: &LoadedConfig, strict: bool) -> Result<()> {
    let policy = if strict {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };

    let report = report_unused_keys(&loaded.config_json, policy)?;
    if !report.is_clean() {
        eprintln!(
            "WARN: CONFIG_UNUSED_KEYS unused_leaf_keys={}",
            report.unused_leaf_pointers.len()
        );
        for p in report.unused_leaf_pointers.iter().take(50) {
            eprintln!("  unused={}", p);
        }
    }
    Ok(())
}

pub fn open_desk(config: MenuConfig) -> Result<Desk> {
    OrderDesk::open(config, Vec::new())
}

/// `[<title>] <message>`, with the header (if any) leading the message.
pub fn format_notice(n: &Notice) -> String {
    match &n.header {
        Some(h) => format!("[{}] {}\n{}", n.title, h, n.message),
        None => format!("[{}] {}", n.title, n.message),
    }
}

/// Print and drop every notice raised so far.
pub fn flush_notices<W: Write>(desk: &mut Desk, out: &mut W) -> Result<()> {
    for n in desk.notifier_mut().drain(..) {
        writeln!(out, "{}", format_notice(&n))?;
    }
    Ok(())
}

pub fn write_form<W: Write>(desk: &Desk, out: &mut W) -> Result<()> {
    if desk.catalog().is_empty() {
        writeln!(out, "(no menu items)")?;
    } else {
        write!(out, "{}", desk.form_view())?;
    }
    Ok(())
}

pub fn write_settings<W: Write>(
    loaded: &LoadedConfig,
    config: &MenuConfig,
    out: &mut W,
) -> Result<()> {
    let effective =
        serde_json::to_string_pretty(config).context("serialize effective config")?;
    writeln!(out, "config_hash={}", loaded.config_hash)?;
    writeln!(out, "{}", loaded.canonical_json)?;
    writeln!(out, "effective:")?;
    writeln!(out, "{}", effective)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Single-shot commands
// ---------------------------------------------------------------------------

pub fn catalog<W: Write>(config: MenuConfig, out: &mut W) -> Result<()> {
    let mut desk = open_desk(config)?;
    flush_notices(&mut desk, out)?;
    write_form(&desk, out)
}

pub fn about<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{}",
        format_notice(&Notice::about(env!("CARGO_PKG_VERSION")))
    )?;
    Ok(())
}

pub fn settings<W: Write>(loaded: &LoadedConfig, config: &MenuConfig, out: &mut W) -> Result<()> {
    write_settings(loaded, config, out)
}
