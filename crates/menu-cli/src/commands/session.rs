//! `menu session`: line-driven front end over one desk.
//!
//! Each input line is one user action. Bad input is answered and the loop
//! goes on; only end of input or `quit` ends it.

use anyhow::Result;
use menu_config::{LoadedConfig, MenuConfig};
use std::io::{BufRead, Write};

use super::order::write_change;
use super::{flush_notices, open_desk, write_form, write_settings, Desk};

const HELP: &str = "\
commands:
  show                 print the order form
  set <qty> <item>     set an item's quantity (clamped to what its category allows)
  clear                reset every quantity to 0
  place                place the current selection as one order
  history              print the order history
  export [path]        export the history (.csv selects CSV, anything else text)
  about                version information
  settings             effective configuration and its hash
  help                 this text
  quit                 leave";

#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    Show,
    Set { qty: &'a str, item: &'a str },
    Clear,
    Place,
    History,
    Export(Option<&'a str>),
    About,
    Settings,
    Help,
    Quit,
    Blank,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Action<'_> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Action::Blank,
        "show" => Action::Show,
        "set" => match rest.split_once(char::is_whitespace) {
            Some((qty, item)) => Action::Set {
                qty,
                item: item.trim(),
            },
            None => Action::Unknown(line),
        },
        "clear" => Action::Clear,
        "place" => Action::Place,
        "history" => Action::History,
        "export" if rest.is_empty() => Action::Export(None),
        "export" => Action::Export(Some(rest)),
        "about" => Action::About,
        "settings" => Action::Settings,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        _ => Action::Unknown(line),
    }
}

pub fn run_session<R: BufRead, W: Write>(
    config: MenuConfig,
    loaded: &LoadedConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut desk = open_desk(config)?;
    flush_notices(&mut desk, out)?;
    writeln!(out, "type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        if !step(&mut desk, loaded, &line, out)? {
            break;
        }
        flush_notices(&mut desk, out)?;
    }
    Ok(())
}

/// Handle one line; `false` ends the session.
fn step<W: Write>(
    desk: &mut Desk,
    loaded: &LoadedConfig,
    line: &str,
    out: &mut W,
) -> Result<bool> {
    match parse_line(line) {
        Action::Blank => {}
        Action::Show => write_form(desk, out)?,
        Action::Set { qty, item } => match qty.parse::<u32>() {
            Ok(qty) => match desk.set_quantity(item, qty) {
                Ok(change) => write_change(&change, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Err(_) => writeln!(out, "invalid quantity '{qty}'")?,
        },
        Action::Clear => {
            desk.clear();
            writeln!(out, "selection cleared")?;
        }
        Action::Place => {
            desk.place_order();
        }
        Action::History => write!(out, "{}", desk.history_view())?,
        Action::Export(path) => {
            let path = path
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| desk.default_export_path());
            let _ = desk.export(path);
        }
        Action::About => desk.about(),
        Action::Settings => write_settings(loaded, desk.config(), out)?,
        Action::Help => writeln!(out, "{HELP}")?,
        Action::Quit => return Ok(false),
        Action::Unknown(raw) => writeln!(out, "unknown command '{raw}'; type 'help'")?,
    }
    Ok(true)
}
