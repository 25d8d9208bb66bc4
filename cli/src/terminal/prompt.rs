//! Blocking line prompts with caller-supplied validation.
//!
//! Invalid input warns and asks again; a loop only ends on valid input or
//! a closed stdin.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

use anyhow::Context;
use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rangr_common::network::adapter::Adapter;
use rangr_common::network::addr;
use rangr_common::network::plan::MAX_PREFIX_LEN;
use tracing::warn;

use crate::terminal::{colors, format};

fn read_line(label: &str) -> anyhow::Result<String> {
    print!(
        "{} {}: ",
        "?".color(colors::ACCENT).bold(),
        label.color(colors::PRIMARY)
    );
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    if read == 0 {
        anyhow::bail!("stdin closed before input was complete");
    }
    Ok(line.trim().to_string())
}

/// Asks until `parse` accepts the input.
pub fn until_valid<T, E: Display>(
    label: &str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> anyhow::Result<T> {
    loop {
        let line = read_line(label)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => warn!("{e}"),
        }
    }
}

pub fn ipv4(label: &str) -> anyhow::Result<Ipv4Addr> {
    until_valid(label, addr::parse)
}

/// Empty input skips the field.
pub fn optional_ipv4(label: &str) -> anyhow::Result<Option<Ipv4Addr>> {
    until_valid(label, |line| {
        if line.is_empty() {
            return Ok(None);
        }
        addr::parse(line).map(Some)
    })
}

pub fn prefix_len(label: &str) -> anyhow::Result<u8> {
    until_valid(label, parse_prefix_len)
}

fn parse_prefix_len(line: &str) -> Result<u8, String> {
    match line.parse::<u8>() {
        Ok(len) if len <= MAX_PREFIX_LEN => Ok(len),
        _ => Err(format!("'{line}' is not a prefix length in 0-32")),
    }
}

fn parse_index(line: &str, count: usize) -> Result<usize, String> {
    match line.parse::<usize>() {
        Ok(idx) if idx < count => Ok(idx),
        _ => Err(format!("'{line}' is not an index in 0-{}", count - 1)),
    }
}

/// Prints the adapters as an indexed list and asks for one.
pub fn select_adapter(adapters: &[Adapter]) -> anyhow::Result<Adapter> {
    for (idx, adapter) in adapters.iter().enumerate() {
        format::print_adapter(adapter, idx);
    }
    let idx = until_valid("Adapter number", |line| parse_index(line, adapters.len()))?;
    Ok(adapters[idx].clone())
}

/// Single-key yes/no; anything but 'y' declines, as does Ctrl-C.
pub fn confirm(label: &str) -> anyhow::Result<bool> {
    print!(
        "{} {} ",
        label.color(colors::PRIMARY),
        "[y/N]".color(colors::SEPARATOR)
    );
    io::stdout().flush().context("failed to flush stdout")?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let decision = loop {
        match event::read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                let is_ctrl_c = key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL);
                if is_ctrl_c {
                    break false;
                }
                match key_event.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => break true,
                    KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc => break false,
                    _ => {}
                }
            }
            Ok(_) => {}
            Err(_) => break false,
        }
    };
    disable_raw_mode().context("failed to disable raw mode")?;
    println!("{}", if decision { "y" } else { "n" });

    Ok(decision)
}
