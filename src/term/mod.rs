/*!
## Rust Terminal Module

A line oriented host for the calculator. Every line typed is a key
script: each character is a key, and `[name]` is a named key such as
`[sqrt]` or `[m+]`. After each line the expression and operand are
shown right aligned, like the two rows of a desk calculator display.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::mach::{Calculator, Display, Event, Key};
use ansi_term::{Colour, Style};
use linefeed::interface::Interface;
use linefeed::reader::ReadResult;
use tracing::debug;

const WIDTH: usize = 24;

pub fn main_loop(mut calculator: Calculator, plain: bool) -> std::io::Result<()> {
    let interface = Interface::new("deskcalc")?;
    interface.set_prompt("> ")?;
    interface.write_fmt(format_args!(
        "{}\n{}\n",
        decorate_mode(&calculator.angle_mode().to_string(), plain),
        decorate_display(&calculator.display(), plain)
    ))?;
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let keys = match keys(&string) {
            Ok(keys) => keys,
            Err(bad) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("UNKNOWN KEY {}", bad))
                ))?;
                continue;
            }
        };
        if !string.trim().is_empty() {
            interface.add_history_unique(string);
        }
        let mut display: Option<Display> = None;
        for key in keys {
            match calculator.press(key) {
                Event::Display(d) => display = Some(d),
                Event::Mode(mode) => {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        decorate_mode(&mode.to_string(), plain)
                    ))?;
                }
                Event::Shift(on) => {
                    let label = if on { "SHIFT" } else { "     " };
                    interface.write_fmt(format_args!("{}\n", decorate_mode(label, plain)))?;
                }
                Event::Unchanged => debug!(?key, "key ignored"),
            }
        }
        if let Some(display) = display {
            interface.write_fmt(format_args!("{}\n", decorate_display(&display, plain)))?;
        }
    }
    Ok(())
}

/// Split a key script into keys. Whitespace separates nothing and is
/// skipped. Returns the offending text when a key is not recognized.
pub fn keys(script: &str) -> Result<Vec<Key>, String> {
    let mut v: Vec<Key> = vec![];
    let mut chars = script.chars();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        if ch == '[' {
            let name: String = chars.by_ref().take_while(|c| *c != ']').collect();
            match Key::from_name(name.trim()) {
                Some(key) => v.push(key),
                None => return Err(format!("[{}]", name)),
            }
            continue;
        }
        match Key::from_char(ch) {
            Some(key) => v.push(key),
            None => return Err(ch.to_string()),
        }
    }
    Ok(v)
}

fn decorate_display(display: &Display, plain: bool) -> String {
    let expression = format!("{:>w$}", display.expression, w = WIDTH);
    let operand = format!("{:>w$}", display.operand, w = WIDTH);
    if plain {
        return format!("{}\n{}", expression, operand);
    }
    let style = if display.error {
        Colour::Red.bold()
    } else {
        Style::new().bold()
    };
    format!(
        "{}\n{}",
        Style::new().dimmed().paint(expression),
        style.paint(operand)
    )
}

fn decorate_mode(label: &str, plain: bool) -> String {
    if plain {
        return format!("[{}]", label);
    }
    format!("{}", Colour::Cyan.paint(format!("[{}]", label)))
}
