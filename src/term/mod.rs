extern crate ansi_term;
extern crate linefeed;
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult, Signal};
use stacker::lang::{Error, Kind, Tag, Token};
use stacker::mach::Runtime;
use std::path::Path;

pub fn main() -> i32 {
    match main_loop() {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop() -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let interface = Interface::new("stacker")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);

    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(line.clone());
        let result = runtime.enter(&line);
        for out in runtime.take_output() {
            interface.write_fmt(format_args!("{}\n", out))?;
        }
        match result {
            Ok(_) => interface.write_fmt(format_args!("{}\n", render_state(&runtime)))?,
            Err(error) => interface.write_fmt(format_args!("{}\n", report(&line, &error)))?,
        }
    }
    Ok(())
}

pub fn run_file(path: &Path, show_stack: bool) -> i32 {
    match std::fs::read_to_string(path) {
        Ok(source) => run_source(&source, show_stack),
        Err(error) => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("{}: {}", path.display(), error))
            );
            1
        }
    }
}

pub fn run_source(source: &str, show_stack: bool) -> i32 {
    let mut runtime = Runtime::default();
    let result = runtime.enter(source);
    for line in runtime.take_output() {
        println!("{}", line);
    }
    match result {
        Ok(top) => {
            if show_stack {
                println!("{}", render_state(&runtime));
            } else if let Some(top) = top {
                println!("{}", paint(&top));
            }
            0
        }
        Err(error) => {
            eprintln!("{}", report(source, &error));
            1
        }
    }
}

fn paint(token: &Token) -> String {
    let text = token.serialize();
    let tags = token.tags();
    let colour = if token.kind() == Kind::Operator {
        Colour::Purple
    } else if tags.contains(Tag::Code) {
        Colour::Green
    } else if tags.contains(Tag::Number) {
        Colour::Yellow
    } else if tags.contains(Tag::Boolean) {
        Colour::Cyan
    } else {
        Colour::White
    };
    colour.paint(text).to_string()
}

fn render_state(runtime: &Runtime) -> String {
    let stack = runtime
        .stack()
        .iter()
        .map(paint)
        .collect::<Vec<_>>()
        .join(" ");
    let mut out = format!("{} {}", Style::new().dimmed().paint("stack:"), stack);
    if !runtime.memory().is_empty() {
        let registers = runtime
            .memory()
            .iter()
            .map(|(name, token)| format!("{}={}", name, paint(token)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("\n{} {}", Style::new().dimmed().paint("registers:"), registers));
    }
    out
}

/// Error message followed by the source line with the failing span
/// underlined.
fn report(source: &str, error: &Error) -> String {
    let mut out = Style::new().bold().paint(error.to_string()).to_string();
    let span = match error.span() {
        Some(span) if span.start <= source.len() => span.clone(),
        _ => return out,
    };
    let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);
    let line = &source[line_start..line_end];
    let start = span.start - line_start;
    let end = span.end.min(line_end).max(span.start) - line_start;
    if line_start > 0 || line_end < source.len() {
        let number = source[..line_start].matches('\n').count() + 1;
        let column = line[..start].chars().count() + 1;
        out.push_str(&format!("\nline {}, column {}:", number, column));
    }
    out.push('\n');
    out.push_str(&decorate(line, &(start..end.max(start + 1))));
    out
}

fn decorate(ins: &str, span: &std::ops::Range<usize>) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    for (index, char) in ins.char_indices() {
        let do_under = span.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(char);
    }
    if span.start >= ins.len() {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
