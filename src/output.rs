use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as the disposal manifest which users read line by line.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Print a phase banner such as `[FINISHED]` followed by a message.
pub fn print_banner(tag: &str, msg: &str) {
    if is_tty() {
        println!("{} {}", format!("[{tag}]").bold(), msg);
    } else {
        println!("[{}] {}", tag, msg);
    }
}

/// Block until the user sends one line of input (acknowledgment). The tool is
/// typically launched in its own console window from a file manager, so errors
/// would vanish with the window without this.
pub fn pause() {
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
