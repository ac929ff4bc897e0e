//! Консольный ввод-вывод с комбинатором «проверь или переспроси».
//!
//! `Console` обобщена по `BufRead`/`Write`: в бинарнике это stdin/stdout,
//! в тестах – `Cursor` со сценарием и `Vec<u8>` для вывода.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;

use crate::engine::EngineError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Вывести строку.
    pub fn say(&mut self, msg: impl Display) -> Result<(), EngineError> {
        writeln!(self.output, "{msg}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Прочитать строку без перевода строки. EOF – `InputClosed`.
    pub fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Задать вопрос и переспрашивать, пока `parse` не примет ответ.
    /// Ошибка `parse` – текст, который увидит пользователь.
    pub fn ask<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, EngineError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(msg) => {
                    debug!("console: ввод {line:?} отклонён: {msg}");
                    self.say(msg)?;
                }
            }
        }
    }

    /// Вопрос да/нет.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, EngineError> {
        self.ask(prompt, parse_yes_no)
    }
}

/// "y" / "n" без учёта регистра и пробелов по краям.
pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err("Invalid choice. Try again.".to_string()),
    }
}
