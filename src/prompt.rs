//! Interactive console prompts used when the command line leaves choices open.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{GenerateError, GenerateResult};
use crate::models::ManifestKind;

/// Line-oriented prompter over any input and output pair.
pub struct Prompter<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  /// Create a prompter reading answers from `input` and printing to `output`.
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Ask which manifest kind to generate, repeating until the answer is valid.
  pub fn choose_kind(&mut self) -> GenerateResult<ManifestKind> {
    self.say("Select CSV Type:\n")?;
    self.say(&format!("  [1] {}\n", ManifestKind::Map.label()))?;
    self.say(&format!("  [2] {}\n", ManifestKind::Normal.label()))?;

    loop {
      match self.ask("Enter number: ")?.as_str() {
        "1" => return Ok(ManifestKind::Map),
        "2" => return Ok(ManifestKind::Normal),
        _ => continue,
      }
    }
  }

  /// Ask for one of the candidate folders, repeating until the answer is valid.
  pub fn choose_folder(&mut self, folders: &[PathBuf]) -> GenerateResult<PathBuf> {
    self.say("Select a folder:\n")?;
    for (index, folder) in folders.iter().enumerate() {
      let name = folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
      self.say(&format!("  [{}] {}\n", index + 1, name))?;
    }

    loop {
      let answer = self.ask("Enter number: ")?;
      if let Ok(choice) = answer.parse::<usize>() {
        if (1..=folders.len()).contains(&choice) {
          return Ok(folders[choice - 1].clone());
        }
      }
    }
  }

  /// Ask a yes/no question; answers starting with `y` or `Y` mean yes.
  pub fn confirm(&mut self, question: &str) -> GenerateResult<bool> {
    let answer = self.ask(&format!("{question} (Y/N): "))?;
    Ok(answer.starts_with(['y', 'Y']))
  }

  /// Print a message without waiting for input.
  pub fn say(&mut self, message: &str) -> GenerateResult<()> {
    self
      .output
      .write_all(message.as_bytes())
      .and_then(|_| self.output.flush())
      .map_err(|err| GenerateError::io("<stdout>", err))
  }

  fn ask(&mut self, prompt: &str) -> GenerateResult<String> {
    self.say(prompt)?;
    let mut line = String::new();
    let read = self
      .input
      .read_line(&mut line)
      .map_err(|err| GenerateError::io("<stdin>", err))?;
    if read == 0 {
      return Err(GenerateError::InputClosed);
    }
    Ok(line.trim().to_string())
  }
}
