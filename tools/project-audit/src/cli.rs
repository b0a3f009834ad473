use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "project-audit", version, about = "Audit a project folder for common hygiene problems")]
pub struct Cli {
    /// Folder to audit. Prompted for when omitted.
    #[arg(long = "root-dir", value_name = "PATH")]
    pub root_dir: Option<PathBuf>,

    /// Print the results as JSON instead of the colored report.
    #[arg(long)]
    pub json: bool,

    /// Delete empty folders without asking.
    #[arg(long)]
    pub delete_empty: bool,

    /// Never ask anything. Empty folders are kept unless --delete-empty is set.
    #[arg(long)]
    pub no_prompt: bool,
}

pub const ROOT_PROMPT: &str = "Please enter the path of the project folder to audit:";
pub const NOT_A_DIRECTORY: &str = "Folder does not exist or is not a directory";

/// Ask for a folder until the answer names an existing directory. Empty input means `.`.
pub fn prompt_root_dir<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    loop {
        write!(output, "{} (.) ", ROOT_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no folder given"));
        }

        let answer = line.trim();
        let candidate = if answer.is_empty() { "." } else { answer };
        if Path::new(candidate).is_dir() {
            return Ok(PathBuf::from(candidate));
        }
        writeln!(output, "{}", NOT_A_DIRECTORY)?;
    }
}

/// Yes/no question defaulting to no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
