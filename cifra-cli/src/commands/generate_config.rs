//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        let template = self.generate_template();

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                println!("✓ Configuration template written to {}", path.display());
                println!();
                println!("Next steps:");
                println!("1. Edit the configuration file to choose a cipher and key");
                println!("2. Use it for translation:");
                println!("   cifra encrypt -c {} \"your message\"", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# Cipher configuration for cifra
#
# Exactly one of the [shift] and [substitution] sections may be present.

[shift]
# Alphabet preset to translate over. Run `cifra list alphabets` for the
# available names, or replace this line with an inline symbol list:
# symbols = ["a", "b", "c", "d"]
alphabet = "latin"

# Key, written in alphabet symbols. Defaults to the first alphabet symbol.
key = "abc"

# Offset added for each key symbol: its alphabet index ("zero") or the
# index plus one ("one").
index_basis = "one"

# Handling of symbols outside the alphabet: "fail" or "ignore".
on_conflict = "fail"

# Separator overrides. The defaults read every character as one symbol
# and split words on spaces.
# [shift.separators]
# symbol = ""
# word = " "

# A substitution cipher instead, from an embedded map preset:
# [substitution]
# map = "morse"
# on_conflict = "fail"

# Or with an inline pair table and per-side separators:
# [substitution]
# pairs = [
#     { plain = "a", cipher = ".-" },
#     { plain = "b", cipher = "-..." },
# ]
#
# [substitution.plain_separators]
# symbol = ""
# word = " "
#
# [substitution.cipher_separators]
# symbol = " "
# word = "/"
"#
        .to_string()
    }
}
