//! Interactive tour of the prompt widgets. Run with `cargo run --example menu`.

use spark_prompt::{Prompt, Result};

fn main() -> Result<()> {
    let mut prompt = Prompt::stdio();

    let themes = ["terminal", "dracula", "nord", "gruvbox"];
    let picked = prompt.select("Color theme", &themes)?;

    let name = prompt.read_line("Project name", "untitled")?;

    if prompt.confirm("Generate configuration?")? {
        prompt.success(&format!("{name} configured with the {} theme", themes[picked]))?;
    } else {
        prompt.failure("aborted, nothing written")?;
    }

    Ok(())
}
