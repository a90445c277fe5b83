mod args;

use anyhow::Context;
use codeblocker::{Closing, Options, Reindenter};
use std::io::{Read, Write};

fn main() -> anyhow::Result<()> {
    let arguments = args::arguments();

    let closing = if arguments.no_semicolon {
        Closing::Brace
    } else {
        Closing::BraceSemicolon
    };
    let options = Options::default()
        .indent(arguments.indent_string())
        .closing(closing);

    let mut reindenter = Reindenter::new(options);
    if arguments.verbose {
        // Keep stdout clean for the code unless it goes to a file
        reindenter = if arguments.output_file.is_some() {
            reindenter.log(Box::new(std::io::stdout()))
        } else {
            reindenter.log(Box::new(std::io::stderr()))
        };
    }

    let mut output = String::new();
    if arguments.source_files.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        output.push_str(
            &reindenter
                .reindent(&content)
                .context("Could not re-indent input")?,
        );
    } else {
        for source_file in &arguments.source_files {
            let content = std::fs::read_to_string(source_file)
                .with_context(|| format!("Could not read file {}", source_file.display()))?;
            output.push_str(&reindenter.reindent(&content).with_context(|| {
                format!("Could not re-indent file {}", source_file.display())
            })?);
        }
    }

    if let Some(output_file) = &arguments.output_file {
        std::fs::write(output_file, output)
            .with_context(|| format!("Could not write file {}", output_file.display()))?;
    } else {
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
