use std::io::Write;
use std::sync::Arc;

use lexi_types::{LookupState, Snapshot};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::LookupHandle;
use crate::render::{RenderOptions, render};
use crate::state::AppState;

const HELP: &str = "\
Type a word to look it up.
  :clear  reset the current result
  :help   show this message
  :quit   exit";

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub render: RenderOptions,
}

/// Look up a single word and print the settled result.
/// Returns false when the lookup ended in a failure.
pub async fn lookup_once(handle: &LookupHandle, word: &str, output: Output) -> anyhow::Result<bool> {
    let snapshot = handle.lookup(word).await?;
    print_snapshot(&snapshot, output)?;
    Ok(!matches!(snapshot.state, LookupState::Failure { .. }))
}

/// Interactive prompt, reading one command or word per line until EOF or `:quit`
pub async fn ui_loop(
    state: Arc<AppState>,
    handle: LookupHandle,
    output: Output,
) -> anyhow::Result<()> {
    let prompt = state.config.read().await.ui.prompt.clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !output.json {
        println!("{HELP}");
    }

    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            ":q" | ":quit" | ":exit" => break,
            ":h" | ":help" => println!("{HELP}"),
            ":c" | ":clear" => {
                tracing::debug!(generation = handle.snapshot().generation, "Clearing lookup");
                handle.clear().await?;
            }
            _ => {
                let snapshot = handle.lookup(line.as_str()).await?;
                print_snapshot(&snapshot, output)?;
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, output: Output) -> anyhow::Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(&snapshot.state)?);
        return Ok(());
    }

    let text = render(&snapshot.state, output.render);
    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    Ok(())
}
