use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use rustyline::history::History;

use crate::ai::chat::{ChatTurn, SpeciesChat};
use crate::core::AppConfig;

/// Trim a line read from the prompt and record it in the line editor's
/// history. Returns `None` for blank lines, which aren't recorded.
fn accept_line<'a>(history: &mut impl History, line: &'a str) -> Result<Option<&'a str>> {
    let message = line.trim();
    if message.is_empty() {
        return Ok(None);
    }
    history.add(message)?;
    Ok(Some(message))
}

pub async fn run() -> Result<()> {
    // Fail before prompting if the API key is missing
    let config = AppConfig::from_env()?;
    let chat = SpeciesChat::from_config(&config)?;

    let mut rl = DefaultEditor::new()?;
    let mut history: Vec<ChatTurn> = Vec::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let Some(message) = accept_line(rl.history_mut(), &line)? else {
                    continue;
                };

                let resp = chat.respond(message, &history).await;
                println!("{}", resp);

                // Refusals and error messages are kept too, the
                // same as what the user saw
                history.push(ChatTurn::user(message));
                history.push(ChatTurn::assistant(&resp));
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
