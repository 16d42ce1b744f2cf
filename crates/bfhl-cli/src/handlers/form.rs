use anyhow::Result;
use bfhl_runtime::{Config, FormSession, Transport};
use bfhl_types::FilterSelection;
use std::io::{BufRead, Write};
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::FormReplyViewModel;

/// One line of form input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormCommand {
    Input(String),
    File(String),
    ClearFile,
    Filter(String),
    Submit,
    Apply,
    Show,
    State,
    Help,
    Quit,
    Blank,
}

impl FormCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        // `raw` is everything after the first whitespace character, untouched.
        let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        match word {
            "" => Ok(FormCommand::Blank),
            "input" => Ok(FormCommand::Input(raw.to_string())),
            "file" if rest.is_empty() => Err("Usage: file <path>".to_string()),
            "file" => Ok(FormCommand::File(rest.to_string())),
            "clear-file" => Ok(FormCommand::ClearFile),
            "filter" => Ok(FormCommand::Filter(rest.to_string())),
            "submit" => Ok(FormCommand::Submit),
            "apply" => Ok(FormCommand::Apply),
            "show" => Ok(FormCommand::Show),
            "state" => Ok(FormCommand::State),
            "help" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" => Ok(FormCommand::Quit),
            other => Err(format!(
                "Unknown command '{}'. Type 'help' for commands.",
                other
            )),
        }
    }
}

/// Run the form on `input` until EOF or `quit`.
///
/// The runtime drives file reads and submissions one at a time, so the
/// session is never borrowed across two requests.
pub fn handle<R: BufRead>(
    runtime: &Runtime,
    config: &Config,
    transport: &dyn Transport,
    input: R,
    interactive: bool,
    renderer: &impl Renderer,
) -> Result<()> {
    let mut session = FormSession::with_selection(config.default_filters.clone());

    if interactive {
        renderer.render(presenters::present_form_help())?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                renderer.render(presenters::present_form_reply(FormReplyViewModel::Error {
                    message,
                }))?;
                continue;
            }
        };
        debug!(?command, "form command");

        match command {
            FormCommand::Blank => {}
            FormCommand::Quit => break,
            FormCommand::Help => renderer.render(presenters::present_form_help())?,
            FormCommand::State => renderer.render(presenters::present_form_state(&session))?,
            command => {
                for reply in execute(runtime, transport, &mut session, command) {
                    renderer.render(presenters::present_form_reply(reply))?;
                }
            }
        }
    }

    Ok(())
}

fn execute(
    runtime: &Runtime,
    transport: &dyn Transport,
    session: &mut FormSession,
    command: FormCommand,
) -> Vec<FormReplyViewModel> {
    match command {
        FormCommand::Input(text) => {
            let chars = text.chars().count();
            session.set_raw_input(text);
            vec![FormReplyViewModel::InputSet { chars }]
        }

        FormCommand::File(path) => match runtime.block_on(session.set_file(Path::new(&path))) {
            Ok(()) => vec![FormReplyViewModel::FileSelected {
                bytes: session
                    .encoded_file()
                    .map(|file| file.decoded_len())
                    .unwrap_or_default(),
                path,
            }],
            Err(err) => vec![FormReplyViewModel::Error {
                message: err.user_message().to_string(),
            }],
        },

        FormCommand::ClearFile => {
            session.clear_file();
            vec![FormReplyViewModel::FileCleared]
        }

        FormCommand::Filter(list) => match FilterSelection::parse_list(&list) {
            Ok(selection) => {
                let filters = selection
                    .iter()
                    .map(|field| field.key().to_string())
                    .collect();
                session.set_filter_selection(selection);
                vec![FormReplyViewModel::FiltersSet { filters }]
            }
            Err(err) => vec![FormReplyViewModel::Error {
                message: err.to_string(),
            }],
        },

        FormCommand::Submit => match runtime.block_on(session.submit(transport)) {
            Ok(()) => {
                let mut replies = vec![FormReplyViewModel::Submitted {
                    generation: session.issued_generations(),
                    fields: session.response().map(|r| r.len()).unwrap_or_default(),
                }];
                if let Some(display) = session.render() {
                    replies.push(FormReplyViewModel::Display { display });
                }
                replies
            }
            Err(err) => vec![FormReplyViewModel::Error {
                message: err.user_message().to_string(),
            }],
        },

        FormCommand::Apply => {
            if session.response().is_none() {
                return vec![FormReplyViewModel::Notice {
                    message: "Nothing to filter yet; submit first.".to_string(),
                }];
            }
            session.apply_filters();
            show(session)
        }

        FormCommand::Show => show(session),

        FormCommand::State | FormCommand::Help | FormCommand::Quit | FormCommand::Blank => {
            Vec::new()
        }
    }
}

fn show(session: &FormSession) -> Vec<FormReplyViewModel> {
    match session.render() {
        Some(display) => vec![FormReplyViewModel::Display { display }],
        None => vec![FormReplyViewModel::Notice {
            message: "No response yet.".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            FormCommand::parse(r#"input {"data": ["A", "1"]}"#),
            Ok(FormCommand::Input(r#"{"data": ["A", "1"]}"#.to_string()))
        );
        assert_eq!(
            FormCommand::parse("file  ./photo.png "),
            Ok(FormCommand::File("./photo.png".to_string()))
        );
        assert_eq!(
            FormCommand::parse("filter alphabets,numbers"),
            Ok(FormCommand::Filter("alphabets,numbers".to_string()))
        );
    }

    #[test]
    fn input_text_is_kept_verbatim() {
        assert_eq!(
            FormCommand::parse("input   {\"data\": []}  "),
            Ok(FormCommand::Input("  {\"data\": []}  ".to_string()))
        );
        assert_eq!(
            FormCommand::parse("input\t{\"data\": [\" a \"]}"),
            Ok(FormCommand::Input("{\"data\": [\" a \"]}".to_string()))
        );
    }

    #[test]
    fn bare_filter_clears_and_bare_input_empties() {
        assert_eq!(
            FormCommand::parse("filter"),
            Ok(FormCommand::Filter(String::new()))
        );
        assert_eq!(FormCommand::parse("input"), Ok(FormCommand::Input(String::new())));
    }

    #[test]
    fn keywords_and_aliases() {
        assert_eq!(FormCommand::parse("  submit "), Ok(FormCommand::Submit));
        assert_eq!(FormCommand::parse("clear-file"), Ok(FormCommand::ClearFile));
        assert_eq!(FormCommand::parse("?"), Ok(FormCommand::Help));
        assert_eq!(FormCommand::parse("exit"), Ok(FormCommand::Quit));
        assert_eq!(FormCommand::parse(""), Ok(FormCommand::Blank));
    }

    #[test]
    fn file_requires_a_path_and_unknown_words_fail() {
        assert!(FormCommand::parse("file").is_err());
        let err = FormCommand::parse("send").unwrap_err();
        assert!(err.contains("'send'"));
    }
}
