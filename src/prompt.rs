// File: src/prompt.rs

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand<'a> {
    Exit,
    Empty,
    Help,
    Stats,
    Search(&'a str),
    Add { term: &'a str, definition: &'a str },
    Upload(&'a str),
    Download(&'a str),
    /// Anything else is text to simplify, kept whole.
    Text(&'a str),
}

impl<'a> PromptCommand<'a> {
    /// Commands are `:name args`; only the bare word `exit` quits, so text
    /// that merely starts with "exit" is still simplified.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return PromptCommand::Empty;
        }
        if line == "exit" {
            return PromptCommand::Exit;
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match name {
            ":help" => PromptCommand::Help,
            ":stats" => PromptCommand::Stats,
            ":search" => PromptCommand::Search(rest),
            ":add" => {
                // `:add term = definition`
                let (term, definition) = rest.split_once('=').unwrap_or((rest, ""));
                PromptCommand::Add {
                    term: term.trim(),
                    definition: definition.trim(),
                }
            }
            ":upload" => PromptCommand::Upload(rest),
            ":download" => PromptCommand::Download(if rest.is_empty() { "." } else { rest }),
            _ => PromptCommand::Text(line),
        }
    }
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
