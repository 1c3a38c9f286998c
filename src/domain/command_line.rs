//! Editor command line composition.

/// The command line used to open `target` in the configured editor.
///
/// The displayed form is the editor setting, one space, and the target, with
/// no quoting or escaping applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    editor: String,
    target: String,
}

impl EditorCommand {
    pub fn new(editor: impl Into<String>, target: impl Into<String>) -> Self {
        Self { editor: editor.into(), target: target.into() }
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Full command line as logged and as seen by the child process.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.editor, self.target)
    }

    /// Program and leading arguments taken from the editor setting, for platforms
    /// that cannot hand a whole command line to the OS.
    ///
    /// Tokens split on whitespace; a double-quoted run keeps its spaces. An empty
    /// setting yields an empty program, which fails to spawn.
    pub fn program_and_args(&self) -> (String, Vec<String>) {
        let mut tokens = split_tokens(&self.editor).into_iter();
        let program = tokens.next().unwrap_or_default();
        (program, tokens.collect())
    }

}

fn split_tokens(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}
