use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    council completions bash > ~/.bash_completion.d/council\n\n\
                  Generate zsh completions:\n    council completions zsh > ~/.zfunc/_council\n\n\
                  Generate fish completions:\n    council completions fish > ~/.config/fish/completions/council.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
