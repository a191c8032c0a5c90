pub mod args;
pub mod commands;
pub mod prompt;

pub use args::Args;
pub use commands::{open_cart, CliApp, MenuCommand};
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
