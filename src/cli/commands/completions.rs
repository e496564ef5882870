use crate::cli::parser::Cli;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

pub fn handle(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
}
