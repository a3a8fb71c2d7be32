//! Command registry
//!
//! Maps the first word of a line to the command it runs.

/// Every command the read loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Explore,
    Help,
    Map,
    MapBack,
}

/// A registered command together with its help text.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// Registered commands, sorted by name.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
        command: Command::Exit,
    },
    CommandSpec {
        name: "explore",
        description: "List the Pokemon found in a location area: explore <area>",
        command: Command::Explore,
    },
    CommandSpec {
        name: "help",
        description: "Prints this help message",
        command: Command::Help,
    },
    CommandSpec {
        name: "map",
        description: "View the next page of map locations",
        command: Command::Map,
    },
    CommandSpec {
        name: "mapb",
        description: "View the previous page of map locations",
        command: Command::MapBack,
    },
];

/// Looks up the command registered under `name`.
pub fn lookup(name: &str) -> Option<Command> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.command)
}
