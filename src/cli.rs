/*!
Command-line interface

With no subcommand the binary runs the demo; the subcommands poke at the
day and animal types directly.
*/

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::animal::{Animal, Cat, Dog, Pet};
use crate::day::Day;
use crate::demo;
use crate::error::DemoResult;
use crate::named::Named;
use crate::output::LineSink;

#[derive(Debug, Parser)]
#[command(name = "weekday-demo", version, about)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the days with their abbreviations
    Days,

    /// Resolve an abbreviation such as "Wed." or "Wed"
    Lookup { abbreviation: String },

    /// Make an animal speak
    Speak {
        #[arg(value_enum)]
        species: Species,

        /// Give the animal a name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    fn animal(self) -> Box<dyn Animal> {
        match self {
            Species::Dog => Box::new(Dog),
            Species::Cat => Box::new(Cat),
        }
    }
}

/// Run `command` against `sink`; `None` runs the demo
pub fn execute(command: Option<&Command>, sink: &mut dyn LineSink) -> DemoResult<()> {
    match command {
        None => demo::run(sink),
        Some(Command::Days) => list_days(sink),
        Some(Command::Lookup { abbreviation }) => {
            let day = Day::from_abbreviation(abbreviation)?;
            sink.write_line(day.symbolic_name())?;
            Ok(())
        }
        Some(Command::Speak { species, name }) => speak(*species, name.as_deref(), sink),
        Some(Command::Completions { shell }) => completions(*shell, sink),
    }
}

fn list_days(sink: &mut dyn LineSink) -> DemoResult<()> {
    for day in Day::all_values() {
        let kind = if day.is_weekend() { "weekend" } else { "weekday" };
        let line = format!(
            "{} {} {} {}",
            day.ordinal(),
            day,
            day.abbreviation(),
            kind
        );
        sink.write_line(&line)?;
    }
    Ok(())
}

fn completions(shell: Shell, sink: &mut dyn LineSink) -> DemoResult<()> {
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "weekday-demo", &mut script);
    for line in String::from_utf8_lossy(&script).lines() {
        sink.write_line(line)?;
    }
    Ok(())
}

fn speak(species: Species, name: Option<&str>, sink: &mut dyn LineSink) -> DemoResult<()> {
    let animal = species.animal();
    match name {
        Some(name) => {
            let pet = Pet::new(animal, name);
            pet.speak(sink)?;
            sink.write_line(&format!("{} the {}", pet.name(), pet.animal_name()))?;
        }
        None => animal.speak(sink)?,
    }
    Ok(())
}
