//! Console command parsing.

use tamago_types::{PetAction, SpeedMultiplier};

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Apply a care action other than sleep/wake.
    Act(PetAction),
    /// Put the pet to sleep; ignored if already asleep.
    Sleep,
    /// Wake the pet; ignored if already awake.
    Wake,
    /// Pause or resume ticking.
    TogglePause,
    /// Change the speed multiplier.
    Speed(SpeedMultiplier),
    /// Hatch a new pet.
    Reset,
    /// Print the pet.
    Status,
    /// Print the raw snapshot as JSON.
    StatusJson,
    /// List the commands.
    Help,
    /// Exit.
    Quit,
}

/// Why a console line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The first word is not a command.
    #[error("unknown command `{word}` (try `help`)")]
    Unknown {
        /// The unrecognised word.
        word: String,
    },

    /// `speed` was given something other than 0.5, 1 or 2.
    #[error("unsupported speed `{value}` (choose 0.5, 1 or 2)")]
    BadSpeed {
        /// The rejected argument.
        value: String,
    },

    /// `speed` was given no argument.
    #[error("`speed` needs a value: 0.5, 1 or 2")]
    MissingSpeed,
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  feed | play | clean | discipline | medicine
  sleep | wake
  pause             toggle pause
  speed <0.5|1|2>   set the speed multiplier
  reset             hatch a new pet
  status [json]     show the pet
  help              this list
  quit";

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<ConsoleCommand>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };
    let command = match first.to_ascii_lowercase().as_str() {
        "feed" => ConsoleCommand::Act(PetAction::Feed),
        "play" => ConsoleCommand::Act(PetAction::Play),
        "clean" => ConsoleCommand::Act(PetAction::Clean),
        "discipline" => ConsoleCommand::Act(PetAction::Discipline),
        "medicine" => ConsoleCommand::Act(PetAction::Medicine),
        "sleep" => ConsoleCommand::Sleep,
        "wake" => ConsoleCommand::Wake,
        "pause" | "resume" => ConsoleCommand::TogglePause,
        "speed" => ConsoleCommand::Speed(parse_speed(words.next())?),
        "reset" => ConsoleCommand::Reset,
        "status" => match words.next() {
            Some(arg) if arg.eq_ignore_ascii_case("json") => ConsoleCommand::StatusJson,
            _ => ConsoleCommand::Status,
        },
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        _ => {
            return Err(ParseError::Unknown {
                word: first.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

fn parse_speed(arg: Option<&str>) -> Result<SpeedMultiplier, ParseError> {
    let value = arg.ok_or(ParseError::MissingSpeed)?;
    match value.trim_end_matches(['x', 'X']) {
        "0.5" | ".5" => Ok(SpeedMultiplier::Half),
        "1" | "1.0" => Ok(SpeedMultiplier::Normal),
        "2" | "2.0" => Ok(SpeedMultiplier::Double),
        _ => Err(ParseError::BadSpeed {
            value: value.to_owned(),
        }),
    }
}
