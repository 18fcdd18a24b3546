use common::games::tictactoe::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Move { row: usize, col: usize },
    Reset,
    SetVsComputer(bool),
    SetDifficulty(Difficulty),
    Status,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>             place a mark, rows and columns are 0-2
  move <row> <col>        same as above
  reset                   start a new game
  computer on|off         play against the computer (O) or another human
  difficulty easy|hard    choose the computer's difficulty
  status                  redraw the board
  help                    show this text
  quit                    leave the game";

/// `Ok(None)` for blank input.
pub fn parse_command(line: &str) -> Result<Option<ClientCommand>, String> {
    let words: Vec<String> = line
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    let command = match words.as_slice() {
        [] => return Ok(None),
        ["reset"] | ["r"] => ClientCommand::Reset,
        ["computer", "on"] => ClientCommand::SetVsComputer(true),
        ["computer", "off"] => ClientCommand::SetVsComputer(false),
        ["computer", ..] => return Err("'computer' takes on or off".to_string()),
        ["difficulty", level] => ClientCommand::SetDifficulty(level.parse()?),
        ["status"] => ClientCommand::Status,
        ["help"] | ["?"] => ClientCommand::Help,
        ["quit"] | ["exit"] | ["q"] => ClientCommand::Quit,
        ["move", row, col] | [row, col] => ClientCommand::Move {
            row: parse_index(row)?,
            col: parse_index(col)?,
        },
        _ => return Err(format!("Unknown command '{}'", line.trim())),
    };

    Ok(Some(command))
}

fn parse_index(word: &str) -> Result<usize, String> {
    word.parse()
        .map_err(|_| format!("'{}' is not a row or column number", word))
}
