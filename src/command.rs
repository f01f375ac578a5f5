use crate::color::Rgba;
use crate::error::CommandError;
use crate::paint::Mode;

pub const HELP: &str = "\
grid [W H]     build a grid (from width/height when no size given)
width N        set grid width      height N   set grid height
clear          remove the grid
paint | erase  select tool
color #rrggbb  set paint color
status         show current settings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate { size: Option<(u32, u32)> },
    SetWidth(u32),
    SetHeight(u32),
    Clear,
    SetMode(Mode),
    SetColor(Rgba),
    Status,
    Help,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut words = input.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match keyword.as_str() {
            "grid" | "generate" => match args.as_slice() {
                [] => Ok(Command::Generate { size: None }),
                [width, height] => Ok(Command::Generate {
                    size: Some((parse_number(width)?, parse_number(height)?)),
                }),
                _ => Err(CommandError::MissingArgument {
                    command: "grid",
                    expected: "a width and a height",
                }),
            },
            "width" => Ok(Command::SetWidth(single_number(&args, "width")?)),
            "height" => Ok(Command::SetHeight(single_number(&args, "height")?)),
            "clear" => Ok(Command::Clear),
            "paint" => Ok(Command::SetMode(Mode::Paint)),
            "erase" => Ok(Command::SetMode(Mode::Erase)),
            "color" | "colour" => {
                let value = args.first().ok_or(CommandError::MissingArgument {
                    command: "color",
                    expected: "a hex color like #ff0000",
                })?;
                Ok(Command::SetColor(value.parse()?))
            }
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            _ => Err(CommandError::Unknown(keyword)),
        }
    }
}

fn single_number(args: &[&str], command: &'static str) -> Result<u32, CommandError> {
    match args {
        [value] => parse_number(value),
        _ => Err(CommandError::MissingArgument {
            command,
            expected: "one whole number",
        }),
    }
}

fn parse_number(value: &str) -> Result<u32, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn parses_grid_forms() {
        assert_eq!(Command::parse("grid"), Ok(Command::Generate { size: None }));
        assert_eq!(
            Command::parse("  GRID 16   8 "),
            Ok(Command::Generate { size: Some((16, 8)) })
        );
        assert_eq!(
            Command::parse("generate 5 0"),
            Ok(Command::Generate { size: Some((5, 0)) })
        );
        assert!(matches!(
            Command::parse("grid 4"),
            Err(CommandError::MissingArgument { command: "grid", .. })
        ));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(Command::parse("clear"), Ok(Command::Clear));
        assert_eq!(Command::parse("paint"), Ok(Command::SetMode(Mode::Paint)));
        assert_eq!(Command::parse("Erase"), Ok(Command::SetMode(Mode::Erase)));
        assert_eq!(Command::parse("width 12"), Ok(Command::SetWidth(12)));
        assert_eq!(Command::parse("height 0"), Ok(Command::SetHeight(0)));
        assert_eq!(
            Command::parse("color #00ff00"),
            Ok(Command::SetColor(Rgba::rgb(0, 255, 0)))
        );
        assert_eq!(Command::parse("help"), Ok(Command::Help));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("fill 1 2"),
            Err(CommandError::Unknown("fill".to_string()))
        );
        assert_eq!(
            Command::parse("width -3"),
            Err(CommandError::InvalidNumber("-3".to_string()))
        );
        assert_eq!(
            Command::parse("color red"),
            Err(CommandError::Color(ColorError::Invalid("red".to_string())))
        );
        assert!(matches!(
            Command::parse("color"),
            Err(CommandError::MissingArgument { command: "color", .. })
        ));
    }
}
