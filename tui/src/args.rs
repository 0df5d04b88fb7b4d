//! Parsing command-line arguments.

use crate::format;
use cca_lib::{Color, Config, World, WorldSer};
use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Error};
use std::{ffi::OsString, path::PathBuf};

#[cfg(feature = "tui")]
use std::time::Duration;

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(String::from("must be a positive integer")),
        Ok(n) => Ok(n),
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) generations: u64,
    pub(crate) save: Option<PathBuf>,
    pub(crate) all: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
    #[cfg(feature = "tui")]
    pub(crate) delay: Duration,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    fn parse_from<I, T>(itr: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = command!()
            .long_about(
                "A cyclic cellular automaton\n\
                 \n\
                 Every cell holds one color of a cycle. In each generation, a cell \
                 advances to the next color of the cycle when more than THRESHOLD \
                 of its eight neighbors already hold that color. \
                 Cells outside the grid do not count.\n\
                 \n\
                 The final grid is printed with one digit per cell: \
                 `0` for the first color, `1` for the second, and so on.",
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the grid")
                    .index(1)
                    .value_parser(parse_positive)
                    .requires("HEIGHT")
                    .required_unless_present_any(["CONFIG", "LOAD"]),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Height of the grid")
                    .index(2)
                    .value_parser(parse_positive)
                    .required_unless_present_any(["CONFIG", "LOAD"]),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run")
                    .long_help(
                        "Number of generations to run\n\
                         The run stops earlier if the grid no longer changes.",
                    )
                    .short('g')
                    .long("generations")
                    .value_parser(value_parser!(u64))
                    .default_value("1000"),
            )
            .arg(
                Arg::new("COLORS")
                    .help("Colors of the cycle, separated by commas [default: red,green,blue]")
                    .long_help(
                        "Colors of the cycle, separated by commas\n\
                         A color is either a name (black, white, red, green, blue, yellow, \
                         cyan, magenta) or a hex code like #ff8000. \
                         Colors must be distinct. [default: red,green,blue]",
                    )
                    .short('c')
                    .long("colors")
                    .value_delimiter(',')
                    .value_parser(value_parser!(Color)),
            )
            .arg(
                Arg::new("THRESHOLD")
                    .help("A cell advances when more than this many neighbors hold the next color [default: 2]")
                    .short('t')
                    .long("threshold")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random initial grid")
                    .long("seed")
                    .value_parser(value_parser!(u64).range(..=i64::MAX as u64)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a .json, .yaml or .toml file")
                    .long_help(
                        "Reads the configuration from a .json, .yaml or .toml file\n\
                         Other options on the command line override the values in the file.",
                    )
                    .long("config")
                    .value_parser(value_parser!(PathBuf))
                    .conflicts_with("LOAD"),
            )
            .arg(
                Arg::new("LOAD")
                    .help("Resumes a run from a save file")
                    .long("load")
                    .value_parser(value_parser!(PathBuf))
                    .conflicts_with_all(["WIDTH", "HEIGHT", "COLORS", "THRESHOLD", "SEED"]),
            )
            .arg(
                Arg::new("SAVE")
                    .help("Saves the world to a .json, .yaml or .toml file when the run ends")
                    .long("save")
                    .value_parser(value_parser!(PathBuf)),
            );

        #[cfg(feature = "tui")]
        {
            cmd = cmd
                .arg(
                    Arg::new("ALL")
                        .help("Prints every generation instead of only the last one")
                        .long_help(
                            "Prints every generation instead of only the last one\n\
                             Only useful when --no-tui is set.",
                        )
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .requires("NOTUI"),
                )
                .arg(
                    Arg::new("NOTUI")
                        .help("Runs immediately, without entering the TUI")
                        .short('n')
                        .long("no-tui")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("DELAY")
                        .help("Milliseconds between two generations in the TUI")
                        .long("delay")
                        .value_parser(value_parser!(u64))
                        .default_value("50")
                        .conflicts_with("NOTUI"),
                );
        }

        #[cfg(not(feature = "tui"))]
        {
            cmd = cmd.arg(
                Arg::new("ALL")
                    .help("Prints every generation instead of only the last one")
                    .short('a')
                    .long("all")
                    .action(ArgAction::SetTrue),
            );
        }

        let matches = cmd.try_get_matches_from_mut(itr)?;

        let world = if let Some(path) = matches.get_one::<PathBuf>("LOAD") {
            let save: WorldSer = format::read(path).map_err(|e| {
                cmd.error(
                    ErrorKind::Io,
                    format!("cannot load '{}': {}", path.display(), e),
                )
            })?;
            save.world().map_err(|e| {
                cmd.error(
                    ErrorKind::InvalidValue,
                    format!("invalid save file '{}': {}", path.display(), e),
                )
            })?
        } else {
            let mut config = match matches.get_one::<PathBuf>("CONFIG") {
                Some(path) => format::read::<Config>(path).map_err(|e| {
                    cmd.error(
                        ErrorKind::Io,
                        format!("cannot read config '{}': {}", path.display(), e),
                    )
                })?,
                None => Config::default(),
            };
            if let Some(&width) = matches.get_one::<usize>("WIDTH") {
                config.width = width;
            }
            if let Some(&height) = matches.get_one::<usize>("HEIGHT") {
                config.height = height;
            }
            if let Some(colors) = matches.get_many::<Color>("COLORS") {
                config = config.set_colors(colors.copied());
            }
            if let Some(&threshold) = matches.get_one::<usize>("THRESHOLD") {
                config = config.set_threshold(threshold);
            }
            if let Some(&seed) = matches.get_one::<u64>("SEED") {
                config = config.set_seed(seed);
            }
            config
                .world()
                .map_err(|e| cmd.error(ErrorKind::InvalidValue, e))?
        };

        let generations = matches
            .get_one::<u64>("GENERATIONS")
            .copied()
            .unwrap_or_default();
        let save = matches.get_one::<PathBuf>("SAVE").cloned();
        if let Some(path) = &save {
            format::check(path, &world.ser()).map_err(|e| {
                cmd.error(
                    ErrorKind::InvalidValue,
                    format!("cannot save to '{}': {}", path.display(), e),
                )
            })?;
        }
        let all = matches.get_flag("ALL");

        Ok(Args {
            world,
            generations,
            save,
            all,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
            #[cfg(feature = "tui")]
            delay: Duration::from_millis(
                matches.get_one::<u64>("DELAY").copied().unwrap_or_default(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_options() -> Result<(), Error> {
        let args = Args::parse_from(["cca", "8", "6", "-g", "20", "-c", "black,#ff8000", "--seed", "5"])?;
        assert_eq!(args.world.grid().dimensions(), (8, 6));
        assert_eq!(args.world.cycle().len(), 2);
        assert_eq!(args.world.config().seed, Some(5));
        assert_eq!(args.generations, 20);
        assert_eq!(args.save, None);
        Ok(())
    }

    #[test]
    fn seed_range() {
        let max = i64::MAX.to_string();
        assert!(Args::parse_from(["cca", "4", "4", "--seed", max.as_str()]).is_ok());

        let big = u64::MAX.to_string();
        let err = Args::parse_from(["cca", "4", "4", "--seed", big.as_str()])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn save_path() {
        let err = Args::parse_from(["cca", "4", "4", "--save", "run.txt"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let args = Args::parse_from(["cca", "4", "4", "--save", "run.toml"]);
        assert!(args.is_ok());
    }

    #[test]
    fn non_positive() {
        let err = Args::parse_from(["cca", "0", "4"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
