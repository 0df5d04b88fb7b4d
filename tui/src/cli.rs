//! Running the world, with or without the TUI.

use crate::{args::Args, format};
use cca_lib::{Status, World};
use clap::error::{Error as ClapError, ErrorKind};
use log::info;
use std::{error::Error, time::Instant};

#[cfg(feature = "tui")]
use crate::tui::run_with_tui;

/// Runs the world as the arguments say, then prints the last generation.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut world = args.world;

    #[cfg(feature = "tui")]
    {
        if args.no_tui {
            run_headless(&mut world, args.generations, args.all);
        } else {
            run_with_tui(&mut world, args.generations, args.delay)?;
        }
    }
    #[cfg(not(feature = "tui"))]
    run_headless(&mut world, args.generations, args.all);

    print!("{}", world.grid());

    if let Some(path) = args.save {
        format::write(&path, &world.ser())?;
        info!(
            "Saved generation {} to {}",
            world.generation(),
            path.display()
        );
    }
    Ok(())
}

/// Turns a failure during or after the run into a `clap` error,
/// so that it is reported like a bad argument.
pub(crate) fn failure(e: Box<dyn Error>) -> ClapError {
    ClapError::raw(ErrorKind::Io, format!("{}\n", e))
}

/// Runs at most `generations` generations without any interaction.
///
/// If `all` is set, prints every generation before the last one.
fn run_headless(world: &mut World, generations: u64, all: bool) {
    let start = Instant::now();
    let status = if all {
        let mut status = world.status();
        for _ in 0..generations {
            println!("Gen: {}", world.generation());
            println!("{}", world.grid());
            status = world.step();
            if status == Status::Stable {
                break;
            }
        }
        println!("Gen: {}", world.generation());
        status
    } else {
        world.run(generations)
    };
    info!(
        "Stopped at generation {} after {:.2?} ({:?})",
        world.generation(),
        start.elapsed(),
        status
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn failure_kind() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "cannot write out.json");
        let err = failure(Box::new(e));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("cannot write out.json"));
    }

    #[test]
    fn headless_stops_when_stable() -> Result<(), Box<dyn Error>> {
        let mut world = cca_lib::Config::new(3, 1).set_seed(9).world()?;
        run_headless(&mut world, 100, false);
        assert_eq!(world.status(), Status::Stable);
        assert_eq!(world.generation(), 1);
        Ok(())
    }
}
