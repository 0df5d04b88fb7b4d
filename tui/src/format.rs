//! Reading and writing config files and save files.
//!
//! The format is chosen by the file extension.

use serde::{de::DeserializeOwned, Serialize};
use std::{error::Error, fs, path::Path};

/// Supported file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the extension of a path.
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    pub(crate) fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, Box<dyn Error>> {
        Ok(match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Toml => toml::from_str(text)?,
        })
    }

    pub(crate) fn render<T: Serialize>(self, value: &T) -> Result<String, Box<dyn Error>> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Toml => toml::to_string(value)?,
        })
    }
}

fn format_of(path: &Path) -> Result<Format, String> {
    Format::from_path(path).ok_or_else(|| {
        format!(
            "unknown file format: {} (expected .json, .yaml, .yml or .toml)",
            path.display()
        )
    })
}

/// Reads a value from a file.
pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let format = format_of(path)?;
    let text = fs::read_to_string(path)?;
    format.parse(&text)
}

/// Writes a value to a file, replacing its content.
pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let format = format_of(path)?;
    let text = format.render(value)?;
    fs::write(path, text)?;
    Ok(())
}

/// Checks that a value can be written to a file in the format of its extension,
/// without touching the file.
pub(crate) fn check<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    format_of(path)?.render(value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cca_lib::{Color, Config, Grid, WorldSer};

    #[test]
    fn from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a/b.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("c.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("save")), None);
        assert_eq!(Format::from_path(Path::new("save.txt")), None);
    }

    #[test]
    fn toml_save() -> Result<(), Box<dyn Error>> {
        let grid = Grid::parse("0120\n2101", 3)?;
        let config = Config::new(4, 2).set_colors(vec![Color::BLACK, Color::RED, Color::WHITE]);
        let mut world = config.world_with_grid(grid)?;
        world.step();

        let text = Format::Toml.render(&world.ser())?;
        let save: WorldSer = Format::Toml.parse(&text)?;
        assert_eq!(save, world.ser());
        assert_eq!(save.world()?.grid(), world.grid());
        Ok(())
    }

    #[test]
    fn toml_big_seed() -> Result<(), Box<dyn Error>> {
        let world = Config::new(4, 4).set_seed(i64::MAX as u64).world()?;
        let text = Format::Toml.render(&world.ser())?;
        let save: WorldSer = Format::Toml.parse(&text)?;
        assert_eq!(save, world.ser());

        let world = Config::new(4, 4).set_seed(u64::MAX).world()?;
        assert!(Format::Toml.render(&world.ser()).is_err());
        assert!(check(Path::new("out.toml"), &world.ser()).is_err());
        assert!(check(Path::new("out.json"), &world.ser()).is_ok());
        assert!(check(Path::new("out.yaml"), &world.ser()).is_ok());
        Ok(())
    }

    #[test]
    fn check_extension() -> Result<(), Box<dyn Error>> {
        let world = Config::new(4, 4).set_seed(1).world()?;
        assert!(check(Path::new("run.txt"), &world.ser()).is_err());
        assert!(check(Path::new("run"), &world.ser()).is_err());
        assert!(check(Path::new("run.toml"), &world.ser()).is_ok());
        Ok(())
    }

    #[test]
    fn yaml_config() -> Result<(), Box<dyn Error>> {
        let config: Config = Format::Yaml.parse("width: 40\nheight: 20\nseed: 3\n")?;
        assert_eq!(config, Config::new(40, 20).set_seed(3));
        Ok(())
    }
}
