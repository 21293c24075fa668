//! Layered settings: built-in defaults under an optional user YAML file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr};
use serde::{Deserialize, Serialize};
use stickercube::{Color, Face, PerFace};

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const SETTINGS_FILE_NAME: &str = "settings.yaml";
pub(crate) const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");

/// Settings for the command-line interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    /// Number of stickers along each edge of a face.
    pub side_length: usize,
    /// Whether to color the printed net.
    pub colored_output: bool,
    /// Colors of the faces of a solved cube.
    pub color_scheme: ColorSchemeSettings,
}

/// Color of each face of a solved cube, as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ColorSchemeSettings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub front: String,
    pub back: String,
}

impl ColorSchemeSettings {
    fn get(&self, face: Face) -> &str {
        match face {
            Face::Up => &self.up,
            Face::Down => &self.down,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    /// Parses the color of every face.
    pub fn to_scheme(&self) -> Result<PerFace<Color>> {
        let mut scheme = Color::default_scheme();
        for face in Face::ALL {
            scheme[face] = self
                .get(face)
                .parse()
                .wrap_err_with(|| format!("invalid color scheme for {face} face"))?;
        }
        Ok(scheme)
    }
}

/// Loads settings from `explicit_path` if given, or else from the user
/// settings file.
///
/// An explicit file must exist and be valid. A missing user settings file is
/// ignored, and an invalid one is reported as a warning before falling back
/// to the defaults.
pub(crate) fn load(explicit_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit_path {
        return build(Some(path), true)
            .wrap_err_with(|| format!("error loading settings from {}", path.display()));
    }

    let user_path = match user_settings_file() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Error locating user settings: {e}");
            None
        }
    };
    if let Some(path) = &user_path {
        log::debug!("Loading user settings from {}", path.display());
    }

    build(user_path.as_deref(), false).or_else(|e| {
        log::warn!("Error loading user settings: {e}");
        build(None, false).wrap_err("error loading default settings")
    })
}

fn build(user_file: Option<&Path>, required: bool) -> Result<Settings> {
    let mut config = config::Config::builder().add_source(config::File::from_str(
        DEFAULT_SETTINGS_STR,
        SETTINGS_FILE_FORMAT,
    ));
    if let Some(path) = user_file {
        config = config.add_source(
            config::File::from(path)
                .format(SETTINGS_FILE_FORMAT)
                .required(required),
        );
    }
    Ok(config.build()?.try_deserialize()?)
}

fn user_settings_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "Stickercube").ok_or_eyre("no home directory")?;
    Ok(dirs.config_dir().join(SETTINGS_FILE_NAME))
}
