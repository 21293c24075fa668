use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;
use stickercube::{Color, CubeError, Face};

use crate::cli::{Args, Subcommand, apply_to_solved};
use crate::net::render;
use crate::settings::{DEFAULT_SETTINGS_STR, Settings};

fn default_settings() -> Settings {
    serde_norway::from_str(DEFAULT_SETTINGS_STR).unwrap()
}

#[test]
fn test_args() {
    Args::command().debug_assert();

    let args = Args::parse_from([
        "stickercube",
        "apply",
        "R",
        "U'",
        "F2",
        "-n",
        "5",
        "--no-color",
    ]);
    assert_eq!(Some(5), args.side_length);
    assert!(args.no_color);
    match args.subcommand {
        Subcommand::Apply { moves } => assert_eq!(vec!["R", "U'", "F2"], moves),
        other => panic!("wrong subcommand {other:?}"),
    }
}

#[test]
fn test_default_settings() {
    let settings = default_settings();
    assert_eq!(3, settings.side_length);
    assert!(settings.colored_output);
    assert_eq!(
        Color::default_scheme(),
        settings.color_scheme.to_scheme().unwrap(),
    );
}

#[test]
fn test_custom_color_scheme() {
    let mut settings = default_settings();
    settings.color_scheme.up = "y".to_owned();
    settings.color_scheme.down = "white".to_owned();
    let scheme = settings.color_scheme.to_scheme().unwrap();
    assert_eq!(Color::Yellow, scheme[Face::Up]);
    assert_eq!(Color::White, scheme[Face::Down]);

    let cube = apply_to_solved(&settings, "R").unwrap();
    assert_eq!("YYG YYG YYG", cube.state().face(Face::Up).to_string());

    settings.color_scheme.front = "purple".to_owned();
    let err = settings.color_scheme.to_scheme().unwrap_err();
    assert_eq!("invalid color scheme for Front face", err.to_string());
}

#[test]
fn test_apply_errors() {
    let mut settings = default_settings();
    apply_to_solved(&settings, "R X").unwrap_err();

    settings.side_length = 4;
    apply_to_solved(&settings, "R M").unwrap_err();

    settings.side_length = 0;
    let err = apply_to_solved(&settings, "").unwrap_err();
    assert_eq!(Some(&CubeError::ZeroSideLength), err.downcast_ref());
}

#[test]
fn test_render() {
    let settings = default_settings();
    let cube = apply_to_solved(&settings, "R U").unwrap();

    let plain = render(cube.state(), false);
    assert_eq!(cube.state().to_string(), plain);

    let colored = render(cube.state(), true);
    assert!(colored.contains('\x1b'));
    assert_eq!(plain.lines().count(), colored.lines().count());
}
