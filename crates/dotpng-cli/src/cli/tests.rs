use super::*;

#[test]
fn cli_parse_no_args() {
    assert!(Cli::try_parse_from(["dotpng"]).is_ok());
}

#[test]
fn cli_rejects_positional() {
    assert!(Cli::try_parse_from(["dotpng", "public/other.png"]).is_err());
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["dotpng", "--output", "x"]).is_err());
}

#[test]
fn cli_help_and_version_are_displayed() {
    let help = Cli::try_parse_from(["dotpng", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    let version = Cli::try_parse_from(["dotpng", "--version"]).unwrap_err();
    assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn clap_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
