#[cfg(test)]
mod tests {
    use crate::cli::enums::SerializationFormat;
    use crate::cli::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_enum_values() {
        use clap::ValueEnum;

        let formats: Vec<_> = SerializationFormat::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(formats, vec!["json", "toml"]);
    }

    #[test]
    fn test_show_defaults_to_json() {
        let cli = Cli::try_parse_from(["sitepack", "show"]).unwrap();
        match cli.command {
            Command::Show(args) => assert_eq!(args.format, SerializationFormat::Json),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["sitepack", "check", "--fs", "-C", "site", "--no-color"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Check(ref args) if args.fs));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["sitepack", "-v", "-q", "show"]).is_err());
    }

    #[test]
    fn test_match_requires_file() {
        assert!(Cli::try_parse_from(["sitepack", "match"]).is_err());

        let cli = Cli::try_parse_from(["sitepack", "match", "src/a.scss"]).unwrap();
        assert!(matches!(cli.command, Command::Match(ref args) if args.file == PathBuf::from("src/a.scss")));
    }

    #[test]
    fn test_outputs_json_conflicts_with_absolute() {
        assert!(Cli::try_parse_from(["sitepack", "outputs", "--json", "--absolute"]).is_err());
    }
}
