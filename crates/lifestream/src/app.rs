use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("life-stream")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record, search and edit a personal life stream from the terminal")
        .long_about("life-stream keeps a timestamped journal on a remote service. Entries carry #tags and key:value attributes and can be searched, edited and deleted. Named profiles switch between servers (e.g. 'default' and 'local'); credentials are stored per profile.\n\nRunning without a subcommand shows the last 7 days.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .about("Log in to the active profile's server, registering if the account does not exist")
        )
        .subcommand(
            Command::new("save")
                .about("Record a new entry")
                .arg(
                    Arg::new("words")
                        .help("Entry text (read from stdin when omitted)")
                        .num_args(1..)
                        .index(1)
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("Read the entry text from a file")
                        .conflicts_with("words")
                )
        )
        .subcommand(
            Command::new("update")
                .about("Replace the text of an existing entry")
                .arg(
                    Arg::new("id")
                        .help("Entry id (see 'search --show-id')")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("words")
                        .help("New entry text (read from stdin when omitted)")
                        .num_args(1..)
                        .index(2)
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("Read the new text from a file")
                        .conflicts_with("words")
                )
        )
        .subcommand(
            Command::new("search")
                .about("List entries, grouped by day")
                .arg(
                    Arg::new("days")
                        .long("days")
                        .short('n')
                        .help("Only entries from the last N days")
                        .value_parser(value_parser!(i64))
                )
                .arg(
                    Arg::new("tags")
                        .long("tags")
                        .short('t')
                        .help("Comma-separated tags an entry must have")
                )
                .arg(
                    Arg::new("keys")
                        .long("keys")
                        .short('k')
                        .help("Comma-separated attribute keys an entry must have")
                )
                .arg(
                    Arg::new("show-id")
                        .long("show-id")
                        .help("Prefix each entry with its id")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show a single entry")
                .arg(
                    Arg::new("id")
                        .help("Entry id")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an entry")
                .arg(
                    Arg::new("id")
                        .help("Entry id")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("stats")
                .about("Show entry counts per tag")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the server response as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Read or change local settings (profiles, endpoints)")
                .long_about(
                    "Settings live in config.json under the life-stream config directory \
                    ($LIFE_STREAM_HOME or ~/.life-stream) and are addressed with dotted keys.\n\n\
                    Examples:\n\
                    - life-stream config --get active-profile\n\
                    - life-stream config --set active-profile=local\n\
                    - life-stream config --set profiles.staging.endpoint=https://staging.example.com\n\
                    - life-stream config --unset profiles.staging.endpoint"
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .value_name("KEY=VALUE")
                        .help("Set a dotted key to a string value")
                )
                .arg(
                    Arg::new("get")
                        .long("get")
                        .value_name("KEY")
                        .help("Print the value of a dotted key")
                )
                .arg(
                    Arg::new("unset")
                        .long("unset")
                        .value_name("KEY")
                        .help("Remove a dotted key")
                )
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .help("Restore the built-in defaults")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help("Print the config file location")
                        .action(ArgAction::SetTrue)
                )
                .group(
                    ArgGroup::new("operation")
                        .args(["set", "get", "unset", "reset", "path"])
                        .required(true)
                        .multiple(false)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell))
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_no_subcommand_is_allowed() {
        let matches = build_cli().try_get_matches_from(vec!["life-stream"]).unwrap();
        assert!(matches.subcommand().is_none());
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["life-stream", "config", "--get", "x", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_save_words() {
        let matches = build_cli()
            .try_get_matches_from(vec!["life-stream", "save", "went", "running", "#health"])
            .unwrap();
        let save = matches.subcommand_matches("save").unwrap();
        let words: Vec<&String> = save.get_many::<String>("words").unwrap().collect();
        assert_eq!(words, vec!["went", "running", "#health"]);
        assert!(save.get_one::<String>("file").is_none());
    }

    #[test]
    fn test_cli_save_file_conflicts_with_words() {
        let matches = build_cli().try_get_matches_from(vec![
            "life-stream",
            "save",
            "-f",
            "note.md",
            "extra",
        ]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_save_without_body_is_allowed() {
        let matches = build_cli()
            .try_get_matches_from(vec!["life-stream", "save"])
            .unwrap();
        let save = matches.subcommand_matches("save").unwrap();
        assert!(save.get_many::<String>("words").is_none());
    }

    #[test]
    fn test_cli_update_requires_id() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["life-stream", "update"])
                .is_err()
        );

        let matches = build_cli()
            .try_get_matches_from(vec!["life-stream", "update", "abc", "new", "text"])
            .unwrap();
        let update = matches.subcommand_matches("update").unwrap();
        assert_eq!(update.get_one::<String>("id").unwrap(), "abc");
        assert_eq!(update.get_many::<String>("words").unwrap().count(), 2);
    }

    #[test]
    fn test_cli_search_options() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "life-stream",
                "search",
                "-n",
                "30",
                "-t",
                "work,health",
                "-k",
                "mood",
                "--show-id",
            ])
            .unwrap();
        let search = matches.subcommand_matches("search").unwrap();
        assert_eq!(search.get_one::<i64>("days").copied(), Some(30));
        assert_eq!(search.get_one::<String>("tags").unwrap(), "work,health");
        assert_eq!(search.get_one::<String>("keys").unwrap(), "mood");
        assert!(search.get_flag("show-id"));
        assert!(!search.get_flag("json"));
    }

    #[test]
    fn test_cli_search_days_must_be_number() {
        let matches =
            build_cli().try_get_matches_from(vec!["life-stream", "search", "-n", "week"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_delete_requires_id() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["life-stream", "delete"])
                .is_err()
        );
    }

    #[test]
    fn test_cli_config_requires_one_operation() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["life-stream", "config"])
                .is_err()
        );
        assert!(
            build_cli()
                .try_get_matches_from(vec![
                    "life-stream",
                    "config",
                    "--get",
                    "a",
                    "--unset",
                    "b"
                ])
                .is_err()
        );
    }

    #[test]
    fn test_cli_config_set() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "life-stream",
                "config",
                "--set",
                "active-profile=local",
            ])
            .unwrap();
        let config = matches.subcommand_matches("config").unwrap();
        assert_eq!(
            config.get_one::<String>("set").unwrap(),
            "active-profile=local"
        );
        assert!(!config.get_flag("reset"));
    }

    #[test]
    fn test_cli_completions_shell() {
        let matches = build_cli()
            .try_get_matches_from(vec!["life-stream", "completions", "zsh"])
            .unwrap();
        let completions = matches.subcommand_matches("completions").unwrap();
        assert_eq!(completions.get_one::<Shell>("shell"), Some(&Shell::Zsh));
    }
}
