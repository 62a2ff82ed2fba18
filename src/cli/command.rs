use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::error::IlogsError;

#[derive(Debug)]
pub struct IlogsCli {
    pub filter: String,
    pub container: Option<String>,
    pub tail: i64,
    pub all_namespaces: bool,
    pub namespace: Option<String>,
}

impl IlogsCli {
    pub fn parse() -> Result<Self, IlogsError> {
        Self::from_matches(&Self::command().get_matches())
    }

    fn command() -> Command {
        Command::new("kubectl-ilogs")
            .version("v0.1.0")
            .about("Interactively select pods by name substring and fetch their logs")
            .arg(
                Arg::new("filter")
                    .required(true)
                    .help("substring to match against pod names"),
            )
            .arg(
                Arg::new("container")
                    .short('c')
                    .long("container")
                    .help("Container name. If omitted, logs from all containers are shown."),
            )
            .arg(
                Arg::new("tail")
                    .short('f')
                    .long("tail")
                    .value_parser(value_parser!(i64))
                    .default_value("100")
                    .help("Lines of recent log file to display."),
            )
            .arg(
                Arg::new("all-namespaces")
                    .short('A')
                    .long("all-namespaces")
                    .action(ArgAction::SetTrue)
                    .help(
                        "If present, list the requested object(s) across all namespaces. \
                         Namespace in current context is ignored even if specified with --namespace.",
                    ),
            )
            .arg(
                Arg::new("namespace")
                    .short('n')
                    .long("namespace")
                    .help("Namespace to search in. Defaults to the kubeconfig namespace."),
            )
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, IlogsError> {
        let filter = matches
            .get_one::<String>("filter")
            .filter(|f| !f.is_empty())
            .ok_or(IlogsError::Usage)?
            .to_string();

        Ok(Self {
            filter,
            container: matches.get_one::<String>("container").cloned(),
            tail: *matches.get_one::<i64>("tail").unwrap_or(&100),
            all_namespaces: matches.get_flag("all-namespaces"),
            namespace: matches.get_one::<String>("namespace").cloned(),
        })
    }
}
