use aop_cli::{commands, load_plan, OutputFormat};
use aop_core::{init_tracing, LogFormat, PlannerConfig, PolicyKind, RiceWeights};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Plan file (JSON with features and votes)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cli() -> Command {
    Command::new("aop-planner")
        .version(aop_cli::VERSION)
        .about("Annual operating plan feature intake, scoring and voting")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Planner config file (.yaml, .yml or .toml)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("demo")
                .about("Load the demo plan, score it and print the summary")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("score")
                .about("Run competitor and RICE scoring over a plan")
                .arg(input_arg())
                .arg(
                    Arg::new("weights")
                        .long("weights")
                        .value_parser(value_parser!(RiceWeights))
                        .help("RICE weights as reach,impact,confidence,effort"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("tally")
                .about("Replay a plan's votes and print each feature's status")
                .arg(input_arg())
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .value_parser(value_parser!(PolicyKind))
                        .help("Repeat-vote policy: append, last or first"),
                )
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .value_parser(value_parser!(u32).range(1..))
                        .help("Votes needed for a decision"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Print plan summary counts")
                .arg(input_arg())
                .arg(json_arg()),
        )
}

fn output_format(args: &ArgMatches) -> OutputFormat {
    if args.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn input_plan(args: &ArgMatches) -> anyhow::Result<aop_core::PlanFile> {
    let path = args
        .get_one::<PathBuf>("input")
        .context("--input is required")?;
    load_plan(path)
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let log_format = if matches.get_flag("log-json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(matches.get_flag("verbose"), log_format)?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => PlannerConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    let output = match matches.subcommand() {
        Some(("demo", args)) => commands::demo(config, output_format(args))?,
        Some(("score", args)) => {
            let plan = input_plan(args)?;
            let weights = args.get_one::<RiceWeights>("weights").copied();
            commands::score(config, &plan, weights, output_format(args))?
        }
        Some(("tally", args)) => {
            let plan = input_plan(args)?;
            let policy = args.get_one::<PolicyKind>("policy").copied();
            let threshold = args.get_one::<u32>("threshold").copied();
            commands::tally(config, &plan, policy, threshold, output_format(args))?
        }
        Some(("summary", args)) => {
            let plan = input_plan(args)?;
            commands::summary(config, &plan, output_format(args))?
        }
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    };

    println!("{output}");
    Ok(())
}
