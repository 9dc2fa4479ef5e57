use fieldcheck::*;

use clap::{crate_version, Arg, ArgAction, Command};
use std::io::{self, Write};
use std::process::exit;
use termcolor::{ColorChoice, StandardStream};

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = Command::new("Field access checker")
        .version(crate_version!())
        .about("Check static and instance field access results")
        .arg(
            Arg::new("inject failure")
                .long("inject-failure")
                .action(ArgAction::SetTrue)
                .help("Initialise the getstatic statics to a=1, b=99 so that static-get fails"),
        )
        .arg(
            Arg::new("only")
                .long("only")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Only run the named scenario (may be repeated)"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List the scenarios and exit"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("When to color the summary"),
        )
        .arg(
            Arg::new("ignored")
                .num_args(0..)
                .action(ArgAction::Append)
                .hide(true),
        )
        .get_matches();

    let settings = Settings {
        inject_failure: matches.get_flag("inject failure"),
        only: matches
            .get_many::<String>("only")
            .map(|names| names.cloned().collect())
            .unwrap_or_default(),
        color: matches
            .get_one::<String>("color")
            .and_then(|when| Settings::parse_color(when.as_str()))
            .unwrap_or(ColorChoice::Auto),
    };

    if let Some(ignored) = matches.get_many::<String>("ignored") {
        log::debug!("Ignoring arguments {:?}", ignored.collect::<Vec<_>>());
    }

    if matches.get_flag("list") {
        let stdout = io::stdout();
        let mut s = stdout.lock();
        for scenario in Scenario::standard() {
            writeln!(s, "{}\t{}", scenario.name, scenario.description)?;
        }
        return Ok(());
    }

    let checker = match FieldAccessChecker::new(&settings) {
        Ok(checker) => checker,
        Err(err) => {
            eprintln!("{}", err);
            exit(2)
        }
    };

    let stdout = StandardStream::stdout(settings.color);
    let summary = match checker.run(&settings, &mut stdout.lock()) {
        Ok(summary) => summary,
        Err(Error::Io(err)) => return Err(err),
        Err(err) => {
            eprintln!("{}", err);
            exit(2)
        }
    };

    // Exit code
    exit(summary.exit_code())
}
