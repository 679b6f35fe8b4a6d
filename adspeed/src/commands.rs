use crate::CLAP_STYLING;
use clap::{arg, command};
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("adspeed")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("adspeed")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log audit decisions to stderr").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("audit")
                .about("Run the ad speed audits over a page load's network records")
                .arg(
                    arg!(-r --"records" <PATH>)
                        .required(true)
                        .help("JSON file of network records captured for one page load")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(false)
                        .help("JSON file overriding audit thresholds")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"only" <AUDIT_ID>)
                        .required(false)
                        .help("Run only the named audit (repeatable)")
                        .action(clap::ArgAction::Append),
                ),
        )
        .subcommand(
            command!("classify")
                .about("Show how each network record is classified")
                .arg(
                    arg!(-r --"records" <PATH>)
                        .required(true)
                        .help("JSON file of network records captured for one page load")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-a --"all")
                        .required(false)
                        .help("Also list records that are not ad-related")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(command!("list").about("List the available audits"))
}
