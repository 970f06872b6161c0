// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mplan_api::{
    EntryRecord, NextStepInfo, NextStepOutcome, PipelineReport, RecordPolicy, UpdateRecord,
    build_report, latest_entries, load_rule_table, resolve_next_step,
};
use mplan_config::RuleTableSource;
use mplan_domain::{DEFAULT_TIMEZONE, RuleTable, parse_iso_date, today_in_zone};
use std::fs;
use std::path::PathBuf;

/// MPLAN Pipeline CLI - status transition reports for the MPLAN Sales Pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a pipeline export into a report
    Report(ReportArgs),
    /// Resolve the next step for a single status
    NextStep {
        /// The status as entered
        status: String,

        /// The last-update date (ISO 8601)
        last_update: String,

        /// Rule table: "canonical", "legacy-cyclic", or a file path
        #[arg(long, default_value = "canonical")]
        rules: RuleTableSource,
    },
    /// Print or validate the active rule table
    Rules {
        /// Rule table: "canonical", "legacy-cyclic", or a file path
        #[arg(long, default_value = "canonical")]
        rules: RuleTableSource,

        /// Validate the table and print nothing but the verdict
        #[arg(long)]
        validate_only: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ReportArgs {
    /// Path to a JSON array of pipeline entries
    #[arg(long)]
    entries: PathBuf,

    /// Rule table: "canonical", "legacy-cyclic", or a file path
    #[arg(long, default_value = "canonical")]
    rules: RuleTableSource,

    /// IANA timezone for the business clock
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Evaluation date (ISO 8601); defaults to today on the business clock
    #[arg(long)]
    today: Option<String>,

    /// Treat the input as an update timeline (one row per update) and
    /// collapse it to the latest entry per company first
    #[arg(long)]
    timeline: bool,

    /// Reject entries whose status is outside the known vocabulary
    #[arg(long)]
    strict: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; logs go to stderr so report output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Report(report_args) => run_report(&report_args),
        Command::NextStep {
            status,
            last_update,
            rules,
        } => run_next_step(&status, &last_update, &rules),
        Command::Rules {
            rules,
            validate_only,
        } => run_rules(&rules, validate_only),
    }
}

fn run_report(args: &ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table: RuleTable = load_rule_table(&args.rules)?;
    let policy: RecordPolicy = if args.strict {
        RecordPolicy::strict()
    } else {
        RecordPolicy::default()
    };

    let today: NaiveDate = match args.today {
        Some(ref date) => parse_iso_date(date)?,
        None => today_in_zone(&args.timezone)?,
    };

    let contents: String = fs::read_to_string(&args.entries)?;
    let records: Vec<EntryRecord> = if args.timeline {
        let updates: Vec<UpdateRecord> = serde_json::from_str(&contents)?;
        latest_entries(&updates)
    } else {
        serde_json::from_str(&contents)?
    };

    let report: PipelineReport = build_report(&table, &policy, &records, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn run_next_step(
    status: &str,
    last_update: &str,
    source: &RuleTableSource,
) -> Result<(), Box<dyn std::error::Error>> {
    let table: RuleTable = load_rule_table(source)?;
    let info: NextStepInfo = resolve_next_step(&table, status, last_update)?;

    match info.outcome {
        NextStepOutcome::Advance => {
            if let (Some(next), Some(due)) = (info.next_status, info.due_date_display.as_deref()) {
                println!("advance to {} by {due}", next.as_str());
            }
        }
        NextStepOutcome::Terminal => {
            println!("terminal: no further step is scheduled");
        }
        NextStepOutcome::Unmapped => {
            println!(
                "unmapped: '{status}' is not in the '{}' rule table",
                table.name()
            );
        }
    }

    Ok(())
}

fn run_rules(
    source: &RuleTableSource,
    validate_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table: RuleTable = load_rule_table(source)?;

    if validate_only {
        println!(
            "Rule table '{}' is valid ({} rules)",
            table.name(),
            table.len()
        );
        return Ok(());
    }

    println!("Rule table '{}' ({} rules)", table.name(), table.len());
    println!();
    println!("{:<12} {:>6}  NEXT", "STATUS", "DELAY");
    for (code, rule) in table.iter() {
        let next: &str = rule.next.map_or("-", |next| next.as_str());
        println!(
            "{:<12} {:>6}  {next}",
            code.as_str(),
            rule.delay_business_days
        );
    }

    Ok(())
}

fn print_report(report: &PipelineReport) {
    println!(
        "Pipeline report ({} rules, {})",
        report.rule_table, report.today
    );
    println!();
    println!(
        "{:<10} {:<24} {:<12} {:<12} {:<16} NEXT STEP",
        "CODE", "COMPANY", "KATEGORI", "STATUS", "LAST UPDATE"
    );
    for row in &report.rows {
        println!(
            "{:<10} {:<24} {:<12} {:<12} {:<16} {}",
            row.company_code,
            row.company_name,
            row.kategori.as_str(),
            row.status_badge.label,
            row.last_update_display,
            describe_next_step(&row.next_step, row.overdue)
        );
    }
    println!();
    println!(
        "Total: {}  Advancing: {}  Terminal: {}  Unmapped: {}  Overdue: {}",
        report.summary.total,
        report.summary.advancing,
        report.summary.terminal,
        report.summary.unmapped,
        report.summary.overdue
    );
}

fn describe_next_step(info: &NextStepInfo, overdue: bool) -> String {
    match info.outcome {
        NextStepOutcome::Advance => {
            let next: &str = info.next_status.map_or("?", |code| code.as_str());
            let due: &str = info.due_date_display.as_deref().unwrap_or("-");
            if overdue {
                format!("next {next} (due {due}, OVERDUE)")
            } else {
                format!("next {next} (due {due})")
            }
        }
        NextStepOutcome::Terminal => String::from("terminal"),
        NextStepOutcome::Unmapped => String::from("unmapped"),
    }
}
