//! depguard-runner: headless front end for the deposit-protection validator.
//!
//! Usage:
//!   depguard-runner --amount 150000 --jurisdiction DE --banks 1
//!   depguard-runner --amount 300000 --compare DE,GB,US --banks 2 --joint
//!   depguard-runner --list
//!   depguard-runner --ipc-mode [--data-dir ./data]

use anyhow::Result;
use depguard_core::{
    money::format_currency, ComparisonSummary, DepositProtectionScheme, ProtectionValidator,
    SchemeRegistry, ValidationRequest, ValidationResult, ValidationScenario, ValidatorConfig,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Validate(ValidationRequest),
    ListSchemes,
    Quit,
}

#[derive(serde::Serialize)]
struct ValidationResponse<'a> {
    results: &'a [ValidationResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ComparisonSummary>,
}

#[derive(serde::Serialize)]
struct SchemeListResponse<'a> {
    schemes: Vec<&'a DepositProtectionScheme>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let list = args.iter().any(|a| a == "--list");
    let data_dir = flag_value(&args, "--data-dir")?;

    let (registry, config) = match data_dir {
        Some(dir) => (
            SchemeRegistry::load(format!("{dir}/schemes/deposit_schemes.json"))?,
            ValidatorConfig::load(dir)?,
        ),
        None => (SchemeRegistry::builtin(), ValidatorConfig::default()),
    };
    let validator = ProtectionValidator::new(&registry, config);

    if ipc_mode {
        return run_ipc_loop(&validator);
    }

    if list {
        print_registry(&registry);
        return Ok(());
    }

    let scenario = scenario_from_args(&args)?;
    let joint = scenario.is_joint_account;

    println!("Deposit Protection Validator");
    println!("  amount:        {:.2}", scenario.total_deposit_amount);
    println!("  banks:         {}", scenario.number_of_banks);
    println!("  account:       {}", if joint { "joint (2 holders)" } else { "single" });
    println!("  jurisdictions: {}", scenario.jurisdiction_codes.join(", "));
    println!();

    let results = validator.validate(&scenario)?;
    if results.is_empty() {
        println!("  (No known jurisdictions among the requested codes)");
        return Ok(());
    }
    for result in &results {
        print_result(result, joint);
    }
    if results.len() > 1 {
        if let Some(summary) = ComparisonSummary::from_results(&results) {
            print_summary(&summary);
        }
    }

    Ok(())
}

/// Build a scenario from CLI flags. Absent flags take their defaults;
/// present but malformed values are errors. Goes through the same
/// request conversion as the IPC path.
fn scenario_from_args(args: &[String]) -> Result<ValidationScenario> {
    let deposit_amount = parse_flag(args, "--amount")?.unwrap_or(50_000.0);
    let number_of_banks = parse_flag::<i64>(args, "--banks")?.unwrap_or(1);
    let jurisdiction = flag_value(args, "--jurisdiction")?.map(str::to_string);
    let jurisdictions = flag_value(args, "--compare")?.map(|codes| {
        codes
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    let jurisdiction = match (&jurisdiction, &jurisdictions) {
        (None, None) => Some("DE".to_string()),
        _ => jurisdiction,
    };

    let request = ValidationRequest {
        deposit_amount,
        jurisdiction,
        jurisdictions,
        number_of_banks,
        is_joint_account: args.iter().any(|a| a == "--joint"),
    };
    Ok(ValidationScenario::try_from(request)?)
}

fn run_ipc_loop(validator: &ProtectionValidator<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        match handle_line(validator, line) {
            Some(reply) => {
                writeln!(stdout, "{reply}")?;
                stdout.flush()?;
            }
            None => break,
        }
    }
    Ok(())
}

/// Answer one IPC line. `None` means the peer asked to quit.
/// Malformed lines and rejected requests produce an `{"error": ...}` line.
fn handle_line(validator: &ProtectionValidator<'_>, line: &str) -> Option<String> {
    let cmd: IpcCommand = match serde_json::from_str(line) {
        Ok(c) => c,
        Err(e) => return Some(error_line(&e.to_string())),
    };

    match cmd {
        IpcCommand::Quit => None,
        IpcCommand::ListSchemes => Some(to_line(&SchemeListResponse {
            schemes: validator.registry().iter().collect(),
        })),
        IpcCommand::Validate(request) => {
            let outcome = ValidationScenario::try_from(request)
                .and_then(|scenario| validator.validate(&scenario));
            match outcome {
                Ok(results) => {
                    let summary = if results.len() > 1 {
                        ComparisonSummary::from_results(&results)
                    } else {
                        None
                    };
                    Some(to_line(&ValidationResponse { results: &results, summary }))
                }
                Err(e) => {
                    log::warn!("ipc: validation rejected: {e}");
                    Some(error_line(&e.to_string()))
                }
            }
        }
    }
}

fn to_line<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_line(&e.to_string()))
}

fn error_line(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn print_registry(registry: &SchemeRegistry) {
    println!("=== DEPOSIT GUARANTEE SCHEMES ===");
    for scheme in registry.iter() {
        println!(
            "  {} | {} | limit {} | payout: {}",
            scheme.jurisdiction_code,
            scheme.display_label(),
            format_currency(scheme.limit, &scheme.currency),
            scheme.reimbursement_timeframe
        );
    }
}

fn print_result(result: &ValidationResult, joint: bool) {
    let scheme = &result.scheme;
    let cur = scheme.currency.as_str();

    println!("=== {} ({}) ===", scheme.jurisdiction_name, result.jurisdiction_code);
    println!("  scheme:       {}", scheme.scheme_name);
    println!(
        "  limit:        {}{}",
        format_currency(scheme.limit, cur),
        if joint { " (x2 for joint account)" } else { "" }
    );
    println!("  protected:    {}", format_currency(result.protected_amount, cur));
    println!("  at risk:      {}", format_currency(result.unprotected_amount, cur));
    println!(
        "  coverage:     {:.0}% ({})",
        result.protection_percentage(),
        if result.is_fully_protected { "Fully Protected" } else { "Partial Protection" }
    );
    for warning in &result.warnings {
        println!("  ! {warning}");
    }
    for rec in &result.recommendations {
        println!("  > {rec}");
    }
    println!("  reimbursement: {}", scheme.reimbursement_timeframe);
    println!();
}

fn print_summary(summary: &ComparisonSummary) {
    println!("=== COMPARISON SUMMARY ===");
    println!(
        "  best protection: {} ({})",
        summary.best_protection_name, summary.best_protection_code
    );
    println!("  max protected:   {:.0}", summary.max_protected_amount);
    println!(
        "  full coverage:   {} / {}",
        summary.fully_protected_count, summary.evaluated_count
    );
}

/// The value following `flag`, if the flag is present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(pos + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.as_str())),
        _ => anyhow::bail!("{flag} requires a value"),
    }
}

fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    flag_value(args, flag)?
        .map(|value| {
            value
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid value {value:?} for {flag}: {e}"))
        })
        .transpose()
}
