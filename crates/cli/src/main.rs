//! gtool CLI
//!
//! Command-line interface bundling timestamp helpers and xh-polaris
//! scaffolding generators.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::*;
use gtool_clock::{parse_epoch, NowReport, SystemClock, TimestampReport, Zone};
use gtool_common::{MapperConfig, MapperDefinition, ServiceDefinition, ServiceGenConfig};
use gtool_generator::{generate_mapper, generate_service};
use gtool_parser::{read_go_module, scan_messages};
use std::path::{Path, PathBuf};

const TZ_HELP: &str =
    "Timezone: IANA name (e.g. Asia/Shanghai), 'Local' for the system zone, or 'UTC'";

#[derive(Parser)]
#[command(name = "gtool")]
#[command(version, about = "Developer convenience toolbox", long_about = None)]
#[command(after_help = "EXIT STATUS:\n  \
    0  success, --help or --version\n  \
    1  any failure, including invalid or missing arguments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the current time and Unix timestamp in a timezone
    #[command(after_help = "EXAMPLES:\n  \
        gtool now                  # Show local time\n  \
        gtool now -z UTC           # Show time in UTC\n  \
        gtool now --tz=Asia/Tokyo  # Show time in a specific zone")]
    Now {
        #[arg(short = 'z', long, default_value = "Local", help = TZ_HELP)]
        tz: String,
    },

    /// Convert a Unix timestamp to a formatted datetime
    #[command(after_help = "EXAMPLES:\n  \
        gtool timestamp 1620000000                     # Use local timezone\n  \
        gtool timestamp 1620000000 -z UTC              # UTC timezone\n  \
        gtool timestamp 1620000000 --tz=Asia/Shanghai  # Specific timezone")]
    Timestamp {
        /// Seconds since 1970-01-01 00:00:00 UTC
        #[arg(allow_hyphen_values = true)]
        timestamp: String,

        #[arg(short = 'z', long, default_value = "Local", help = TZ_HELP)]
        tz: String,
    },

    /// Code generation for common xh-polaris scenarios
    Xh {
        #[command(subcommand)]
        command: XhCommands,
    },
}

#[derive(Subcommand)]
enum XhCommands {
    /// IDL generation
    Idl {
        #[command(subcommand)]
        command: IdlCommands,
    },

    /// Mapper generation
    Mapper {
        #[command(subcommand)]
        command: MapperCommands,
    },
}

#[derive(Subcommand)]
enum IdlCommands {
    /// Generate a service definition from the messages of a proto file
    #[command(after_help = "EXAMPLES:\n  \
        gtool xh idl gen-svc \\\n    \
        -c idl/core_api/common.proto \\\n    \
        -s idl/core_api/user.proto \\\n    \
        -n user")]
    GenSvc {
        /// Proto file declaring the messages
        #[arg(short, long)]
        common_proto: PathBuf,

        /// Proto file to write the service to (overwritten)
        #[arg(short, long)]
        service_proto: PathBuf,

        /// Service name
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum MapperCommands {
    /// Generate biz/infra/mapper/<name>/mapper.go in the current project
    New {
        /// Mapper name in snake_case, e.g. user_info
        #[arg(short, long)]
        name: String,
    },
}

/// Entry point
///
/// Exits 0 on success and for `--help`/`--version`. Every failure exits 1:
/// usage errors reported by clap as well as errors returned from a command.
fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(e.kind());
            // Printing only fails when stdout/stderr are gone.
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Now { tz } => {
            now_command(&tz, cli.verbose)?;
        }
        Commands::Timestamp { timestamp, tz } => {
            timestamp_command(&timestamp, &tz, cli.verbose)?;
        }
        Commands::Xh {
            command: XhCommands::Idl { command },
        } => match command {
            IdlCommands::GenSvc {
                common_proto,
                service_proto,
                name,
            } => {
                gen_service_command(
                    &ServiceGenConfig {
                        common_proto,
                        service_proto,
                        service_name: name,
                    },
                    cli.verbose,
                )?;
            }
        },
        Commands::Xh {
            command: XhCommands::Mapper { command },
        } => match command {
            MapperCommands::New { name } => {
                let project_root = std::env::current_dir()
                    .context("Failed to determine the working directory")?;
                new_mapper_command(&MapperConfig { name, project_root }, cli.verbose)?;
            }
        },
    }

    Ok(())
}

/// Status for a clap parse outcome that did not produce a `Cli`
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn resolve_zone(spec: &str, verbose: bool) -> Result<Zone> {
    let zone: Zone = spec.parse().context("Failed to resolve timezone")?;
    if verbose {
        println!("  Zone: {}", zone);
    }
    Ok(zone)
}

fn now_command(tz: &str, verbose: bool) -> Result<NowReport> {
    let zone = resolve_zone(tz, verbose)?;
    let report = NowReport::capture(&SystemClock, &zone);
    println!("{}", report);
    Ok(report)
}

fn timestamp_command(timestamp: &str, tz: &str, verbose: bool) -> Result<TimestampReport> {
    let epoch = parse_epoch(timestamp).context("Failed to parse timestamp")?;
    let zone = resolve_zone(tz, verbose)?;
    let report = TimestampReport::decode(epoch, &zone).context("Failed to decode timestamp")?;
    println!("{}", report);
    Ok(report)
}

fn gen_service_command(config: &ServiceGenConfig, verbose: bool) -> Result<ServiceDefinition> {
    println!(
        "{} Scanning messages: {}",
        "→".cyan(),
        config.common_proto.display()
    );

    if verbose {
        println!("  Service: {}", config.service_name);
        println!("  Output: {}", config.service_proto.display());
    }

    let messages = scan_messages(&config.common_proto).context("Failed to scan proto messages")?;
    println!("{} Found {} messages", "✓".green(), messages.len());

    println!("{} Generating service definition...", "→".cyan());
    let service_def = generate_service(&config.service_name, &messages, &config.service_proto)
        .context("Failed to generate service")?;

    if verbose {
        for method in &service_def.methods {
            println!(
                "  • {}({}) returns ({})",
                method.name.cyan(),
                method.request,
                method.response
            );
        }
    }

    println!("\n{}", "✓ Service generated!".green().bold());
    println!(
        "  service {} with {} methods → {}",
        service_def.type_name.yellow(),
        service_def.methods.len(),
        config.service_proto.display()
    );

    Ok(service_def)
}

fn new_mapper_command(config: &MapperConfig, verbose: bool) -> Result<PathBuf> {
    let manifest = config.manifest_path();
    let module = read_go_module(&manifest).context("Failed to read go module")?;

    if verbose {
        println!("  Manifest: {}", manifest.display());
        println!("  Module: {}", module);
    }

    let mapper_def =
        MapperDefinition::new(&config.name, &module).context("Failed to prepare mapper")?;

    println!(
        "{} Generating mapper {}...",
        "→".cyan(),
        mapper_def.type_name.yellow()
    );
    let output_path =
        generate_mapper(mapper_def, &config.project_root).context("Failed to generate mapper")?;

    println!("\n{}", "✓ Mapper generated!".green().bold());
    println!("  📄 {}", display_relative(&output_path, &config.project_root));

    Ok(output_path)
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_now_defaults_to_local() {
        let cli = Cli::try_parse_from(["gtool", "now"]).unwrap();
        assert!(matches!(cli.command, Commands::Now { tz } if tz == "Local"));
    }

    #[test]
    fn test_parse_timestamp_with_zone() {
        let cli = Cli::try_parse_from(["gtool", "timestamp", "0", "-z", "UTC"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Timestamp { timestamp, tz } if timestamp == "0" && tz == "UTC"
        ));
    }

    #[test]
    fn test_parse_negative_timestamp() {
        let cli = Cli::try_parse_from(["gtool", "timestamp", "-86400", "--tz", "UTC"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Timestamp { timestamp, .. } if timestamp == "-86400"
        ));
    }

    #[test]
    fn test_parse_gen_svc() {
        let cli = Cli::try_parse_from([
            "gtool", "-v", "xh", "idl", "gen-svc", "-c", "common.proto", "-s", "user.proto",
            "-n", "user",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Xh {
                command:
                    XhCommands::Idl {
                        command:
                            IdlCommands::GenSvc {
                                common_proto,
                                service_proto,
                                name,
                            },
                    },
            } => {
                assert_eq!(common_proto, PathBuf::from("common.proto"));
                assert_eq!(service_proto, PathBuf::from("user.proto"));
                assert_eq!(name, "user");
            }
            _ => panic!("expected gen-svc"),
        }
    }

    fn parse_error_kind(args: &[&str]) -> ErrorKind {
        match Cli::try_parse_from(args) {
            Ok(_) => panic!("{args:?} should not parse"),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn test_gen_svc_requires_all_flags() {
        let kind = parse_error_kind(&["gtool", "xh", "idl", "gen-svc", "-c", "a.proto", "-n", "x"]);
        assert_eq!(kind, ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_exit_code(kind), 1);
    }

    #[test]
    fn test_mapper_new_requires_name() {
        let kind = parse_error_kind(&["gtool", "xh", "mapper", "new"]);
        assert_eq!(kind, ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_exit_code(kind), 1);

        assert!(Cli::try_parse_from(["gtool", "xh", "mapper", "new", "-n", "user_info"]).is_ok());
    }

    #[test]
    fn test_usage_errors_exit_one() {
        let unknown = parse_error_kind(&["gtool", "bogus"]);
        assert_eq!(usage_exit_code(unknown), 1);

        let bad_flag = parse_error_kind(&["gtool", "now", "--zone", "UTC"]);
        assert_eq!(usage_exit_code(bad_flag), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let help = parse_error_kind(&["gtool", "--help"]);
        assert_eq!(help, ErrorKind::DisplayHelp);
        assert_eq!(usage_exit_code(help), 0);

        let version = parse_error_kind(&["gtool", "--version"]);
        assert_eq!(version, ErrorKind::DisplayVersion);
        assert_eq!(usage_exit_code(version), 0);
    }

    #[test]
    fn test_help_lists_exit_status() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("EXIT STATUS:"));
        assert!(help.contains("1  any failure"));
    }

    #[test]
    fn test_timestamp_command_epoch_zero() {
        let report = timestamp_command("0", "UTC", false).unwrap();
        assert_eq!(report.zoned, "1970-01-01 00:00:00 UTC");
        assert_eq!(report.utc, "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_timestamp_command_rejects_bad_input() {
        assert!(timestamp_command("soon", "UTC", false).is_err());
        assert!(timestamp_command("0", "Nowhere/City", false).is_err());
    }

    #[test]
    fn test_now_command_rejects_unknown_zone() {
        assert!(now_command("Nowhere/City", false).is_err());
        assert!(now_command("UTC", true).is_ok());
    }

    #[test]
    fn test_gen_service_command() {
        let temp_dir = TempDir::new().unwrap();
        let common_proto = temp_dir.path().join("common.proto");
        let service_proto = temp_dir.path().join("ping.proto");
        fs::write(&common_proto, "message PingReq {\n}\nmessage PingResp {\n}\n").unwrap();

        let config = ServiceGenConfig {
            common_proto,
            service_proto: service_proto.clone(),
            service_name: "ping".to_string(),
        };
        let service_def = gen_service_command(&config, true).unwrap();
        assert_eq!(service_def.type_name, "Ping");

        let rendered = fs::read_to_string(service_proto).unwrap();
        assert!(rendered.contains("package core_api;"));
        assert!(rendered.contains("service Ping {"));
        assert_eq!(
            rendered
                .matches("rpc Ping(PingReq) returns (PingResp)")
                .count(),
            1
        );
    }

    #[test]
    fn test_gen_service_command_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let config = ServiceGenConfig {
            common_proto: temp_dir.path().join("missing.proto"),
            service_proto: temp_dir.path().join("out.proto"),
            service_name: "ping".to_string(),
        };

        assert!(gen_service_command(&config, false).is_err());
        assert!(!temp_dir.path().join("out.proto").exists());
    }

    #[test]
    fn test_new_mapper_command() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("go.mod"),
            "module example.com/proj\n\ngo 1.22\n",
        )
        .unwrap();

        let config = MapperConfig {
            name: "user_info".to_string(),
            project_root: temp_dir.path().to_path_buf(),
        };
        let output_path = new_mapper_command(&config, false).unwrap();

        let content = fs::read_to_string(output_path).unwrap();
        assert!(content.contains("NewUserInfoMongoMapper"));
        assert!(content.contains("example.com/proj"));
    }

    #[test]
    fn test_new_mapper_command_without_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let config = MapperConfig {
            name: "user_info".to_string(),
            project_root: temp_dir.path().to_path_buf(),
        };

        assert!(new_mapper_command(&config, false).is_err());
        assert!(!temp_dir.path().join("biz").exists());
    }

    #[test]
    fn test_new_mapper_command_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module example.com/proj\n").unwrap();

        let config = MapperConfig {
            name: String::new(),
            project_root: temp_dir.path().to_path_buf(),
        };
        assert!(new_mapper_command(&config, false).is_err());
    }

    #[test]
    fn test_new_mapper_command_rejects_path_like_name() {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path().join("proj");
        fs::create_dir(&project_root).unwrap();
        fs::write(project_root.join("go.mod"), "module example.com/proj\n").unwrap();

        let config = MapperConfig {
            name: "../../escape".to_string(),
            project_root: project_root.clone(),
        };
        assert!(new_mapper_command(&config, false).is_err());
        assert!(!project_root.join("biz").exists());
        assert!(!temp_dir.path().join("escape").exists());
    }
}
