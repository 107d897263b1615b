use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fair_jury::scoring::{classify, EvaluationSession, EvaluationType};
use fair_jury::timeline::layout;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the scoring criteria for a jury
    Criteria {
        /// Jury type: department or central
        #[arg(short = 't', long = "type", default_value = "department")]
        evaluation_type: EvaluationType,
    },
    /// Score a project and print the breakdown
    Score {
        /// Project identifier, e.g. PF-042
        project_id: String,

        /// Jury type: department or central
        #[arg(short = 't', long = "type", default_value = "department")]
        evaluation_type: EvaluationType,

        /// Criterion score as id=value (repeatable); out-of-range values are clamped
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, i64)>,

        /// Jury comments included in the submission
        #[arg(long, default_value = "")]
        comments: String,

        /// Write the submission payload as JSON to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the band for a single score
    Classify { score: u32, max: u32 },
    /// Lay out a schedule file (YAML or JSON) on the day timeline
    Timeline {
        schedule: PathBuf,

        /// Print layout boxes as JSON instead of bars
        #[arg(long)]
        json: bool,
    },
    /// Summarize a JSON file of feedback responses
    Feedback { responses: PathBuf },
}

#[derive(Parser, Debug)]
#[command(name = "fair-jury")]
#[command(about = "Project Fair jury scoring and schedule timeline", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fair-jury/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_assignment(s: &str) -> Result<(String, i64), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=value, got '{}'", s))?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score in '{}': {}", s, e))?;
    Ok((id.trim().to_string(), value))
}

fn main() {
    let cli = Cli::parse();
    fair_jury::logging::init(cli.verbose);

    let config = match fair_jury::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = fair_jury::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = fair_jury::output::should_use_colors();
    let catalogue = config.criteria();

    match cli.command {
        Commands::Criteria { evaluation_type } => {
            let criteria = catalogue.criteria_for(evaluation_type);
            println!("{}", fair_jury::output::format_criteria(&criteria));
        }
        Commands::Score {
            project_id,
            evaluation_type,
            set,
            comments,
            out,
        } => {
            let mut session = EvaluationSession::start(project_id, evaluation_type, &catalogue);
            for (criterion_id, value) in &set {
                if !session.criteria().iter().any(|c| &c.id == criterion_id) {
                    eprintln!(
                        "Unknown criterion '{}' for {} jury (see `fair-jury criteria --type {}`)",
                        criterion_id, evaluation_type, evaluation_type
                    );
                    std::process::exit(EXIT_USAGE);
                }
                session.set_score(criterion_id, *value);
            }
            session.set_comments(comments);

            println!("{}", fair_jury::output::format_breakdown(&session, use_colors));

            if let Some(path) = out {
                if let Err(e) = fair_jury::storage::save_submission(&path, &session.to_submission()) {
                    eprintln!("Failed to save submission: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                eprintln!("Submission written to {}", path.display());
            }
        }
        Commands::Classify { score, max } => {
            println!("{}", fair_jury::output::format_band(classify(score, max), use_colors));
        }
        Commands::Timeline { schedule, json } => {
            let schedule = match fair_jury::storage::load_schedule(&schedule) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Schedule error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let window = config.day_window();
            let boxes = layout(&schedule.events, window);

            if json {
                match serde_json::to_string_pretty(&boxes) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize layout: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                if let Some(ref title) = schedule.title {
                    println!("{}", title);
                }
                println!(
                    "{}",
                    fair_jury::output::format_timeline(&schedule.events, &boxes, window, use_colors)
                );
            }
        }
        Commands::Feedback { responses } => {
            let responses = match fair_jury::storage::load_feedback(&responses) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Feedback error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let summary = fair_jury::feedback::analyze(&responses);
            println!("{}", fair_jury::output::format_feedback(&summary, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
