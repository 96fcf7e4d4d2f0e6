use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use rollcall::config::AppConfig;
use rollcall::modules::roster::service::RosterService;
use rollcall::state::init_app_state;
use rollcall_core::{classroom_id, hash_id, school_id};

#[derive(Parser)]
#[command(name = "rollcall-cli")]
#[command(about = "Rollcall CLI - Administrative tools for Rollcall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document ID derived from a string
    Hash {
        input: String,

        /// Trim the input the way school addresses are trimmed
        #[arg(long)]
        address: bool,
    },
    /// Print the classroom ID for a semester and teacher
    ClassroomId { semester: String, teacher: String },
    /// Link every teacher of a spreadsheet view into a semester
    ImportTeachers {
        /// Semester document ID
        #[arg(short = 's', long)]
        semester: String,

        /// Spreadsheet view; AIRTABLE_DEFAULT_VIEW when omitted
        #[arg(short = 'v', long)]
        view: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { input, address } => {
            let id = if address {
                school_id(&input)
            } else {
                hash_id(&input)
            };
            println!("{}", id);
        }
        Commands::ClassroomId { semester, teacher } => {
            println!("{}", classroom_id(&semester, &teacher));
        }
        Commands::ImportTeachers { semester, view } => {
            if let Err(e) = handle_import_teachers(semester, view).await {
                eprintln!("❌ Import failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn handle_import_teachers(semester: String, view: Option<String>) -> Result<(), anyhow::Error> {
    let config = AppConfig::from_env()?;
    let state = init_app_state(&config, None)?;
    let view = view.unwrap_or_else(|| state.default_view.clone());

    println!("📥 Importing view '{}' into semester '{}'...", view, semester);

    let summary = RosterService::import_teachers(
        &*state.store,
        &*state.roster,
        &state.roster_fields,
        &semester,
        &view,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("✅ Linked {} teachers", summary.classrooms.len());
    for classroom in &summary.classrooms {
        println!("   classroom {}", classroom);
    }
    if !summary.skipped.is_empty() {
        println!("⚠️  Skipped {} records", summary.skipped.len());
        for skipped in &summary.skipped {
            println!(
                "   {} (missing {})",
                skipped.record_id,
                skipped.missing.join(", ")
            );
        }
    }

    Ok(())
}
