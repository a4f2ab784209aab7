mod config;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use hr::names::NameCorpus;
use hr::{benchmark, ops, optimizer};
use migration::{Migrator, MigratorTrait};
use platform_db::{DatabaseSettings, DbPool, connect};
use platform_obs::{ObsConfig, init_tracing};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "rosterctl", version, about = "Employee roster management")]
struct Cli {
    /// Operation mode: 1 schema, 2 create, 3 list, 4 generate, 5 benchmark,
    /// 6 optimize
    mode: i32,
    /// Mode-specific arguments (mode 2: "Full Name" YYYY-MM-DD Gender)
    #[arg(trailing_var_arg = true)]
    extra: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();

    if !(1..=6).contains(&cli.mode) {
        eprintln!("Unknown mode: {}", cli.mode);
        eprintln!("Available modes: 1 (schema), 2 (create), 3 (list), 4 (generate), 5 (benchmark), 6 (optimize)");
        return Ok(());
    }

    let settings = DatabaseSettings::from_env();
    let db = connect(&settings).await?;

    match cli.mode {
        1 => create_schema(&db).await,
        2 => create_one(&db, &cli.extra).await,
        3 => list_all(&db).await,
        4 => generate(&db).await,
        5 => run_benchmark(&db).await,
        _ => run_optimizer(&db).await,
    }
}

async fn create_schema(db: &DbPool) -> Result<()> {
    Migrator::up(db, None).await?;
    println!("Employees table and indexes are ready");
    Ok(())
}

async fn create_one(db: &DbPool, extra: &[String]) -> Result<()> {
    let [full_name, birth_date, gender] = extra else {
        eprintln!("Error: mode 2 expects exactly 3 arguments");
        eprintln!("Usage: rosterctl 2 \"Full Name\" YYYY-MM-DD Gender");
        eprintln!("Example: rosterctl 2 \"Ivanov Petr Sergeevich\" 2009-07-12 Male");
        return Ok(());
    };

    let today = Local::now().date_naive();
    let created = ops::create_employee(db, full_name, birth_date, gender, today).await?;
    println!("Employee created successfully");
    println!("Full Name: {}", created.full_name);
    println!("Birth Date: {}", created.birth_date);
    println!("Gender: {}", created.gender);
    println!("Age: {} years", created.age);
    Ok(())
}

async fn list_all(db: &DbPool) -> Result<()> {
    let employees = ops::list_employees(db).await?;
    if employees.is_empty() {
        println!("No employees found");
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("Full Name | Birth Date | Gender | Age");
    println!("{}", "-".repeat(50));
    for employee in employees {
        println!(
            "{} | {} | {} | {}",
            employee.full_name,
            employee.birth_date,
            employee.gender,
            employee.age_on(today)
        );
    }
    Ok(())
}

async fn generate(db: &DbPool) -> Result<()> {
    let config = AppConfig::load()?;
    let run = ops::GenerationRunConfig {
        total_records: config.total_records,
        chunk_size: config.chunk_size,
        seed: config.seed,
    };
    let corpus = NameCorpus::builtin();
    let today = Local::now().date_naive();

    println!("Generating {} random employees...", run.total_records);
    let report = ops::generate_mass_data(db, &run, &corpus, today).await?;
    println!("Data generation completed");
    println!("Total males: {}", report.stats.male_count);
    println!("Total females: {}", report.stats.female_count);
    println!("Total records: {}", report.total_persisted);
    Ok(())
}

async fn run_benchmark(db: &DbPool) -> Result<()> {
    let timing = benchmark::male_f_surname_count(db).await?;
    println!("Found: {} employees", timing.count);
    println!("Execution time: {:.4} seconds", timing.elapsed_seconds());
    Ok(())
}

async fn run_optimizer(db: &DbPool) -> Result<()> {
    let report = optimizer::optimize(db).await?;
    for note in &report.index_notes {
        println!("Note: {note}");
    }
    println!(
        "Before: {:.4} seconds ({} rows)",
        report.before.elapsed_seconds(),
        report.before.count
    );
    println!(
        "After: {:.4} seconds ({} rows)",
        report.after.elapsed_seconds(),
        report.after.count
    );
    match (report.improvement_percent, report.verdict()) {
        (Some(percent), Some(verdict)) => {
            println!("Improvement: {percent:.2}%");
            println!("Verdict: {verdict}");
        }
        _ => println!("Before-time too small to compare; no conclusion"),
    }
    Ok(())
}
