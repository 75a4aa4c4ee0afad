use aws_cidr_merge::config::{Settings, LOG_CONFIG_FILE};
use aws_cidr_merge::output::{format_terraform_entries, print_cidr_list, print_summary};
use aws_cidr_merge::{check_for_duplicate_cidrs, get_input_cidrs, merge_cidrs_with};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

/// Use `log4rs.yml` when present, otherwise log `Info` and above to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
        log4rs::init_config(config)?;
        log::warn!("{LOG_CONFIG_FILE} not loaded ({e}), logging to stderr");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let settings = Settings::from_env()?;
    log::info!(
        "Region '{}' strategy {}",
        settings.region,
        settings.strategy
    );

    // A failed download is reported and treated as an empty list.
    let cidrs = get_input_cidrs(&settings).await.unwrap_or_else(|e| {
        log::error!("Error fetching IP ranges: {e}");
        Vec::new()
    });
    if cidrs.is_empty() {
        println!("No IP ranges found or error occurred.");
        return Ok(());
    }
    check_for_duplicate_cidrs(&cidrs)?;

    print_cidr_list(
        &format!("Found original CIDRs for {}", settings.region),
        &cidrs,
    );

    let merged = merge_cidrs_with(&cidrs, settings.strategy)?;
    print_summary(cidrs.len(), merged.len());

    println!("\n{}", "Terraform format:".bold());
    println!("{}", format_terraform_entries(&merged));

    log::info!("#End main()");
    Ok(())
}
