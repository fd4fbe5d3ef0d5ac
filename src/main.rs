use clap::Parser;
use colored::Colorize;
use std::io::Write as _;
use zotmeta::application::{
    parse_end_date, parse_start_date, ApplyCategoryTagsService, BibliographyService,
    FindMissingTagsService, ListJournalsService, ListTagsService, UnionService,
};
use zotmeta::cli::{format_tag_list, write_journal_csv, write_union_csv, Cli, Commands};
use zotmeta::domain::FilterExpr;
use zotmeta::error::ZotmetaError;
use zotmeta::infrastructure::{io, Settings, ZoteroClient};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e.display_with_suggestions()).red());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ZotmetaError> {
    // Filters parse before configuration or any network call
    let filter = FilterExpr::parse(&cli.tag_filter)?;

    let settings = || {
        Settings::resolve(
            cli.key.clone(),
            cli.library_id.clone(),
            cli.library_type,
            cli.api_base.clone(),
        )
    };

    match &cli.command {
        Commands::GetTags { output } => {
            let client = ZoteroClient::new(&settings()?)?;
            let tags = ListTagsService::new(client).execute(&filter)?;
            let mut out = io::open_output(output)?;
            out.write_all(format_tag_list(&tags).as_bytes())?;
            Ok(())
        }

        Commands::PrintBibliography { output } => {
            let client = ZoteroClient::new(&settings()?)?;
            let html = BibliographyService::new(client).execute(&filter)?;
            let mut out = io::open_output(output)?;
            out.write_all(html.as_bytes())?;
            Ok(())
        }

        Commands::ApplyCategoryTags { tag, input } => {
            let match_tags = io::read_tag_list(input)?;
            let client = ZoteroClient::new(&settings()?)?;
            let report = ApplyCategoryTagsService::new(client).execute(tag, &match_tags)?;

            println!(
                "{} items scanned, {} updated, {} already tagged",
                report.scanned, report.updated, report.already_tagged
            );
            for failure in &report.failures {
                eprintln!(
                    "{}",
                    format!(
                        "FAILED {} ({}): {}",
                        failure.title, failure.key, failure.message
                    )
                    .yellow()
                );
            }
            if report.failures.is_empty() {
                Ok(())
            } else {
                Err(ZotmetaError::PartialUpdate {
                    failed: report.failures.len(),
                    attempted: report.updated + report.failures.len(),
                })
            }
        }

        Commands::FindMissingTags {
            local,
            remote,
            tags_list,
        } => {
            let local_tags = io::read_tag_list(tags_list)?;
            let client = ZoteroClient::new(&settings()?)?;
            let report = FindMissingTagsService::new(client).execute(&local_tags, &filter)?;

            let mut local_out = io::open_output(local)?;
            local_out.write_all(format_tag_list(&report.missing_local).as_bytes())?;
            let mut remote_out = io::open_output(remote)?;
            remote_out.write_all(format_tag_list(&report.missing_remote).as_bytes())?;
            Ok(())
        }

        Commands::GetUnion {
            x_tags,
            y_tags,
            output,
        } => {
            let cols = io::read_tag_list(x_tags)?;
            let rows = io::read_tag_list(y_tags)?;
            let client = ZoteroClient::new(&settings()?)?;
            let matrix = UnionService::new(client).execute(&cols, &rows, &filter)?;

            let out = io::open_output(output)?;
            write_union_csv(out, &matrix)
        }

        Commands::ListJournals {
            start_date,
            end_date,
            output,
        } => {
            let start = parse_start_date(start_date)?;
            let end = parse_end_date(end_date)?;
            let client = ZoteroClient::new(&settings()?)?;
            let journals = ListJournalsService::new(client).execute(&filter, start, end)?;

            let out = io::open_output(output)?;
            write_journal_csv(out, &journals)
        }
    }
}
