//! History command - list, delete, clear, or export finished-game records

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use super::GameChoice;
use crate::{
    adapters::JsonFileStore,
    cli::output,
    export::export_records_csv,
    identifiers::RecordId,
    ports::RecordStore,
    records::RecordStats,
};

#[derive(Parser, Debug)]
#[command(about = "Show or manage the finished-game history")]
pub struct HistoryArgs {
    /// Which game's history to operate on
    #[arg(long, value_enum, default_value_t = GameChoice::Othello)]
    pub game: GameChoice,

    /// Delete the record with this id
    #[arg(long, value_name = "ID")]
    pub delete: Option<String>,

    /// Delete every record
    #[arg(long, conflicts_with = "delete")]
    pub clear: bool,

    /// Export the history as CSV to this path
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

pub fn execute(args: HistoryArgs, data_dir: &Path) -> Result<()> {
    let store = JsonFileStore::for_game(data_dir, args.game.kind());

    if let Some(id) = args.delete {
        let removed = store.delete(&RecordId::new(id.as_str()))?;
        if removed {
            println!("Deleted record {id}.");
        } else {
            println!("No record with id {id}.");
        }
        return Ok(());
    }

    if args.clear {
        store.clear()?;
        println!("{} history cleared.", args.game.kind());
        return Ok(());
    }

    let records = store.records()?;

    if let Some(path) = args.export {
        export_records_csv(&path, &records)?;
        println!("Exported {} records to {}.", records.len(), path.display());
        return Ok(());
    }

    output::print_section(&format!("{} history", args.game.kind()));
    output::print_stats(&RecordStats::tally(&records));
    println!();

    if records.is_empty() {
        println!("  No game records yet.");
    } else {
        for record in &records {
            output::print_record(record);
        }
    }

    Ok(())
}
