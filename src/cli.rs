// src/cli.rs
use std::{env, fs, path::PathBuf};

use crate::csv::{self, Delim};
use crate::db::Database;
use crate::filter::{FilterMode, RecordView};
use crate::fmt::{comma_separate, detail_block};
use crate::store;

pub struct Params {
    pub mode: FilterMode,
    pub list_teams: bool,            // list teams then exit
    pub detail: Option<u32>,         // print one stadium's detail block
    pub out: Option<PathBuf>,        // export to file instead of stdout
    pub format: Delim,
    pub include_headers: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            mode: FilterMode::All,
            list_teams: false,
            detail: None,
            out: None,
            format: Delim::Csv,
            include_headers: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let db = Database::load()?;

    if params.list_teams {
        for team in db.teams() {
            println!("{},{}", team.id, team.name);
        }
        return Ok(());
    }

    if let Some(id) = params.detail {
        let stadium = db.stadium_by_id(id)?;
        let team = db.team_by_id(stadium.team_id)?;
        print!("{}", detail_block(team, stadium));
        return Ok(());
    }

    let records = db.teams_and_stadiums()?;
    let view = RecordView::build(&records, params.mode);

    let rows: Vec<Vec<String>> = view
        .row_ix
        .iter()
        .map(|&ix| store::record_row(&records[ix].team, &records[ix].stadium))
        .collect();
    let headers = params
        .include_headers
        .then(|| store::RECORD_HEADERS.iter().map(|h| s!(*h)).collect());

    let text = csv::rows_to_string(&rows, &headers, params.format);

    match params.out {
        Some(path) => {
            fs::write(&path, text)?;
            logf!("CLI: exported {} row(s) to {}", view.len(), path.display());
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }

    println!("Total Teams/Stadiums: {}", comma_separate(view.len() as u64));
    println!("Total Seating Capacity: {}", comma_separate(view.total_seating));
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-m" | "--mode" => {
                let v = args.next().ok_or("Missing value for --mode")?;
                params.mode = match v.to_ascii_lowercase().as_str() {
                    "all" => FilterMode::All,
                    "open-roof" => FilterMode::OpenRoof,
                    "american" => FilterMode::AmericanLeague,
                    "national" => FilterMode::NationalLeague,
                    "max-distance" => FilterMode::MaxCenterField,
                    "min-distance" => FilterMode::MinCenterField,
                    other => return Err(format!("Unknown mode: {}", other).into()),
                };
            }
            "--list-teams" => params.list_teams = true,
            "-d" | "--detail" => {
                let v: u32 = args.next().ok_or("Missing stadium id")?.parse()?;
                params.detail = Some(v);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
