// src/store.rs
//
// Local persistence for the reference tables. One CSV row per
// team/stadium pairing; a seed dataset ships inside the binary and is
// written out as the cache the first time the app runs. The cache is
// the source of truth afterwards, so a user can edit or replace it.

use std::{error::Error, fs, path::Path};

use crate::csv::{self, Delim};
use crate::model::{League, Roof, Stadium, Surface, Team, Typology};

const STADIUMS_FILE: &str = ".store/stadiums.csv";

static SEED: &str = include_str!("seed_stadiums.csv");

pub const RECORD_HEADERS: &[&str] = &[
    "team_id", "team", "league",
    "stadium_id", "stadium", "location",
    "year_opened", "seating_capacity", "typology", "roof", "surface", "center_field_dist",
];

/// Load the reference tables: cache file if present, embedded seed
/// only when no cache exists yet (seeding also writes the cache so
/// later runs read from disk). A cache that exists but fails to parse
/// is an error for the caller — never silently replaced by the seed.
pub fn load() -> Result<(Vec<Team>, Vec<Stadium>), Box<dyn Error>> {
    load_from(Path::new(STADIUMS_FILE))
}

pub fn load_from(path: &Path) -> Result<(Vec<Team>, Vec<Stadium>), Box<dyn Error>> {
    if path.exists() {
        let text = fs::read_to_string(path)?;
        return match parse_tables(&text) {
            Ok(tables) => {
                logf!("Store: loaded cache ({} stadiums)", tables.1.len());
                Ok(tables)
            }
            Err(e) => {
                loge!("Store: cache unreadable ({})", e);
                Err(e)
            }
        };
    }

    let tables = parse_tables(SEED)?;
    if let Err(e) = write_cache(path, SEED) {
        logd!("Store: could not write cache ({})", e);
    } else {
        logf!("Store: seeded cache ({} stadiums)", tables.1.len());
    }
    Ok(tables)
}

/// Parse the embedded seed only (no filesystem). Test/bench entry.
pub fn load_seed() -> Result<(Vec<Team>, Vec<Stadium>), Box<dyn Error>> {
    parse_tables(SEED)
}

fn write_cache(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

/// Parse CSV text into the two tables. Teams are deduped by id; each
/// row carries its team inline so a hand-edited file stays one-line-
/// per-stadium. Any malformed cell is an error with line context.
pub fn parse_tables(text: &str) -> Result<(Vec<Team>, Vec<Stadium>), Box<dyn Error>> {
    let mut rows = csv::parse_rows(text, Delim::Csv);

    // Header row is optional; detect by the first cell.
    if rows.first().and_then(|r| r.first()).is_some_and(|c| c.eq_ignore_ascii_case("team_id")) {
        rows.remove(0);
    }

    let mut teams: Vec<Team> = Vec::new();
    let mut stadiums: Vec<Stadium> = Vec::with_capacity(rows.len());

    for (n, row) in rows.iter().enumerate() {
        let line = n + 1;
        if row.len() != RECORD_HEADERS.len() {
            return Err(format!("line {}: expected {} fields, got {}", line, RECORD_HEADERS.len(), row.len()).into());
        }

        let team_id: u32 = parse_num(&row[0], line, "team_id")?;
        let league = League::parse(&row[2])
            .ok_or_else(|| format!("line {}: unknown league: {}", line, row[2]))?;

        if !teams.iter().any(|t: &Team| t.id == team_id) {
            teams.push(Team { id: team_id, name: row[1].clone(), league });
        }

        stadiums.push(Stadium {
            id: parse_num(&row[3], line, "stadium_id")?,
            team_id,
            name: row[4].clone(),
            location: row[5].clone(),
            year_opened: parse_num(&row[6], line, "year_opened")?,
            seating_capacity: parse_num(&row[7], line, "seating_capacity")?,
            typology: Typology::parse(&row[8])
                .ok_or_else(|| format!("line {}: unknown typology: {}", line, row[8]))?,
            roof: Roof::parse(&row[9])
                .ok_or_else(|| format!("line {}: unknown roof: {}", line, row[9]))?,
            surface: Surface::parse(&row[10])
                .ok_or_else(|| format!("line {}: unknown surface: {}", line, row[10]))?,
            center_field_dist: parse_num(&row[11], line, "center_field_dist")?,
        });
    }

    Ok((teams, stadiums))
}

fn parse_num<T: std::str::FromStr>(cell: &str, line: usize, field: &str) -> Result<T, Box<dyn Error>> {
    cell.trim()
        .parse()
        .map_err(|_| format!("line {}: bad {}: {}", line, field, cell).into())
}

/// One export/display row per record, same column order as RECORD_HEADERS.
pub fn record_row(team: &Team, stadium: &Stadium) -> Vec<String> {
    vec![
        team.id.to_string(),
        team.name.clone(),
        s!(team.league.label()),
        stadium.id.to_string(),
        stadium.name.clone(),
        stadium.location.clone(),
        stadium.year_opened.to_string(),
        stadium.seating_capacity.to_string(),
        s!(stadium.typology.label()),
        s!(stadium.roof.label()),
        s!(stadium.surface.label()),
        stadium.center_field_dist.to_string(),
    ]
}
