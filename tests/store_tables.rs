// tests/store_tables.rs
//
// CSV parsing + seed integrity, without touching the filesystem cache.
//
use std::{env, fs};

use parkview::csv::{self, Delim};
use parkview::model::{League, Roof, Surface};
use parkview::store;

#[test]
fn seed_parses_thirty_pairings() {
    let (teams, stadiums) = store::load_seed().expect("seed parses");
    assert_eq!(teams.len(), 30);
    assert_eq!(stadiums.len(), 30);

    // 15/15 league split
    let al = teams.iter().filter(|t| t.league == League::American).count();
    assert_eq!(al, 15);

    // every stadium's owner exists
    for s in &stadiums {
        assert!(teams.iter().any(|t| t.id == s.team_id), "orphan stadium {}", s.id);
    }
}

#[test]
fn parse_tables_accepts_headerless_input() {
    let text = "7,Cincinnati Reds,National,107,Great American Ball Park,\"Cincinnati, Ohio\",2003,42319,Retro Modern,Open,Grass,404\n";
    let (teams, stadiums) = store::parse_tables(text).expect("row parses");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].league, League::National);
    assert_eq!(stadiums[0].location, "Cincinnati, Ohio");
    assert_eq!(stadiums[0].roof, Roof::Open);
    assert_eq!(stadiums[0].center_field_dist, 404);
}

#[test]
fn parse_tables_reports_bad_cells_with_line_context() {
    let text = "1,Team,American,101,Park,Town,1990,40000,Modern,Open,Grass,abc\n";
    let err = store::parse_tables(text).unwrap_err().to_string();
    assert!(err.contains("line 1"), "{err}");
    assert!(err.contains("center_field_dist"), "{err}");

    let text = "1,Team,Pacific,101,Park,Town,1990,40000,Modern,Open,Grass,400\n";
    let err = store::parse_tables(text).unwrap_err().to_string();
    assert!(err.contains("unknown league"), "{err}");
}

#[test]
fn surface_tokens_form_a_closed_enum() {
    assert_eq!(Surface::parse("Grass"), Some(Surface::Grass));
    assert_eq!(Surface::parse("AstroTurf"), Some(Surface::AstroTurf));
    assert_eq!(Surface::parse("AstroTurf 3D"), Some(Surface::AstroTurf3D));
    assert_eq!(Surface::parse("Hybrid"), None);

    // the seed exercises every token the enum accepts
    let (_, stadiums) = store::load_seed().unwrap();
    assert!(stadiums.iter().any(|s| s.surface == Surface::AstroTurf3D));
}

#[test]
fn malformed_cache_errors_and_is_left_alone() {
    let path = env::temp_dir().join(format!("parkview_bad_cache_{}.csv", std::process::id()));
    fs::write(&path, "not,a,valid,row\n").unwrap();

    let err = store::load_from(&path).unwrap_err().to_string();
    assert!(err.contains("expected 12 fields"), "{err}");

    // the user's file must survive a failed load untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "not,a,valid,row\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_cache_is_seeded_and_written() {
    let path = env::temp_dir().join(format!("parkview_seed_cache_{}.csv", std::process::id()));
    let _ = fs::remove_file(&path);

    let (teams, stadiums) = store::load_from(&path).unwrap();
    assert_eq!(teams.len(), 30);
    assert_eq!(stadiums.len(), 30);
    assert!(path.exists());

    // second load reads the file it just wrote
    let (teams2, stadiums2) = store::load_from(&path).unwrap();
    assert_eq!(teams, teams2);
    assert_eq!(stadiums, stadiums2);
    let _ = fs::remove_file(&path);
}

#[test]
fn parse_tables_rejects_short_rows() {
    let err = store::parse_tables("1,Team,American\n").unwrap_err().to_string();
    assert!(err.contains("expected 12 fields"), "{err}");
}

#[test]
fn record_row_round_trips_through_csv() {
    let (teams, stadiums) = store::load_seed().unwrap();
    let rows: Vec<Vec<String>> = stadiums
        .iter()
        .map(|s| {
            let t = teams.iter().find(|t| t.id == s.team_id).unwrap();
            store::record_row(t, s)
        })
        .collect();

    let headers = Some(store::RECORD_HEADERS.iter().map(|h| h.to_string()).collect());
    let text = csv::rows_to_string(&rows, &headers, Delim::Csv);

    let (teams2, stadiums2) = store::parse_tables(&text).expect("reparse");
    assert_eq!(teams, teams2);
    assert_eq!(stadiums, stadiums2);
}

#[test]
fn csv_parser_handles_quotes_and_crlf() {
    let rows = csv::parse_rows("a,\"b,\"\"x\"\"\",c\r\nd,e,f\r\n", Delim::Csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "b,\"x\"");
    assert_eq!(rows[1], vec!["d", "e", "f"]);
}
