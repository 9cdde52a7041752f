// src/fmt.rs
//
// Presentation helpers: thousands separators and the fixed-order
// detail block shown in the stadium dialog. Field order is a contract
// (tests/detail_format.rs); don't reorder casually.

use crate::model::{Stadium, Team};

/// Group digits with commas: 41915 → "41,915".
pub fn comma_separate(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const LABEL_WIDTH: usize = 24;

fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH));
}

/// Multi-line team + stadium summary for the detail dialog.
/// Rendered monospace, so plain width padding lines the values up.
pub fn detail_block(team: &Team, stadium: &Stadium) -> String {
    let mut out = s!("        Team Information\n");
    line(&mut out, "Team Name:", &team.name);
    line(&mut out, "League:", team.league.label());
    line(&mut out, "Stadium Name:", &stadium.name);
    line(&mut out, "Location:", &stadium.location);
    line(&mut out, "Year Opened:", &stadium.year_opened.to_string());
    line(&mut out, "Seating Capacity:", &comma_separate(stadium.seating_capacity as u64));
    line(&mut out, "Typology:", stadium.typology.label());
    line(&mut out, "Roof Type:", stadium.roof.label());
    line(&mut out, "Playing Surface:", stadium.surface.label());
    line(&mut out, "Center field Distance:", &comma_separate(stadium.center_field_dist as u64));
    out
}
