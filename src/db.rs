// src/db.rs
//
// In-memory database over the two reference tables. Lookups by id
// return explicit NotFound errors instead of propagating bad indexes;
// the join surfaces a missing team the same way rather than silently
// dropping the stadium.

use std::error::Error;
use std::fmt;

use crate::model::{Record, Stadium, Team};
use crate::store;

#[derive(Debug, PartialEq, Eq)]
pub enum DbError {
    TeamNotFound(u32),
    StadiumNotFound(u32),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::TeamNotFound(id) => write!(f, "no team with id {}", id),
            DbError::StadiumNotFound(id) => write!(f, "no stadium with id {}", id),
        }
    }
}

impl Error for DbError {}

pub struct Database {
    teams: Vec<Team>,
    stadiums: Vec<Stadium>,
}

impl Database {
    /// Load from the local store (cache file or embedded seed).
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let (teams, stadiums) = store::load()?;
        Ok(Self { teams, stadiums })
    }

    pub fn from_tables(teams: Vec<Team>, stadiums: Vec<Stadium>) -> Self {
        Self { teams, stadiums }
    }

    /// Fresh owned snapshot of every team/stadium pairing, in stadium
    /// table order. Callers re-fetch this on every view refresh.
    pub fn teams_and_stadiums(&self) -> Result<Vec<Record>, DbError> {
        self.stadiums
            .iter()
            .map(|stadium| {
                let team = self.team_by_id(stadium.team_id)?;
                Ok(Record { team: team.clone(), stadium: stadium.clone() })
            })
            .collect()
    }

    /// The team table itself, in table order (one entry per team).
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_by_id(&self, id: u32) -> Result<&Team, DbError> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or(DbError::TeamNotFound(id))
    }

    pub fn stadium_by_id(&self, id: u32) -> Result<&Stadium, DbError> {
        self.stadiums
            .iter()
            .find(|s| s.id == id)
            .ok_or(DbError::StadiumNotFound(id))
    }

    pub fn team_count(&self) -> usize { self.teams.len() }
    pub fn stadium_count(&self) -> usize { self.stadiums.len() }
}
