//! Data types for the season extractor
//!
//! Table rows are dynamic: which columns a basic or advanced row carries
//! depends on the page header, so they are held in an ordered [`Record`].
//! Sources with a fixed shape (awards, salaries, ratings) get their own
//! structs and are converted to records only when joined.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{BbrError, Result};

/// Well-known field names shared across sources.
pub mod fields {
    pub const BBR_ID: &str = "bbrID";
    pub const SEASON: &str = "Season";
    pub const TM: &str = "Tm";
    pub const LG: &str = "Lg";
    pub const TEAM: &str = "Team";
    pub const AWARD: &str = "Award";
    pub const SALARY: &str = "Salary";
    pub const HS: &str = "HS";
    pub const PIPM: &str = "PIPM";
    pub const WINS_ADDED: &str = "Wins Added";
    pub const LINK: &str = "link";
    pub const NAME: &str = "name";
}

/// Team abbreviation the site uses for a multi-team aggregate season row.
pub const TOTAL_TEAM: &str = "TOT";

/// Ordered field-name → value map.
///
/// A field keeps the position where its name was first inserted; inserting
/// the same name again only replaces the value. `None` is a null value,
/// which is distinct from an empty string but serializes to an empty CSV
/// cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

/// One row of one source table for one player.
pub type SeasonRecord = Record;

/// A basic row merged with every matching source.
pub type JoinedSeason = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field, last writer wins.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Insert a non-null string value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, Some(value.into()));
    }

    /// Copy every field of `other` over this record, in `other`'s order.
    pub fn merge(&mut self, other: &Record) {
        for (name, value) in &other.fields {
            self.insert(name.clone(), value.clone());
        }
    }

    /// Value of a non-null field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_raw(name).flatten()
    }

    /// `None` if the field is absent, `Some(None)` if it is null.
    pub fn get_raw(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn season(&self) -> Option<&str> {
        self.get(fields::SEASON)
    }

    /// Team abbreviation as published in the row (`Tm`).
    pub fn tm(&self) -> Option<&str> {
        self.get(fields::TM)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Roster entry for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Short identifier derived from the profile link
    pub bbr_id: String,
    /// Display name, used to look up ratings
    pub name: String,
    /// Every roster column, in file order
    pub attributes: Record,
}

impl Player {
    /// Build a player from a roster row. The row must carry a `link`.
    pub fn from_attributes(attributes: Record) -> Result<Self> {
        let link = attributes.get(fields::LINK).unwrap_or_default();
        let bbr_id = bbr_id_from_link(link)?;
        let name = attributes.get(fields::NAME).unwrap_or_default().to_string();
        Ok(Self {
            bbr_id,
            name,
            attributes,
        })
    }
}

/// Derive the BBR ID from a profile link.
///
/// # Examples
/// ```
/// use bbr_core::types::bbr_id_from_link;
///
/// assert_eq!(bbr_id_from_link("/players/j/jordami01.html").unwrap(), "jordami01");
/// assert!(bbr_id_from_link("/players/").is_err());
/// ```
pub fn bbr_id_from_link(link: &str) -> Result<String> {
    let trimmed = link.replacen("/players/", "", 1).replacen(".html", "", 1);
    trimmed
        .split('/')
        .nth(1)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| BbrError::InvalidLink(link.to_string()))
}

/// Leaderboard award for one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub season: String,
    pub award: String,
}

impl AwardRecord {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.set(fields::SEASON, self.season.as_str());
        record.set(fields::AWARD, self.award.as_str());
        record
    }
}

/// Salary for one season, either from the salary history or the
/// current contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryRecord {
    pub season: String,
    pub team: String,
    pub league: String,
    /// Digits only; may be empty
    pub salary: String,
}

impl SalaryRecord {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.set(fields::SEASON, self.season.as_str());
        record.set(fields::TM, self.team.as_str());
        record.set(fields::LG, self.league.as_str());
        record.set(fields::SALARY, self.salary.as_str());
        record
    }
}

/// External impact rating for one player season.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "PIPM", default)]
    pub pipm: Option<String>,
    #[serde(rename = "Wins Added", default)]
    pub wins_added: Option<String>,
}

/// Ratings grouped by player name, file order kept within each group.
///
/// Loaded once and shared read-only across all players.
#[derive(Debug, Clone, Default)]
pub struct RatingsIndex {
    by_player: HashMap<String, Vec<RatingRecord>>,
}

impl RatingsIndex {
    pub fn new(records: impl IntoIterator<Item = RatingRecord>) -> Self {
        let mut by_player: HashMap<String, Vec<RatingRecord>> = HashMap::new();
        for record in records {
            by_player
                .entry(record.player.clone())
                .or_default()
                .push(record);
        }
        Self { by_player }
    }

    /// First rating for `player` whose season and team both match.
    pub fn find(&self, player: &str, season: &str, team: Option<&str>) -> Option<&RatingRecord> {
        self.by_player
            .get(player)?
            .iter()
            .find(|r| r.season == season && Some(r.team.as_str()) == team)
    }

    pub fn player_count(&self) -> usize {
        self.by_player.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_insert_keeps_first_position() {
        let mut record = Record::new();
        record.set("Season", "1999-00");
        record.set("Tm", "CHI");
        record.set("Season", "2000-01");

        let names: Vec<&str> = record.names().collect();
        assert_eq!(names, vec!["Season", "Tm"]);
        assert_eq!(record.season(), Some("2000-01"));
    }

    #[test]
    fn test_record_null_is_distinct_from_absent() {
        let mut record = Record::new();
        record.insert("PIPM", None);

        assert!(record.contains("PIPM"));
        assert_eq!(record.get("PIPM"), None);
        assert_eq!(record.get_raw("PIPM"), Some(None));
        assert_eq!(record.get_raw("Award"), None);
    }

    #[test]
    fn test_record_merge_overrides_values() {
        let mut base: Record = [("Season", "1999-00"), ("Award", "")].into_iter().collect();
        let award: Record = [("Season", "1999-00"), ("Award", "MVP-1")].into_iter().collect();
        base.merge(&award);

        assert_eq!(base.get("Award"), Some("MVP-1"));
        assert_eq!(base.names().count(), 2);
    }

    #[test]
    fn test_record_serializes_as_ordered_map() {
        let mut record = Record::new();
        record.set("Season", "1999-00");
        record.insert("PIPM", None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Season":"1999-00","PIPM":null}"#);
    }

    #[test]
    fn test_bbr_id_from_link() {
        assert_eq!(bbr_id_from_link("/players/j/jordami01.html").unwrap(), "jordami01");
        assert_eq!(bbr_id_from_link("/players/a/abdulka01.html").unwrap(), "abdulka01");
        assert!(matches!(
            bbr_id_from_link("jordami01"),
            Err(BbrError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_player_from_attributes() {
        let attributes: Record = [("name", "Michael Jordan"), ("link", "/players/j/jordami01.html")]
            .into_iter()
            .collect();
        let player = Player::from_attributes(attributes).unwrap();
        assert_eq!(player.bbr_id, "jordami01");
        assert_eq!(player.name, "Michael Jordan");
    }

    #[test]
    fn test_award_record_field_names() {
        let award = AwardRecord {
            season: "1990-91".to_string(),
            award: "NBA (1st)".to_string(),
        };
        let record = award.to_record();
        let names: Vec<&str> = record.names().collect();
        assert_eq!(names, vec!["Season", "Award"]);
        assert_eq!(record.get("Award"), Some("NBA (1st)"));
    }

    #[test]
    fn test_salary_record_field_names() {
        let salary = SalaryRecord {
            season: "1997-98".to_string(),
            team: "Chicago Bulls".to_string(),
            league: "NBA".to_string(),
            salary: "33140000".to_string(),
        };
        let record = salary.to_record();
        let names: Vec<&str> = record.names().collect();
        assert_eq!(names, vec!["Season", "Tm", "Lg", "Salary"]);
        assert_eq!(record.get("Salary"), Some("33140000"));
    }

    #[test]
    fn test_ratings_index_find() {
        let index = RatingsIndex::new(vec![
            RatingRecord {
                player: "Michael Jordan".to_string(),
                season: "1996-97".to_string(),
                team: "CHI".to_string(),
                pipm: Some("7.1".to_string()),
                wins_added: Some("21.3".to_string()),
            },
            RatingRecord {
                player: "Michael Jordan".to_string(),
                season: "1997-98".to_string(),
                team: "CHI".to_string(),
                pipm: Some("5.9".to_string()),
                wins_added: Some("18.0".to_string()),
            },
        ]);

        assert_eq!(index.player_count(), 1);
        let found = index.find("Michael Jordan", "1997-98", Some("CHI")).unwrap();
        assert_eq!(found.pipm.as_deref(), Some("5.9"));
        assert!(index.find("Michael Jordan", "1997-98", Some("WAS")).is_none());
        assert!(index.find("Scottie Pippen", "1997-98", Some("CHI")).is_none());
        assert!(index.find("Michael Jordan", "1997-98", None).is_none());
    }
}
