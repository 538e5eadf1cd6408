//! Season joiner
//!
//! Merges one player's per-game rows with the matching advanced, award,
//! salary and rating rows, then collapses mid-season trades into the
//! aggregate `TOT` row.

use crate::types::{
    fields, AwardRecord, JoinedSeason, Player, RatingsIndex, Record, SalaryRecord, SeasonRecord,
    TOTAL_TEAM,
};

/// Everything extracted from one player's page.
#[derive(Debug, Clone, Default)]
pub struct SeasonSources {
    pub basic: Vec<SeasonRecord>,
    pub advanced: Vec<SeasonRecord>,
    pub awards: Vec<AwardRecord>,
    /// Salary history, with the current contract appended when present
    pub salaries: Vec<SalaryRecord>,
    pub high_school: Option<String>,
}

/// Join all sources for one player, one output row per season.
///
/// Field precedence, lowest first: roster attributes, `HS`, rating fields,
/// advanced row, empty `Award`, award row, salary row, per-game row. A
/// later source overwrites an earlier one on a field-name collision.
pub fn join_seasons(
    player: &Player,
    sources: &SeasonSources,
    ratings: &RatingsIndex,
) -> Vec<JoinedSeason> {
    let joined = sources
        .basic
        .iter()
        .map(|basic| join_row(player, basic, sources, ratings))
        .collect();

    resolve_multi_team(joined)
}

fn join_row(
    player: &Player,
    basic: &SeasonRecord,
    sources: &SeasonSources,
    ratings: &RatingsIndex,
) -> JoinedSeason {
    let season = basic.get_raw(fields::SEASON);
    let tm = basic.get_raw(fields::TM);

    let advanced = sources
        .advanced
        .iter()
        .find(|a| a.get_raw(fields::SEASON) == season && a.get_raw(fields::TM) == tm);
    let award = sources
        .awards
        .iter()
        .find(|w| season == Some(Some(w.season.as_str())));
    let salary = sources
        .salaries
        .iter()
        .find(|s| season == Some(Some(s.season.as_str())));
    let rating = ratings.find(
        &player.name,
        basic.season().unwrap_or_default(),
        basic.tm(),
    );

    let mut row = player.attributes.clone();
    row.insert(fields::HS, sources.high_school.clone());
    row.insert(fields::PIPM, rating.and_then(|r| r.pipm.clone()));
    row.insert(fields::WINS_ADDED, rating.and_then(|r| r.wins_added.clone()));
    if let Some(advanced) = advanced {
        row.merge(advanced);
    }
    row.set(fields::AWARD, "");
    if let Some(award) = award {
        row.merge(&award.to_record());
    }
    if let Some(salary) = salary {
        row.merge(&salary.to_record());
    }
    row.merge(basic);
    row
}

/// Collapse traded seasons and set the resolved `Team` field.
///
/// For a season with a `TOT` row, the per-team rows are dropped and the
/// `TOT` row's `Team` becomes their `Tm` values comma-joined in row order.
/// Every other row keeps `Team` equal to its `Tm`.
pub fn resolve_multi_team(rows: Vec<Record>) -> Vec<Record> {
    let traded: Vec<Option<String>> = rows
        .iter()
        .filter(|r| r.tm() == Some(TOTAL_TEAM))
        .map(|r| r.season().map(str::to_string))
        .collect();

    let is_traded = |r: &Record| traded.iter().any(|s| s.as_deref() == r.season());

    let (split, kept): (Vec<Record>, Vec<Record>) = rows
        .into_iter()
        .partition(|r| is_traded(r) && r.tm() != Some(TOTAL_TEAM));

    kept.into_iter()
        .map(|mut row| {
            let team = if row.tm() == Some(TOTAL_TEAM) {
                let teams: Vec<&str> = split
                    .iter()
                    .filter(|s| s.season() == row.season())
                    .map(|s| s.tm().unwrap_or_default())
                    .collect();
                Some(teams.join(","))
            } else {
                row.tm().map(str::to_string)
            };
            row.insert(fields::TEAM, team);
            row
        })
        .collect()
}

/// Starting year of a `YYYY-YY` season label.
///
/// # Examples
/// ```
/// use bbr_core::join::season_start_year;
///
/// assert_eq!(season_start_year("1999-00"), Some(1999));
/// assert_eq!(season_start_year("Career"), None);
/// ```
pub fn season_start_year(season: &str) -> Option<i32> {
    season.split('-').next()?.trim().parse().ok()
}

/// Keep rows whose season starts at or after `min_year`.
///
/// Rows without a parsable season (repeated header rows, career totals)
/// are dropped.
pub fn retain_from_year(rows: Vec<JoinedSeason>, min_year: i32) -> Vec<JoinedSeason> {
    rows.into_iter()
        .filter(|row| {
            row.season()
                .and_then(season_start_year)
                .is_some_and(|year| year >= min_year)
        })
        .collect()
}
