//! League table aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::warn;

use crate::models::{Match, Score, Standing, Team, TeamId};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Build the ordered table from every match carrying a result.
///
/// Every registered team gets a row, even with nothing played. Rows are
/// ordered by points, goal difference, then goals for (all descending);
/// anything still level keeps `teams` order.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<Standing> {
    let mut rows: Vec<Standing> =
        teams.iter().map(|t| Standing::empty(t.id, t.name.clone())).collect();
    let index: HashMap<TeamId, usize> =
        teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    for m in matches {
        let Some(score) = m.result else {
            continue;
        };
        match (index.get(&m.home_team_id), index.get(&m.away_team_id)) {
            (Some(&home), Some(&away)) if home != away => {
                apply_result(&mut rows, home, away, score);
            }
            _ => {
                warn!(
                    match_id = %m.id,
                    home = %m.home_team_id,
                    away = %m.away_team_id,
                    "skipping result for unregistered team"
                );
            }
        }
    }

    for row in &mut rows {
        row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
    }

    // sort_by is stable
    rows.sort_by(compare_rows);
    rows
}

fn apply_result(rows: &mut [Standing], home: usize, away: usize, score: Score) {
    let (home_goals, away_goals) = (score.home as u32, score.away as u32);

    {
        let row = &mut rows[home];
        row.played += 1;
        row.goals_for += home_goals;
        row.goals_against += away_goals;
    }
    {
        let row = &mut rows[away];
        row.played += 1;
        row.goals_for += away_goals;
        row.goals_against += home_goals;
    }

    match home_goals.cmp(&away_goals) {
        Ordering::Greater => award_win(rows, home, away),
        Ordering::Less => award_win(rows, away, home),
        Ordering::Equal => {
            for side in [home, away] {
                rows[side].drawn += 1;
                rows[side].points += POINTS_FOR_DRAW;
            }
        }
    }
}

fn award_win(rows: &mut [Standing], winner: usize, loser: usize) {
    rows[winner].won += 1;
    rows[winner].points += POINTS_FOR_WIN;
    rows[loser].lost += 1;
}

fn compare_rows(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}
