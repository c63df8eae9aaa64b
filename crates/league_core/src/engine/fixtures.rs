//! Double round-robin scheduling (circle method).
//!
//! The first half pairs teams with the classic circle rotation: index 0 stays
//! put while the rest turn one slot per round. The second half replays the
//! first with weeks shifted by `N-1` and home/away swapped.

use tracing::debug;

use crate::error::{LeagueError, Result};
use crate::models::{Match, Team, TeamId};

/// Build the full home-and-away schedule for `teams`, in input order.
///
/// # Errors
/// * `InsufficientTeams` - fewer than 2 teams
/// * `OddTeamCount` - the circle method here has no byes
pub fn generate_fixtures(teams: &[Team]) -> Result<Vec<Match>> {
    let n = teams.len();
    if n < 2 {
        return Err(LeagueError::InsufficientTeams { found: n });
    }
    if n % 2 != 0 {
        return Err(LeagueError::OddTeamCount { found: n });
    }

    let first_half = single_round_robin(teams);
    let half_weeks = (n - 1) as u32;

    let mut matches = Vec::with_capacity(first_half.len() * 2);
    matches.extend(first_half.iter().copied());
    matches.extend(
        first_half.iter().map(|&(week, home, away)| (week + half_weeks, away, home)),
    );

    let matches: Vec<Match> = matches
        .into_iter()
        .enumerate()
        .map(|(i, (week, home, away))| Match::scheduled(i as u32 + 1, week, home, away))
        .collect();

    debug!(teams = n, matches = matches.len(), weeks = 2 * half_weeks, "fixtures generated");
    Ok(matches)
}

/// (week, home, away) triples for one pass of the circle.
fn single_round_robin(teams: &[Team]) -> Vec<(u32, TeamId, TeamId)> {
    let n = teams.len();
    let mut ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let mut out = Vec::with_capacity(n * (n - 1) / 2);

    for round in 0..n - 1 {
        let week = round as u32 + 1;
        for i in 0..n / 2 {
            let (a, b) = (ids[i], ids[n - 1 - i]);
            // alternate home side by round parity
            if round % 2 == 0 {
                out.push((week, a, b));
            } else {
                out.push((week, b, a));
            }
        }
        ids[1..].rotate_right(1);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn make_teams(n: usize) -> Vec<Team> {
        (0..n).map(|i| Team::new(i as u32 + 1, format!("Team {}", i + 1), 50)).collect()
    }

    #[test]
    fn test_rejects_fewer_than_two_teams() {
        assert_eq!(generate_fixtures(&[]), Err(LeagueError::InsufficientTeams { found: 0 }));
        assert_eq!(
            generate_fixtures(&make_teams(1)),
            Err(LeagueError::InsufficientTeams { found: 1 })
        );
    }

    #[test]
    fn test_rejects_odd_team_count() {
        assert_eq!(generate_fixtures(&make_teams(5)), Err(LeagueError::OddTeamCount { found: 5 }));
    }

    #[test]
    fn test_two_teams_play_home_and_away() {
        let matches = generate_fixtures(&make_teams(2)).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].week, matches[0].home_team_id, matches[0].away_team_id), (1, TeamId(1), TeamId(2)));
        assert_eq!((matches[1].week, matches[1].home_team_id, matches[1].away_team_id), (2, TeamId(2), TeamId(1)));
    }

    #[test]
    fn test_four_team_schedule_layout() {
        let matches = generate_fixtures(&make_teams(4)).unwrap();
        let pairs: Vec<(u32, u32, u32)> =
            matches.iter().map(|m| (m.week, m.home_team_id.0, m.away_team_id.0)).collect();

        // round 0: [1,2,3,4]; round 1: [1,4,2,3] swapped; round 2: [1,3,4,2]
        assert_eq!(
            pairs,
            vec![
                (1, 1, 4),
                (1, 2, 3),
                (2, 3, 1),
                (2, 2, 4),
                (3, 1, 2),
                (3, 3, 4),
                (4, 4, 1),
                (4, 3, 2),
                (5, 1, 3),
                (5, 4, 2),
                (6, 2, 1),
                (6, 4, 3),
            ]
        );
    }

    #[test]
    fn test_match_ids_are_sequential() {
        let matches = generate_fixtures(&make_teams(6)).unwrap();
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.id.0, i as u32 + 1);
            assert!(m.is_unplayed());
        }
    }

    #[test]
    fn test_deterministic() {
        let teams = make_teams(8);
        assert_eq!(generate_fixtures(&teams).unwrap(), generate_fixtures(&teams).unwrap());
    }

    #[test]
    fn test_home_away_balanced_within_first_half() {
        let teams = make_teams(6);
        let matches = generate_fixtures(&teams).unwrap();
        let mut home_counts: HashMap<TeamId, u32> = HashMap::new();
        for m in matches.iter().filter(|m| m.week <= 5) {
            *home_counts.entry(m.home_team_id).or_default() += 1;
        }
        for team in &teams {
            let homes = home_counts.get(&team.id).copied().unwrap_or(0);
            assert!((1..=4).contains(&homes), "{} has {} home games", team.name, homes);
        }
    }

    #[test]
    fn test_nobody_plays_twice_in_a_week() {
        let matches = generate_fixtures(&make_teams(10)).unwrap();
        let mut seen: HashSet<(u32, TeamId)> = HashSet::new();
        for m in &matches {
            assert!(seen.insert((m.week, m.home_team_id)));
            assert!(seen.insert((m.week, m.away_team_id)));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_round_robin_invariants(half in 1usize..=10) {
                let n = half * 2;
                let teams = make_teams(n);
                let matches = generate_fixtures(&teams).unwrap();

                prop_assert_eq!(matches.len(), n * (n - 1));

                let mut per_week: HashMap<u32, usize> = HashMap::new();
                let mut per_team: HashMap<TeamId, usize> = HashMap::new();
                let mut ordered: HashMap<(TeamId, TeamId), usize> = HashMap::new();

                for m in &matches {
                    prop_assert_ne!(m.home_team_id, m.away_team_id);
                    *per_week.entry(m.week).or_default() += 1;
                    *per_team.entry(m.home_team_id).or_default() += 1;
                    *per_team.entry(m.away_team_id).or_default() += 1;
                    *ordered.entry((m.home_team_id, m.away_team_id)).or_default() += 1;
                }

                prop_assert_eq!(per_week.len(), 2 * (n - 1));
                for week in 1..=(2 * (n - 1)) as u32 {
                    prop_assert_eq!(per_week.get(&week).copied(), Some(n / 2));
                }
                for team in &teams {
                    prop_assert_eq!(per_team.get(&team.id).copied(), Some(2 * (n - 1)));
                }
                for a in &teams {
                    for b in &teams {
                        if a.id != b.id {
                            prop_assert_eq!(ordered.get(&(a.id, b.id)).copied(), Some(1));
                        }
                    }
                }
            }
        }
    }
}
