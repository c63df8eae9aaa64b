//! Plain-text rendering for the CLI.

use rand::Rng;

use league_core::{League, MatchSimulator, Prediction, Standing};

pub fn print_fixtures(league: &League) {
    for week in 1..=league.season().total_weeks {
        println!("Week {}", week);
        for m in league.fixtures_for_week(week) {
            println!("  {:>20}  v  {}", team_name(league, m.home_team_id), team_name(league, m.away_team_id));
        }
    }
}

pub fn print_results(league: &League) {
    for week in 1..=league.season().current_week {
        println!("Week {}", week);
        for m in league.fixtures_for_week(week) {
            let score = m.result.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>20} {:^5} {}",
                team_name(league, m.home_team_id),
                score,
                team_name(league, m.away_team_id)
            );
        }
    }
    println!();
}

pub fn print_table(table: &[Standing]) {
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for (pos, s) in table.iter().enumerate() {
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            pos + 1,
            s.team_name,
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goals_for,
            s.goals_against,
            s.goal_difference,
            s.points
        );
    }
    println!();
}

pub fn print_predictions(predictions: &[Prediction], remaining_weeks: u32) {
    if predictions.iter().all(|p| p.percentage == 0) {
        println!("Title odds open up with 3 weeks to go ({} remaining)", remaining_weeks);
        return;
    }
    println!("Title odds ({} weeks remaining)", remaining_weeks);
    for p in predictions {
        println!("  {:<20} {:>3}%", p.team_name, p.percentage);
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PairingSummary {
    pub trials: u32,
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
    pub home_goals: u64,
    pub away_goals: u64,
}

impl PairingSummary {
    fn rate(&self, count: u32) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }

    fn average(&self, goals: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            goals as f64 / self.trials as f64
        }
    }
}

pub fn sample_pairing<R: Rng + ?Sized>(
    simulator: &MatchSimulator,
    home: u8,
    away: u8,
    trials: u32,
    rng: &mut R,
) -> PairingSummary {
    let mut summary = PairingSummary { trials, ..Default::default() };
    for _ in 0..trials {
        let score = simulator.simulate(home, away, rng);
        summary.home_goals += score.home as u64;
        summary.away_goals += score.away as u64;
        match score.home.cmp(&score.away) {
            std::cmp::Ordering::Greater => summary.home_wins += 1,
            std::cmp::Ordering::Less => summary.away_wins += 1,
            std::cmp::Ordering::Equal => summary.draws += 1,
        }
    }
    summary
}

pub fn print_pairing(home: u8, away: u8, summary: &PairingSummary) {
    let (home_xg, away_xg) = MatchSimulator::default().expected_goals(home, away);
    println!("Home {} v Away {} over {} matches", home, away, summary.trials);
    println!("  expected goals (default model): {:.2} - {:.2}", home_xg, away_xg);
    println!(
        "  average score: {:.2} - {:.2}",
        summary.average(summary.home_goals),
        summary.average(summary.away_goals)
    );
    println!(
        "  home {:.1}% / draw {:.1}% / away {:.1}%",
        summary.rate(summary.home_wins) * 100.0,
        summary.rate(summary.draws) * 100.0,
        summary.rate(summary.away_wins) * 100.0
    );
}

fn team_name(league: &League, id: league_core::TeamId) -> String {
    league.registry().get(id).map(|t| t.name.clone()).unwrap_or_else(|| format!("#{}", id))
}
