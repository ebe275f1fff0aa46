use std::io::{self, BufRead, Write};

use scorer::domain::state::{CheckoutMode, GameMode, Match, MatchPhase, Settings, Team};
use scorer::domain::{checkout, roster, rules, stats, teams};
use scorer::services::match_flow::{MatchFlow, TurnOutcome};
use scorer::Config;
use scorer::Prompt;

mod telemetry;

fn main() -> io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment; no
    // dotfile loading here.
    let config = Config::from_env();
    if let Err(e) = config.ensure_data_dir() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    let mut flow = match MatchFlow::load_or_new(&config.data_dir) {
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("❌ Failed to open session: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🎯 scorer | data in {} (n new match, u undo, s stats, q quit)",
        config.data_dir.display()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(flow.state());
        let Some(line) = prompt_line(&mut lines, "> ")? else {
            break;
        };
        let line = line.trim().to_string();

        match line.as_str() {
            "" => {}
            "q" => break,
            "u" => {
                if let Err(e) = flow.undo() {
                    println!("✖ {e}");
                }
            }
            "s" => print_stats(flow.state()),
            "n" => {
                if let Err(e) = run_wizard(&mut flow, &mut lines) {
                    println!("✖ {e}");
                }
            }
            _ if line.starts_with("t ") => set_team(&mut flow, &line[2..]),
            _ if line.starts_with("p ") => set_player(&mut flow, &line[2..]),
            _ => {
                if flow.state().is_running() {
                    enter_score(&mut flow, &mut lines, &line)?;
                } else {
                    println!("no match in progress; 'n' starts one");
                }
            }
        }
    }

    println!("👋 bye");
    Ok(())
}

fn prompt_line(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn team_label(team: &Team) -> String {
    let names: Vec<&str> = team
        .players
        .iter()
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        format!("team {}", team.id)
    } else {
        names.join(" & ")
    }
}

fn print_board(m: &Match) {
    match m.phase {
        MatchPhase::Initialized => return,
        MatchPhase::Over => {
            if let Some(winner) = m.winner.and_then(|w| m.teams.get(w)) {
                println!(
                    "🏆 {} won the match {}-{}",
                    team_label(winner),
                    winner.wins,
                    m.teams
                        .iter()
                        .filter(|t| t.id != winner.id)
                        .map(|t| t.wins)
                        .max()
                        .unwrap_or(0)
                );
            }
            println!("   'u' reopens the last visit, 'n' starts a new match");
            return;
        }
        MatchPhase::Running => {}
    }

    let mut parts = Vec::new();
    for (idx, team) in m.teams.iter().enumerate() {
        let marker = if idx == m.curr_team_idx { "*" } else { "" };
        if m.settings.display_score {
            parts.push(format!(
                "{}{} {} left",
                team_label(team),
                marker,
                m.remaining_score(team.id)
            ));
        } else {
            parts.push(format!("{}{}", team_label(team), marker));
        }
    }
    println!("[leg {} | {}]", m.curr_leg_idx + 1, parts.join(" | "));

    if let Some(team) = m.current_team() {
        let remaining = m.remaining_score(team.id);
        if rules::in_checkout_window(remaining) {
            let suggestions = checkout::suggest_checkouts(remaining, m.settings.checkout_mode, 3);
            if !suggestions.is_empty() {
                let rendered: Vec<String> =
                    suggestions.iter().map(|c| c.to_string()).collect();
                println!("   checkout {remaining}: {}", rendered.join("  |  "));
            }
        }
        if let Some(player) = team.current_player() {
            println!("   {} to throw", player.name);
        }
    }
}

fn enter_score(
    flow: &mut MatchFlow,
    lines: &mut io::Lines<io::StdinLock<'_>>,
    text: &str,
) -> io::Result<()> {
    let prompt = match flow.submit(text) {
        Ok(prompt) => prompt,
        Err(e) => {
            println!("✖ {e}");
            return Ok(());
        }
    };

    match prompt {
        Prompt::None => {}
        Prompt::CheckoutDarts => {
            let Some(reply) =
                prompt_line(lines, "   darts at a finish (0-3, enter to skip, c cancels)? ")?
            else {
                flow.cancel();
                return Ok(());
            };
            match reply.trim() {
                "" => {
                    if let Err(e) = flow.decline_prompt() {
                        println!("✖ {e}");
                        return Ok(());
                    }
                }
                "c" => {
                    if let Some(raw) = flow.cancel() {
                        println!("   entry {raw:?} cancelled");
                    }
                    return Ok(());
                }
                n => match n.parse::<u8>().ok() {
                    Some(count) if count <= 3 => {
                        if let Err(e) = flow.provide_darts(count) {
                            println!("✖ {e}");
                            return Ok(());
                        }
                    }
                    _ => {
                        if let Some(raw) = flow.cancel() {
                            println!("   expected 0-3; entry {raw:?} cancelled");
                        }
                        return Ok(());
                    }
                },
            }
        }
        Prompt::FinalThrows => {
            let Some(reply) = prompt_line(lines, "   darts used in the final visit (1-3)? ")?
            else {
                flow.cancel();
                return Ok(());
            };
            match reply.trim().parse::<u8>().ok() {
                Some(count) if (1..=3).contains(&count) => {
                    if let Err(e) = flow.provide_darts(count) {
                        println!("✖ {e}");
                        return Ok(());
                    }
                }
                _ => {
                    if let Err(e) = flow.decline_prompt() {
                        println!("✖ {e}");
                        return Ok(());
                    }
                }
            }
        }
    }

    match flow.confirm() {
        Ok(TurnOutcome::Scored { remaining }) => {
            if flow.state().settings.display_score {
                println!("✔ {remaining} left");
            } else {
                println!("✔");
            }
        }
        Ok(TurnOutcome::LegWon { team_idx, leg }) => {
            if let Some(team) = flow.state().teams.get(team_idx) {
                println!("🏁 {} takes leg {}", team_label(team), leg + 1);
            }
        }
        Ok(TurnOutcome::MatchWon { winner_idx }) => {
            if let Some(team) = flow.state().teams.get(winner_idx) {
                println!("🏆 {} wins the match!", team_label(team));
            }
        }
        Err(e) => println!("✖ {e}"),
    }
    Ok(())
}

fn set_team(flow: &mut MatchFlow, arg: &str) {
    match arg.trim().parse::<usize>() {
        Ok(team_idx) => {
            if let Err(e) = flow.set_active_team(team_idx) {
                println!("✖ {e}");
            }
        }
        Err(_) => println!("usage: t <team index>"),
    }
}

fn set_player(flow: &mut MatchFlow, arg: &str) {
    let mut parts = arg.split_whitespace();
    let team_idx = parts.next().and_then(|s| s.parse::<usize>().ok());
    let player_idx = parts.next().and_then(|s| s.parse::<usize>().ok());
    match (team_idx, player_idx) {
        (Some(t), Some(p)) => {
            if let Err(e) = flow.set_active_player(t, p) {
                println!("✖ {e}");
            }
        }
        _ => println!("usage: p <team index> <player index>"),
    }
}

fn print_stats(m: &Match) {
    if m.teams.is_empty() {
        println!("no match yet");
        return;
    }
    for team in &m.teams {
        let co = stats::checkout_stats(m, team.id);
        let ms = stats::milestones(m, team.id);
        println!(
            "{}: {} legs | avg {:.2} | best leg avg {:.2} | checkout {}/{} ({:.0}%) best {} | 60+ {} 120+ {} 180 {}",
            team_label(team),
            team.wins,
            stats::game_average(m, team.id),
            stats::best_leg_average(m, team.id),
            co.hits,
            co.attempts,
            co.rate,
            stats::best_checkout(m, team.id)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ms.sixties,
            ms.one_twenties,
            ms.one_eighties,
        );
    }
    if let Some(top) = stats::greatest_scored_player(m) {
        println!("high score: {} by {}", top.score, top.player.name);
    }
}

fn run_wizard(
    flow: &mut MatchFlow,
    lines: &mut io::Lines<io::StdinLock<'_>>,
) -> io::Result<()> {
    println!("-- new match --");

    let team_count = ask_number(lines, "teams [2]? ", 2, 1, 8)?;

    let mut lineup: Vec<Team> = Vec::new();
    for i in 0..team_count {
        lineup = teams::add_team(&lineup);
        let team_id = match lineup.last() {
            Some(t) => t.id,
            None => continue,
        };
        let Some(reply) = prompt_line(lines, &format!("team {} players (comma separated)? ", i + 1))?
        else {
            return Ok(());
        };
        let mut slot = 0usize;
        for name in reply.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let player = match roster::find_player_by_name(flow.roster(), name) {
                Some(p) => p.clone(),
                None => match flow.add_roster_player(name) {
                    Ok(p) => p,
                    Err(e) => {
                        println!("✖ {e}");
                        continue;
                    }
                },
            };
            if slot > 0 {
                lineup = teams::add_player_slot(&lineup, team_id);
            }
            lineup = teams::set_player(&lineup, team_id, slot, player);
            slot += 1;
        }
    }

    if !teams::lineup_ready(&lineup) {
        println!("✖ every team needs at least one player");
        return Ok(());
    }

    let starting_score = ask_number(lines, "starting score [501]? ", 501, 2, 1001)?;
    let number_of_legs = ask_number(lines, "legs [1]? ", 1, 1, 99)?;
    let game_mode = match prompt_line(lines, "mode: (f)irst-to or (b)est-of [f]? ")? {
        Some(s) if s.trim().eq_ignore_ascii_case("b") => GameMode::BestOf,
        _ => GameMode::FirstTo,
    };
    let checkout_mode = match prompt_line(lines, "checkout: (s)imple, (d)ouble, (t)riple [d]? ")? {
        Some(s) if s.trim().eq_ignore_ascii_case("s") => CheckoutMode::Simple,
        Some(s) if s.trim().eq_ignore_ascii_case("t") => CheckoutMode::Triple,
        _ => CheckoutMode::Double,
    };
    let random_starting_team = ask_yes_no(lines, "random starting team [n]? ", false)?;
    let starting_team = if random_starting_team {
        0
    } else {
        ask_number(lines, "starting team index [0]? ", 0, 0, team_count - 1)?
    };
    let display_score = ask_yes_no(lines, "show remaining scores [y]? ", true)?;
    let ask_number_of_throws = ask_yes_no(lines, "ask darts used on a finish [n]? ", false)?;

    let settings = Settings {
        game_mode,
        checkout_mode,
        starting_score: starting_score as u16,
        number_of_legs: number_of_legs as u16,
        starting_team,
        random_starting_team,
        display_score,
        ask_number_of_throws,
    };

    match flow.new_match(settings, lineup) {
        Ok(()) => println!("✅ match on"),
        Err(e) => println!("✖ {e}"),
    }
    Ok(())
}

fn ask_number(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
    default: usize,
    min: usize,
    max: usize,
) -> io::Result<usize> {
    let Some(reply) = prompt_line(lines, prompt)? else {
        return Ok(default);
    };
    let value = reply.trim().parse::<usize>().unwrap_or(default);
    Ok(value.clamp(min, max))
}

fn ask_yes_no(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
    default: bool,
) -> io::Result<bool> {
    let Some(reply) = prompt_line(lines, prompt)? else {
        return Ok(default);
    };
    Ok(match reply.trim() {
        "y" | "Y" | "yes" => true,
        "n" | "N" | "no" => false,
        _ => default,
    })
}
