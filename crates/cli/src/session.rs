//! Interactive query loop.
//!
//! Every prompt helper returns `Option`: `None` means stdin closed and
//! the session winds down. The dataset, the active boundaries, and the
//! view carved from them are passed explicitly; nothing is global.

use std::io::{self, Write};
use std::str::FromStr;

use opening_core::resolve::{self, Lookup};
use opening_core::{stats, Bounds, Dataset, FilteredView, MoveSequence, QueryError, Side};

use crate::render;

enum Action {
    Histogram,
    BestWhite,
    BestBlack,
    ZFactors,
    Fetch,
    Random,
}

enum NextStep {
    SameBounds,
    NewBounds,
    Quit,
}

/// Drive the prompt loop until the user quits or input closes.
///
/// Boundaries passed on the command line pre-seed the first round, so
/// a flagged launch goes straight to the menu; every later round
/// enters boundaries fresh.
pub fn run(dataset: &Dataset, initial: Bounds, top_n: usize) {
    let mut bounds = initial;
    let mut entered = bounds != Bounds::default();

    loop {
        if !entered {
            let Some(fresh) = prompt_bounds() else { return };
            bounds = fresh;
        }
        entered = false;

        let view = bounds.apply(dataset);
        render::view_banner(&bounds, view.len());

        loop {
            let Some(action) = prompt_action() else { return };
            if perform(action, &view, top_n).is_none() {
                return;
            }
            match prompt_next() {
                Some(NextStep::SameBounds) => {}
                Some(NextStep::NewBounds) => break,
                Some(NextStep::Quit) | None => return,
            }
        }
    }
}

fn perform(action: Action, view: &FilteredView, top_n: usize) -> Option<()> {
    match action {
        Action::Histogram => {
            let rates = stats::win_rates(view);
            if rates.is_empty() {
                println!("No opening in the current boundaries has any recorded games.");
            } else {
                render::histogram(&rates, &stats::summarize(view));
            }
        }
        Action::BestWhite => render::ranking_table(view, Side::White, top_n),
        Action::BestBlack => render::ranking_table(view, Side::Black, top_n),
        Action::ZFactors => match stats::best_by_side(view) {
            Ok(best) => render::z_report(&best),
            Err(e) => println!("{e}"),
        },
        Action::Fetch => return fetch_flow(view),
        Action::Random => match resolve::random_within(view, &mut rand::thread_rng()) {
            Ok(record) => render::random_pick(record),
            Err(e) => println!("{e}"),
        },
    }
    Some(())
}

/// Resolve one opening and print its card.
///
/// Every resolution failure is a prompt-level outcome: missing input
/// re-prompts, an ambiguous pair asks which identifier to use, several
/// matches offer a numbered pick, and an unknown name gets substring
/// suggestions before dropping back to the menu.
fn fetch_flow(view: &FilteredView) -> Option<()> {
    loop {
        let name = ask("Opening name (blank to search by moves or FEN): ")?;
        let id = ask("Opening moves or FEN (blank when searching by name): ")?;

        let lookup = match Lookup::from_parts(Some(name.as_str()), Some(id.as_str())) {
            Ok(lookup) => lookup,
            Err(QueryError::AmbiguousIdentifierKind) => {
                match ask("Both fields are filled; search by [n]ame or [m]oves? ")?
                    .to_lowercase()
                    .as_str()
                {
                    "n" => Lookup::Name(name),
                    "m" => Lookup::PgnOrFen(id),
                    _ => continue,
                }
            }
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match resolve::resolve(view, &lookup) {
            Ok(record) => {
                render::stats_card(record);
                return Some(());
            }
            Err(QueryError::MultipleMatches { candidates, .. }) => {
                println!("{} openings match; pick one:", candidates.len());
                for (i, candidate) in candidates.iter().enumerate() {
                    println!("{:>3}. {}  ({})", i + 1, candidate.name(), candidate.moves());
                }
                loop {
                    let reply = ask("Number (blank to search again): ")?;
                    if reply.is_empty() {
                        break;
                    }
                    match reply.parse::<usize>() {
                        Ok(n) if (1..=candidates.len()).contains(&n) => {
                            render::stats_card(&candidates[n - 1]);
                            return Some(());
                        }
                        _ => println!("Pick a number between 1 and {}.", candidates.len()),
                    }
                }
            }
            Err(QueryError::OpeningNotFound { query }) => {
                println!("No opening matches {query:?} within the current boundaries.");
                if matches!(lookup, Lookup::Name(_)) {
                    let hits = resolve::suggest_names(view, &query);
                    if !hits.is_empty() {
                        println!("Close names:");
                        for hit in hits.iter().take(10) {
                            println!("  - {}", hit.name());
                        }
                    }
                }
                return Some(());
            }
            Err(e) => {
                println!("{e}");
                return Some(());
            }
        }
    }
}

fn prompt_bounds() -> Option<Bounds> {
    println!();
    println!("Set the boundaries. A blank answer leaves that boundary open.");
    let min_games = prompt_number("Minimum games played: ", 0)?;
    let max_moves = prompt_number("Maximum opening length in moves: ", usize::MAX)?;
    let root_prefix = prompt_root()?;
    Some(Bounds {
        min_games,
        max_moves,
        root_prefix,
        ..Bounds::default()
    })
}

fn prompt_action() -> Option<Action> {
    println!();
    println!("1. Histogram of weighted win rates");
    println!("2. Best openings for White");
    println!("3. Best openings for Black");
    println!("4. How far each side's best opening sits from the mean");
    println!("5. Statistics for one opening");
    println!("6. Random opening from the current boundaries");
    loop {
        match ask("Choose an action (1-6): ")?.as_str() {
            "1" => return Some(Action::Histogram),
            "2" => return Some(Action::BestWhite),
            "3" => return Some(Action::BestBlack),
            "4" => return Some(Action::ZFactors),
            "5" => return Some(Action::Fetch),
            "6" => return Some(Action::Random),
            other => println!("No such action: {other:?}"),
        }
    }
}

fn prompt_next() -> Option<NextStep> {
    println!();
    println!("1. Another query with the same boundaries");
    println!("2. New boundaries");
    println!("3. Quit");
    loop {
        match ask("Choose (1-3): ")?.as_str() {
            "1" => return Some(NextStep::SameBounds),
            "2" => return Some(NextStep::NewBounds),
            "3" => return Some(NextStep::Quit),
            other => println!("No such choice: {other:?}"),
        }
    }
}

/// Keep asking until the reply parses; blank keeps `default`.
fn prompt_number<T: FromStr>(prompt: &str, default: T) -> Option<T> {
    loop {
        let reply = ask(prompt)?;
        if reply.is_empty() {
            return Some(default);
        }
        match reply.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Not a whole number: {reply:?}"),
        }
    }
}

fn prompt_root() -> Option<MoveSequence> {
    loop {
        let reply = ask("Root moves, e.g. 1 e4 c5 (blank for any): ")?;
        if reply.is_empty() {
            return Some(MoveSequence::default());
        }
        match reply.parse::<MoveSequence>() {
            Ok(seq) => return Some(seq),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt and read one trimmed line; `None` once stdin closes.
fn ask(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
