use anyhow::{Context, Result};
use catalog::{Item, ItemRepository, Role};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{
    ButtonAction, DeckStatus, Decision, DragOffset, EngineConfig, GestureInterpreter, GestureOutcome,
    MatchAction, MatchOutcome, SeededRandom, SwipeSession,
};
use pipeline::FilterCriteria;
use std::path::PathBuf;
use std::sync::Arc;

/// JobMatchr - swipe to match on jobs and candidates
#[derive(Parser)]
#[command(name = "jobmatchr")]
#[command(about = "Swipe-deck matching and filtering engine", long_about = None)]
struct Cli {
    /// Engine configuration (JSON); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog fixture (JSON) to use instead of the built-in sample
    #[arg(short, long, global = true)]
    items: Option<PathBuf>,

    /// Seed for match draws; a random seed is picked and printed otherwise
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filtered deck for a role
    Deck {
        /// jobSeeker or recruiter
        #[arg(long)]
        role: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Play a sequence of decisions against the top of the deck
    Swipe {
        /// jobSeeker or recruiter
        #[arg(long)]
        role: String,

        /// Decisions in order: left/right/up or reject/accept/super
        #[arg(required = true)]
        decisions: Vec<SwipeArg>,
    },

    /// Interpret a single drag release
    Drag {
        /// Horizontal offset, positive is right
        #[arg(long, allow_negative_numbers = true)]
        x: f32,

        /// Vertical offset, positive is down
        #[arg(long, allow_negative_numbers = true)]
        y: f32,

        /// Release velocity
        #[arg(long, allow_negative_numbers = true)]
        velocity: Option<f32>,
    },

    /// Accept every card for a number of rounds and list the matches
    Matches {
        /// jobSeeker or recruiter
        #[arg(long)]
        role: String,

        /// Number of times the deck is refreshed and swiped through
        #[arg(long, default_value = "1")]
        rounds: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Free-text search over titles, descriptions and tags
    #[arg(long)]
    search: Option<String>,

    /// Location substring
    #[arg(long)]
    location: Option<String>,

    /// Only remote jobs
    #[arg(long)]
    remote: bool,

    /// Job type tag (repeatable, ORed)
    #[arg(long = "job-type")]
    job_types: Vec<String>,

    /// Skill tag (repeatable, ORed)
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// entry, mid or senior
    #[arg(long)]
    experience: Option<String>,

    /// <50k, 50-100k, 100-150k or >150k
    #[arg(long)]
    salary: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().remote_only(self.remote);
        if let Some(search) = self.search {
            criteria = criteria.with_search(search);
        }
        if let Some(location) = self.location {
            criteria = criteria.with_location(location);
        }
        for job_type in self.job_types {
            criteria = criteria.with_job_type(job_type);
        }
        for skill in self.skills {
            criteria = criteria.with_skill(skill);
        }
        if let Some(level) = self.experience {
            criteria = criteria.with_experience_level(level);
        }
        if let Some(range) = self.salary {
            criteria = criteria.with_salary_range(range);
        }
        criteria
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SwipeArg {
    #[value(alias = "left")]
    Reject,
    #[value(alias = "right")]
    Accept,
    #[value(name = "super", aliases = ["up", "super-like"])]
    SuperLike,
}

impl From<SwipeArg> for ButtonAction {
    fn from(arg: SwipeArg) -> Self {
        match arg {
            SwipeArg::Reject => ButtonAction::Reject,
            SwipeArg::Accept => ButtonAction::Accept,
            SwipeArg::SuperLike => ButtonAction::SuperLike,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!("Engine config: {:?}", config);
    let repository = Arc::new(match &cli.items {
        Some(path) => ItemRepository::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => ItemRepository::sample(),
    });

    match cli.command {
        Commands::Deck { role, filters } => {
            handle_deck(repository, config, parse_role(&role)?, filters.into_criteria())
        }
        Commands::Swipe { role, decisions } => {
            let seed = pick_seed(cli.seed);
            handle_swipe(repository, config, parse_role(&role)?, &decisions, seed)
        }
        Commands::Drag { x, y, velocity } => {
            handle_drag(config, x, y, velocity);
            Ok(())
        }
        Commands::Matches { role, rounds } => {
            let seed = pick_seed(cli.seed);
            handle_matches(repository, config, parse_role(&role)?, rounds, seed)
        }
    }
}

fn parse_role(role: &str) -> Result<Role> {
    role.parse::<Role>().context("Invalid --role")
}

fn pick_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        println!("{} {}", "Seed:".dimmed(), seed);
        seed
    })
}

fn seeded_session(
    repository: Arc<ItemRepository>,
    config: EngineConfig,
    role: Role,
    seed: u64,
) -> Result<SwipeSession> {
    let session = SwipeSession::new(repository, config, role).context("Invalid engine configuration")?;
    Ok(session.with_random_source(Box::new(SeededRandom::new(seed))))
}

/// Handle the 'deck' command
fn handle_deck(
    repository: Arc<ItemRepository>,
    config: EngineConfig,
    role: Role,
    criteria: FilterCriteria,
) -> Result<()> {
    let mut session =
        SwipeSession::new(repository, config, role).context("Invalid engine configuration")?;
    let snapshot = session.apply_filters(criteria);

    println!(
        "{}",
        format!("{} deck ({} {}):", role, snapshot.items.len(), role.item_noun())
            .bold()
            .blue()
    );
    if snapshot.items.is_empty() {
        println!("{}", "No more items. Clear filters or refresh.".yellow());
    }
    for (rank, item) in snapshot.items.iter().enumerate() {
        print_item(rank + 1, item);
    }
    Ok(())
}

/// Handle the 'swipe' command
fn handle_swipe(
    repository: Arc<ItemRepository>,
    config: EngineConfig,
    role: Role,
    decisions: &[SwipeArg],
    seed: u64,
) -> Result<()> {
    let mut session = seeded_session(repository, config, role, seed)?;

    for &decision in decisions {
        let Some(top) = session.top_item().cloned() else {
            break;
        };
        let GestureOutcome::Exiting(plan) = session.press(decision.into()) else {
            continue;
        };
        let (_, outcome) = session.finish_exit();

        println!(
            "{} {} ({:?}, exit to {:.0},{:.0})",
            decision_arrow(plan.decision),
            top,
            plan.decision,
            plan.motion.x,
            plan.motion.y
        );
        match outcome {
            Some(MatchOutcome::Matched(item)) => {
                println!("  {} {}", "It's a match!".green().bold(), item.headline());
                session.dismiss_match(MatchAction::KeepSwiping);
            }
            Some(MatchOutcome::NoMatch) => println!("  {}", "no match".dimmed()),
            None => {}
        }
    }

    if session.status() == DeckStatus::Exhausted {
        println!("{}", "No more items. Clear filters or refresh.".yellow());
    } else {
        println!("{} {} left", "•".green(), session.current_deck().len());
    }
    Ok(())
}

/// Handle the 'drag' command
fn handle_drag(config: EngineConfig, x: f32, y: f32, velocity: Option<f32>) {
    let interpreter = GestureInterpreter::new(config.gesture);
    let decision = interpreter.interpret(DragOffset::new(x, y), velocity);

    println!("{} {:?}", "Decision:".bold(), decision);
    match decision.exit_motion(interpreter.config()) {
        Some(motion) => println!(
            "{} to ({:.0}, {:.0}), opacity {}, {} ms",
            "Exit:".bold(),
            motion.x,
            motion.y,
            motion.opacity,
            motion.duration_ms
        ),
        None => println!("{} back to origin", "Snap:".bold()),
    }
}

/// Handle the 'matches' command
fn handle_matches(
    repository: Arc<ItemRepository>,
    config: EngineConfig,
    role: Role,
    rounds: usize,
    seed: u64,
) -> Result<()> {
    let mut session = seeded_session(repository, config, role, seed)?;

    for round in 0..rounds {
        if round > 0 {
            session.refresh();
        }
        while let GestureOutcome::Exiting(_) = session.press(ButtonAction::Accept) {
            session.finish_exit();
            session.dismiss_match(MatchAction::KeepSwiping);
        }
    }

    println!(
        "{}",
        format!("Matches after {} round(s):", rounds).bold().blue()
    );
    if session.matches().is_empty() {
        println!("{}", "No matches yet.".yellow());
    }
    for record in session.matches() {
        println!(
            "{}. {} ({:?})",
            record.sequence.to_string().green(),
            record.item,
            record.decision
        );
    }
    Ok(())
}

/// Arrow for the direction a card leaves in
fn decision_arrow(decision: Decision) -> String {
    match decision {
        Decision::Reject => "←".red().to_string(),
        Decision::Accept => "→".green().to_string(),
        Decision::SuperLike => "↑".blue().to_string(),
        Decision::Cancel => "↺".dimmed().to_string(),
    }
}

/// Helper function to print one deck card
fn print_item(rank: usize, item: &Item) {
    println!(
        "{}. {} - {} [{}]",
        rank.to_string().green(),
        item.headline().bold(),
        item.subtitle(),
        item.location()
    );
    println!("   {}", item.tags().join(", ").cyan());
    match item {
        Item::Job(job) => {
            if let Some(salary) = &job.salary {
                println!("   Salary: {}", salary);
            }
        }
        Item::Candidate(candidate) => {
            if let Some(experience) = &candidate.experience {
                println!("   Experience: {}", experience);
            }
        }
    }
}
