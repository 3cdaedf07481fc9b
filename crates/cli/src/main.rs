use anyhow::{anyhow, Context, Result};
use candidate_store::{Candidate, CandidateStore, SeniorityBand, Skill, SkillLevel};
use clap::{Parser, Subcommand};
use colored::Colorize;
use local_store::{FavoritesRegistry, FileStore, MessageDraft, MessageLog};
use rand::Rng;
use session::{CandidateSession, PageEntry, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;

/// TalentBoard - candidate screening from the terminal
#[derive(Parser)]
#[command(name = "talent-board")]
#[command(about = "Browse, filter and favorite candidates; keep a local message history", long_about = None)]
struct Cli {
    /// Path to the candidate JSON file
    #[arg(short, long, default_value = "data/candidates.json")]
    data: PathBuf,

    /// Directory for persisted state (favorites, sent messages)
    #[arg(short, long, default_value = ".talent-board")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates with filters and pagination
    List {
        /// Username substring to match (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Seniority bands to include (JR, SSR, SR); repeatable, combined with OR
        #[arg(long)]
        seniority: Vec<SeniorityBand>,

        /// Required languages; repeatable, a candidate must have all of them
        #[arg(long)]
        language: Vec<String>,

        /// Show only favorited candidates
        #[arg(long)]
        favorites_only: bool,

        /// Page to display
        #[arg(long, default_value = "1")]
        page: usize,

        /// Candidates per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Toggle a candidate in the favorites set
    Favorite {
        /// Username to toggle
        username: String,
    },

    /// Show the favorites set
    Favorites,

    /// Record a message sent to a candidate
    Message {
        /// Recipient username
        username: String,

        /// Role the message is about (Frontend, Backend, Fullstack, DBA)
        #[arg(long)]
        role: String,

        /// Reply-to email address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },

    /// Show the sent-message history, most recent first
    Messages,

    /// Generate a demo candidate file
    Seed {
        /// Number of candidates to generate
        #[arg(long, default_value = "60")]
        count: usize,

        /// Where to write the JSON file
        #[arg(long, default_value = "data/candidates.json")]
        output: PathBuf,
    },
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

    match cli.command {
        Commands::List {
            name,
            seniority,
            language,
            favorites_only,
            page,
            page_size,
        } => handle_list(
            &cli.data,
            &cli.state_dir,
            name,
            seniority,
            language,
            favorites_only,
            page,
            page_size,
        )?,
        Commands::Favorite { username } => handle_favorite(&cli.data, &cli.state_dir, &username)?,
        Commands::Favorites => handle_favorites(&cli.state_dir)?,
        Commands::Message {
            username,
            role,
            email,
            message,
        } => handle_message(&cli.data, &cli.state_dir, &username, role, email, message)?,
        Commands::Messages => handle_messages(&cli.state_dir)?,
        Commands::Seed { count, output } => handle_seed(count, &output)?,
    }

    Ok(())
}

fn load_store(data: &PathBuf) -> Result<CandidateStore> {
    CandidateStore::load_from_file(data)
        .with_context(|| format!("Failed to load candidates from {}", data.display()))
}

fn open_state(state_dir: &PathBuf) -> Result<FileStore> {
    FileStore::open(state_dir)
        .with_context(|| format!("Failed to open state directory {}", state_dir.display()))
}

/// Handle the 'list' command
#[allow(clippy::too_many_arguments)]
fn handle_list(
    data: &PathBuf,
    state_dir: &PathBuf,
    name: Option<String>,
    seniority: Vec<SeniorityBand>,
    language: Vec<String>,
    favorites_only: bool,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let store = load_store(data)?;
    let mut session = CandidateSession::with_page_size(store, open_state(state_dir)?, page_size);

    if let Some(query) = name {
        session.set_name_query(query);
    }
    for band in seniority {
        session.toggle_seniority_band(band);
    }
    for lang in &language {
        session.toggle_language(lang);
    }
    if favorites_only {
        session.set_favorites_only(true);
    }
    session.handle_page_change(page);

    let filtered = session.filtered_candidates().len();
    let total = session.all_candidates().len();
    if session.has_active_filters() {
        println!(
            "{} of {} candidates match the active filters",
            filtered.to_string().bold(),
            total
        );
    } else {
        println!("{} candidates", total.to_string().bold());
    }

    if session.current_page_items().is_empty() {
        println!("{}", "No candidates on this page".dimmed());
        return Ok(());
    }

    println!(
        "{:<3} {:<20} {:<12} {:<6} {}",
        "", "USERNAME", "JOINED", "BAND", "SKILLS"
    );
    let items: Vec<Candidate> = session.current_page_items().to_vec();
    for candidate in &items {
        let star = if session.is_favorite(&candidate.username) {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        let band = candidate
            .seniority_band()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        let skills: Vec<&str> = candidate
            .skills
            .iter()
            .map(|skill| skill.language.as_str())
            .collect();

        println!(
            "{:<3} {:<20} {:<12} {:<6} {}",
            star,
            candidate.username,
            candidate.joined_at,
            band,
            skills.join(", ").dimmed()
        );
    }

    println!(
        "\nPage {} of {}:  {}",
        session.current_page(),
        session.total_pages(),
        render_page_numbers(&session.page_numbers(), session.current_page())
    );

    Ok(())
}

/// Render the page-number sequence, highlighting the current page.
fn render_page_numbers(entries: &[PageEntry], current: usize) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            PageEntry::Page(n) if *n == current => format!("[{}]", n).bold().to_string(),
            PageEntry::Page(n) => n.to_string(),
            PageEntry::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle the 'favorite' command
fn handle_favorite(data: &PathBuf, state_dir: &PathBuf, username: &str) -> Result<()> {
    let store = load_store(data)?;
    if store.get(username).is_none() {
        return Err(anyhow!("Candidate '{}' not found", username));
    }

    let mut registry = FavoritesRegistry::new(open_state(state_dir)?);
    if registry.toggle(username) {
        println!("{} Added {} to favorites", "✓".green(), username.bold());
    } else {
        println!("Removed {} from favorites", username.bold());
    }

    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(state_dir: &PathBuf) -> Result<()> {
    let mut registry = FavoritesRegistry::new(open_state(state_dir)?);

    let mut usernames: Vec<&String> = registry.favorites().iter().collect();
    if usernames.is_empty() {
        println!("{}", "No favorites yet".dimmed());
        return Ok(());
    }

    usernames.sort();
    for username in usernames {
        println!("{} {}", "★".yellow(), username);
    }

    Ok(())
}

/// Handle the 'message' command
fn handle_message(
    data: &PathBuf,
    state_dir: &PathBuf,
    username: &str,
    role: String,
    email: String,
    message: String,
) -> Result<()> {
    let store = load_store(data)?;
    if store.get(username).is_none() {
        return Err(anyhow!("Candidate '{}' not found", username));
    }

    let draft = MessageDraft {
        role,
        email,
        message,
    };
    draft.validate()?;

    let mut log = MessageLog::new(open_state(state_dir)?);
    log.append(draft.into_sent(username));

    println!(
        "{} Message to {} recorded in local history",
        "✓".green(),
        username.bold()
    );

    Ok(())
}

/// Handle the 'messages' command
fn handle_messages(state_dir: &PathBuf) -> Result<()> {
    let log = MessageLog::new(open_state(state_dir)?);
    let messages = log.load();

    if messages.is_empty() {
        println!("{}", "No messages sent yet".dimmed());
        return Ok(());
    }

    for message in &messages {
        println!(
            "{}  {} ({}) via {}: {}",
            message.submitted_at.dimmed(),
            message.username.bold(),
            message.role,
            message.email,
            message.message
        );
    }

    Ok(())
}

const SEED_LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "React",
    "Node.js",
    "HTML",
    "CSS",
    "Go",
    "SQL",
];

/// Handle the 'seed' command
fn handle_seed(count: usize, output: &PathBuf) -> Result<()> {
    let mut rng = rand::rng();

    let candidates: Vec<Candidate> = (0..count)
        .map(|i| {
            let skill_count = rng.random_range(1..=5);
            let mut languages: Vec<&str> = SEED_LANGUAGES.to_vec();
            let skills: Vec<Skill> = (0..skill_count)
                .map(|_| {
                    let language = languages.remove(rng.random_range(0..languages.len()));
                    Skill {
                        language: language.to_string(),
                        level: match rng.random_range(0..3) {
                            0 => SkillLevel::Basic,
                            1 => SkillLevel::Intermediate,
                            _ => SkillLevel::Advanced,
                        },
                    }
                })
                .collect();

            Candidate {
                username: format!("candidate_{:03}", i),
                joined_at: format!(
                    "{:04}-{:02}-{:02}",
                    rng.random_range(2020..=2025),
                    rng.random_range(1..=12),
                    rng.random_range(1..=28)
                ),
                skills,
                score: rng.random_range(600..1600),
            }
        })
        .collect();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&candidates)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Wrote {} candidates to {}",
        "✓".green(),
        count,
        output.display()
    );

    Ok(())
}
