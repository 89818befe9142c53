mod render;

use anyhow::{Context, Result, anyhow, bail};
use api_client::{HttpQuestionSource, InMemorySource, QuestionSource};
use browser::{BrowserConfig, BrowsingSession, LoadOutcome};
use catalog::{Difficulty, Language};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use topics::{TopicClassifier, TopicDictionary};
use tracing::info;

/// DevHub - interview question browser
#[derive(Parser)]
#[command(name = "devhub")]
#[command(about = "Browse interview questions grouped by topic and difficulty", long_about = None)]
struct Cli {
    /// Topic dictionary (JSON) to use for the selected language
    #[arg(long, global = true)]
    topics: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a category and print it grouped by topic
    Browse {
        /// Category slug (go, java, python, ...)
        #[arg(long, default_value = "go")]
        category: String,

        /// Only show questions carrying this tag (repeatable; any tag matches)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Case-insensitive text to look for in title, question, answer and tags
        #[arg(long)]
        search: Option<String>,

        /// Number of batches to load
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Load every batch
        #[arg(long, conflicts_with = "pages")]
        all: bool,

        /// Retry failed requests until the retry limit is reached
        #[arg(long)]
        retry: bool,

        /// API base URL (overrides DEVHUB_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Serve questions from a JSON fixture instead of the API
        #[arg(long, conflicts_with = "api_url")]
        fixtures: Option<PathBuf>,
    },

    /// Show which topic each tag belongs to
    Classify {
        /// Language whose dictionary to use
        #[arg(long, default_value = "go")]
        language: String,

        /// Tags to classify
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// List the topics known for a language
    Topics {
        #[arg(long, default_value = "go")]
        language: String,

        /// Also print every alias
        #[arg(long)]
        aliases: bool,
    },
}

/// Options for the browse command once parsed
struct BrowseArgs {
    category: String,
    tags: Vec<String>,
    search: Option<String>,
    pages: usize,
    all: bool,
    retry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            category,
            tags,
            search,
            pages,
            all,
            retry,
            api_url,
            fixtures,
        } => {
            let mut config = BrowserConfig::from_env().context("Invalid DEVHUB_* configuration")?;
            if let Some(url) = api_url {
                config.api_url = url;
            }
            let language = parse_language(&category)?;
            let classifier = Arc::new(build_classifier(language, cli.topics.as_ref())?);
            let args = BrowseArgs {
                category,
                tags,
                search,
                pages,
                all,
                retry,
            };

            match fixtures {
                Some(path) => {
                    let questions = catalog::fixtures::load_questions(&path)
                        .with_context(|| format!("Failed to load fixtures from {}", path.display()))?;
                    println!("{} Loaded {} questions from {}", "✓".green(), questions.len(), path.display());
                    let session = BrowsingSession::new(InMemorySource::new(questions), classifier, &config);
                    handle_browse(session, args).await?
                }
                None => {
                    let source = HttpQuestionSource::new(config.api_url.clone())
                        .context("Failed to create API client")?;
                    let session = BrowsingSession::new(source, classifier, &config);
                    handle_browse(session, args).await?
                }
            }
        }
        Commands::Classify { language, tags } => {
            let language = parse_language(&language)?;
            let classifier = build_classifier(language, cli.topics.as_ref())?;
            handle_classify(&classifier, language, &tags);
        }
        Commands::Topics { language, aliases } => {
            let language = parse_language(&language)?;
            let classifier = build_classifier(language, cli.topics.as_ref())?;
            handle_topics(&classifier, language, aliases);
        }
    }

    Ok(())
}

fn parse_language(slug: &str) -> Result<Language> {
    Language::from_slug(slug).ok_or_else(|| anyhow!("Unknown language or category: {}", slug))
}

/// Builtin dictionaries, plus an optional JSON dictionary for `language`
fn build_classifier(language: Language, topics: Option<&PathBuf>) -> Result<TopicClassifier> {
    let classifier = TopicClassifier::builtin();
    let Some(path) = topics else {
        return Ok(classifier);
    };
    let dictionary = TopicDictionary::from_json_file(path)
        .with_context(|| format!("Failed to load topic dictionary {}", path.display()))?;
    println!(
        "{} Loaded {} tags for {} from {}",
        "✓".green(),
        dictionary.len(),
        language,
        path.display()
    );
    Ok(classifier.with_dictionary(language, dictionary))
}

/// Handle the 'browse' command
async fn handle_browse<S: QuestionSource>(mut session: BrowsingSession<S>, args: BrowseArgs) -> Result<()> {
    let start = Instant::now();
    info!(
        "Browsing {} ({} tag filters, search {:?})",
        args.category,
        args.tags.len(),
        args.search
    );
    println!("{}", render::loading_indicator(&args.category));
    session.open(&args.category).await;

    if args.all {
        session.load_all().await;
    } else {
        for _ in 1..args.pages {
            if !matches!(session.load_more().await, LoadOutcome::Loaded { .. }) {
                break;
            }
        }
    }

    if args.retry {
        while session.retry().await != LoadOutcome::RetryUnavailable {
            if args.all {
                session.load_all().await;
            }
        }
    }

    for tag in &args.tags {
        session.toggle_tag(tag);
    }
    if let Some(query) = args.search {
        session.set_search(query);
        session.flush_search();
    }

    let view = session.view().await?;
    print!("{}", render::render_view(&view));
    println!("{}", format!("Done in {:.2?}", start.elapsed()).dimmed());

    if view.loaded == 0 && matches!(view.status, browser::ListStatus::Error { .. }) {
        bail!("No questions could be loaded for {}", args.category);
    }
    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(classifier: &TopicClassifier, language: Language, tags: &[String]) {
    println!("{}", format!("Topics for {} tags:", language).bold().blue());
    for tag in tags {
        let topic = classifier.topic_for_tag(tag, language);
        let name = if topic.is_fallback() {
            topic.name.yellow()
        } else {
            topic.name.green()
        };
        println!(
            "  {:<24} → {} [{}] {} #{}",
            tag,
            name,
            topic.category,
            render::difficulty_label(topic.difficulty),
            topic.order
        );
    }
}

/// Handle the 'topics' command
fn handle_topics(classifier: &TopicClassifier, language: Language, aliases: bool) {
    let Some(dictionary) = classifier.dictionary(language) else {
        println!(
            "No topic dictionary for {}; every tag falls back to {}",
            language,
            classifier.fallback().name
        );
        return;
    };

    println!(
        "{}",
        format!("{} topics ({} tags):", language, dictionary.len()).bold().blue()
    );
    for difficulty in Difficulty::ALL {
        let tier: Vec<_> = dictionary
            .topics()
            .into_iter()
            .filter(|t| t.difficulty == difficulty)
            .collect();
        if tier.is_empty() {
            continue;
        }
        println!("{}", render::difficulty_label(difficulty));
        for topic in tier {
            println!("  {:>2}. {} [{}]", topic.order, topic.name.bold(), topic.category);
            if aliases {
                println!("      {}", dictionary.tags_for(&topic.name).join(", ").dimmed());
            }
        }
    }
}
