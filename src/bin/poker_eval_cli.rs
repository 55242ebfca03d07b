// src/bin/poker_eval_cli.rs

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use poker_hand_strength::domain::{Deck, Hand};
use poker_hand_strength::eval::{compare, try_classify, Classification, EvalConfig, Verdict};

/// Dev-CLI: классификация и сравнение 5-карточных рук.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Печатать результат в JSON.
    #[arg(long, global = true)]
    json: bool,

    /// JSON-конфиг оценщика (по умолчанию: 5 карт, без дублей).
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Classify one hand, e.g. \"Ah Ad Kc Ks 9h\"", alias = "cls")]
    Classify { hand: String },

    #[command(about = "Compare two hands", alias = "cmp")]
    Compare { first: String, second: String },

    #[command(about = "Deal two random hands and compare them")]
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct Showdown<'a> {
    first: &'a Hand,
    first_class: &'a Classification,
    second: &'a Hand,
    second_class: &'a Classification,
    verdict: Verdict,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(json) => EvalConfig::from_json_str(json)?,
        None => EvalConfig::default(),
    };

    match cli.command {
        Command::Classify { hand } => {
            let hand = parse_hand(&hand)?;
            let class = try_classify(&hand, &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&class)?);
            } else {
                println!("{hand}: {class}");
            }
        }
        Command::Compare { first, second } => {
            let first = parse_hand(&first)?;
            let second = parse_hand(&second)?;
            showdown(&first, &second, &config, cli.json)?;
        }
        Command::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut deck = Deck::standard_52();
            deck.shuffle_with(&mut rng);
            let first = deck.deal_hand();
            let second = deck.deal_hand();
            showdown(&first, &second, &config, cli.json)?;
        }
    }

    Ok(())
}

fn parse_hand(s: &str) -> anyhow::Result<Hand> {
    s.parse::<Hand>()
        .with_context(|| format!("не удалось разобрать руку `{s}`"))
}

fn showdown(first: &Hand, second: &Hand, config: &EvalConfig, json: bool) -> anyhow::Result<()> {
    let first_class = try_classify(first, config).context("первая рука")?;
    let second_class = try_classify(second, config).context("вторая рука")?;
    let verdict = compare(&first_class, &second_class);

    if json {
        let out = Showdown {
            first,
            first_class: &first_class,
            second,
            second_class: &second_class,
            verdict,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("1: {first} -> {first_class}");
    println!("2: {second} -> {second_class}");
    let line = match verdict {
        Verdict::FirstWins => "Побеждает первая рука",
        Verdict::SecondWins => "Побеждает вторая рука",
        Verdict::Equal => "Ничья (split)",
    };
    println!("{line}");
    Ok(())
}
