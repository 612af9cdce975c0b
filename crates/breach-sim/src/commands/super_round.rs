use std::error::Error;

use breach_access::scenario::SUPER_ROUND_CLICKS;
use breach_access::{evaluate, DeckSpec, Scenario};
use clap::Args;
use tracing::info;

use super::render::{print_json, render_report};

#[derive(Args, Debug)]
pub struct SuperRoundArgs {
    /// Number of cards Khusyuk will see.
    #[arg(short, long = "khusyuk", default_value_t = 4)]
    pub khusyuk: u32,
    /// Agendas in R&D (defaults to 4 when no density is given).
    #[arg(short, long, conflicts_with = "density")]
    pub agendas: Option<u32>,
    /// Agenda density of the corp deck (the X in "1 in X").
    #[arg(short, long)]
    pub density: Option<u32>,
    /// Number of cards remaining in R&D.
    #[arg(short, long = "remaining-cards", default_value_t = 24)]
    pub remaining_cards: u32,
    /// Clicks available for the whole round.
    #[arg(long, default_value_t = SUPER_ROUND_CLICKS)]
    pub clicks: u32,
    /// Emit the report as canonical JSON.
    #[arg(long)]
    pub json: bool,
}

const DEFAULT_AGENDAS: u32 = 4;

pub fn run(args: &SuperRoundArgs) -> Result<(), Box<dyn Error>> {
    let deck = match (args.agendas, args.density) {
        (_, Some(density)) => DeckSpec::with_density(args.remaining_cards, density),
        (agendas, None) => {
            DeckSpec::with_agendas(args.remaining_cards, agendas.unwrap_or(DEFAULT_AGENDAS))
        }
    };
    let scenario = Scenario::super_round(deck, args.khusyuk)
        .with_clicks(args.clicks);
    let report = evaluate(&scenario)?;
    info!(
        deck = %report.deck,
        khusyuk = args.khusyuk,
        clicks = report.clicks,
        "evaluated super round"
    );
    if args.json {
        return print_json(&report);
    }

    println!("Calculating success probabilities for:");
    println!(
        "A Khusyuk for {} cards, and then having {} clicks left and 2 Deep Dives in hand.",
        args.khusyuk,
        report.clicks.saturating_sub(1)
    );
    let density = report
        .deck
        .density()
        .map(|density| {
            format!(
                " (i.e. approximately 1 in {} agenda density)",
                density.floor()
            )
        })
        .unwrap_or_default();
    println!(
        "Assuming {} agendas out of {} cards left in R&D{}.",
        report.deck.agendas_left(),
        report.deck.cards_left(),
        density
    );
    println!("(for now we ignore the possibility of hitting an agenda in the HQ run)");
    println!("{}", render_report(&report)?);
    Ok(())
}
