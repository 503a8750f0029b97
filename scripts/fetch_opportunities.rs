use anyhow::{bail, Context as _};
use contribution_opportunities::{
    client::{OpportunitiesClient, OpportunityFeed},
    config::Config,
    opportunity::OpportunityType,
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: fetch-opportunities <skill|translation|voiceover> [language_code]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(fmt_layer)
        .init();

    let mut args = std::env::args().skip(1);
    let kind = args
        .next()
        .and_then(|s| OpportunityType::from_slug(&s))
        .context(USAGE)?;
    let language_code = args.next();

    let mut feed = match (kind, language_code) {
        (OpportunityType::Skill, _) => OpportunityFeed::skill(),
        (OpportunityType::Translation, Some(lang)) => OpportunityFeed::translation(lang),
        (OpportunityType::Voiceover, Some(lang)) => OpportunityFeed::voiceover(lang),
        (_, None) => bail!("{kind} opportunities require a language code\n{USAGE}"),
    };

    let config = Config::load().context("failed to load configuration")?;
    let client = OpportunitiesClient::new(&config.backend)?;

    let mut total = 0;
    while let Some(page) = feed.next_page(&client).await? {
        for opportunity in &page.opportunities {
            println!("{}", serde_json::to_string(opportunity)?);
        }
        total += page.opportunities.len();
    }

    tracing::info!(%kind, total, "fetched all opportunities");

    Ok(())
}
