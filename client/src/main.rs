//! Crop Advisor - terminal front-end
//!
//! One-shot commands over the prediction session: fetch seasonal
//! weather, request crop recommendations, or both concurrently.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_advisor_client::render::{render_recommendations, render_weather};
use crop_advisor_client::{Config, PredictionClient, PredictionSession};

#[derive(Parser)]
#[command(
    name = "crop-advisor",
    about = "Seasonal weather and crop recommendations for a district",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch seasonal weather data for a district
    Weather {
        #[command(flatten)]
        district: DistrictArgs,
    },
    /// Request seasonal crop recommendations
    Predict {
        #[command(flatten)]
        district: DistrictArgs,
        #[command(flatten)]
        soil: SoilArgs,
    },
    /// Fetch weather and recommendations together
    Report {
        #[command(flatten)]
        district: DistrictArgs,
        #[command(flatten)]
        soil: SoilArgs,
    },
}

#[derive(Args)]
struct DistrictArgs {
    /// District to look up (defaults to the session's initial district)
    #[arg(long)]
    district: Option<String>,
}

/// Soil measurements, taken as raw text exactly as a form field would.
/// Unparseable text is forwarded as NaN rather than rejected; the
/// service decides what to do with it.
#[derive(Args)]
struct SoilArgs {
    /// Nitrogen (mg/kg)
    #[arg(long, value_name = "VALUE")]
    nitrogen: Option<String>,

    /// Phosphorus (mg/kg)
    #[arg(long, value_name = "VALUE")]
    phosphorus: Option<String>,

    /// Potassium (mg/kg)
    #[arg(long, value_name = "VALUE")]
    potassium: Option<String>,

    /// pH level
    #[arg(long, value_name = "VALUE")]
    ph: Option<String>,
}

impl SoilArgs {
    fn apply(self, session: &mut PredictionSession) {
        for (field, value) in [
            ("N", self.nitrogen),
            ("P", self.phosphorus),
            ("K", self.potassium),
            ("ph", self.ph),
        ] {
            if let Some(raw) = value {
                session.set_soil_field(field, &raw);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor=info,crop_advisor_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    tracing::info!(
        environment = %config.environment,
        service = %config.service.base_url,
        "starting crop advisor"
    );

    let cli = Cli::parse();
    let client = PredictionClient::new(config.service.base_url);
    let mut session = PredictionSession::new(client);

    match cli.command {
        Command::Weather { district } => {
            if let Some(district) = district.district {
                session.set_district(district);
            }
            session.fetch_weather().await;
            print_weather(&session);
        }
        Command::Predict { district, soil } => {
            if let Some(district) = district.district {
                session.set_district(district);
            }
            soil.apply(&mut session);
            session.predict_crops().await;
            print_recommendations(&session);
        }
        Command::Report { district, soil } => {
            if let Some(district) = district.district {
                session.set_district(district);
            }
            soil.apply(&mut session);
            session.refresh().await;
            print_weather(&session);
            print_recommendations(&session);
        }
    }

    Ok(())
}

/// A session with no stored result prints nothing, the same blank the
/// front-end shows before the first successful fetch.
fn print_weather(session: &PredictionSession) {
    if let Some(view) = session.weather_view() {
        print!("{}", render_weather(&view));
    }
}

fn print_recommendations(session: &PredictionSession) {
    if let Some(view) = session.recommendation_view() {
        print!("{}", render_recommendations(&view));
    }
}
