// File: chicai-tui/src/main.rs

use std::io::{stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chicai_common::traits::{CameraDevice, Geolocator};
use chicai_core::capture::{NoCamera, StillFrameCamera};
use chicai_core::weather::{FixedLocation, NoLocation, DEFAULT_LOCATION_LABEL};
use chicai_core::{StylistConfig, StylistService};
use chicai_tui::commands::{dispatch, handle_capture_line, startup_weather};
use chicai_tui::{render, TuiApp};

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "chicai")]
#[command(author, version, about = "ChicAI - outfit ideas for any occasion, and a virtual try-on")]
struct Args {
    /// Base URL of the generative model API
    #[arg(long)]
    api_base: Option<String>,

    /// Model used for outfit recommendations
    #[arg(long)]
    text_model: Option<String>,

    /// Model used for try-on images
    #[arg(long)]
    image_model: Option<String>,

    /// Base URL of the weather API
    #[arg(long)]
    weather_api_base: Option<String>,

    /// Your latitude; weather is skipped unless both coordinates are given
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Your longitude
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Name shown next to the weather
    #[arg(long, default_value = DEFAULT_LOCATION_LABEL)]
    location_label: String,

    /// Image file served as the camera feed
    #[arg(long)]
    camera_frame: Option<PathBuf>,

    /// Timeout for model requests, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn apply_to(&self, mut config: StylistConfig) -> StylistConfig {
        if let Some(v) = &self.api_base {
            config.api_base = v.clone();
        }
        if let Some(v) = &self.text_model {
            config.text_model = v.clone();
        }
        if let Some(v) = &self.image_model {
            config.image_model = v.clone();
        }
        if let Some(v) = &self.weather_api_base {
            config.weather_api_base = v.clone();
        }
        if let Some(v) = self.timeout_secs {
            config.request_timeout_secs = v;
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chicai=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = args.apply_to(StylistConfig::from_env());
    if !config.has_api_key() {
        println!("GEMINI_API_KEY is not set; recommendations and try-on will fail until it is.");
    }

    let geolocator: Arc<dyn Geolocator> = match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => Arc::new(FixedLocation::new(lat, lon)),
        _ => Arc::new(NoLocation),
    };
    let camera: Arc<dyn CameraDevice> = match &args.camera_frame {
        Some(path) => Arc::new(StillFrameCamera::new(path)),
        None => Arc::new(NoCamera),
    };

    info!(
        "ChicAI starting; text model = {}, image model = {}",
        config.text_model, config.image_model
    );
    let service = Arc::new(StylistService::from_config(
        config,
        geolocator,
        args.location_label.clone(),
    )?);
    let app = TuiApp::new(service.clone(), camera);

    // Weather arrives in the background; announce it once when it lands.
    // Later lookups are printed by the `weather` command itself.
    let startup = service.clone();
    tokio::spawn(async move {
        if let Some(card) = startup_weather(&startup).await {
            println!("\n{}", card);
        }
    });

    println!("ChicAI - your personal stylist");
    println!("\n{}", render::render_occasions(&service.view()));
    println!("Type 'help' for available commands.\n");

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", app.prompt_string());
        stdout().flush()?;

        let line = match reader.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break, // EOF
        };

        if line.is_empty() {
            continue;
        }

        let (consumed, output) = handle_capture_line(&line, &app);
        if consumed {
            if let Some(msg) = output {
                println!("{}", msg);
            }
            continue;
        }

        let (quit_requested, output) = dispatch(&line, &app).await;

        if let Some(msg) = output {
            println!("{}", msg);
        }

        if quit_requested {
            break;
        }
    }

    app.end_capture();
    Ok(())
}
