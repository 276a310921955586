use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};

use skycast_core::{AppError, Config};
use skycast_weather::{
    build_view_model, GeocodingClient, Location, TemperatureUnit, UnitPreference, WeatherProvider,
    WindUnit,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the forecast for a city.
    Show {
        /// City name, e.g. "Vilnius".
        city: String,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Show the forecast for coordinates.
    Here {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Manage favorite cities.
    #[command(subcommand)]
    Fav(FavCommand),
}

/// One-shot unit overrides; saved preferences apply otherwise.
#[derive(Debug, Args)]
pub struct UnitArgs {
    /// Temperatures in Fahrenheit instead of Celsius.
    #[arg(long)]
    pub fahrenheit: bool,

    /// Wind speeds in mph instead of km/h.
    #[arg(long)]
    pub mph: bool,
}

impl UnitArgs {
    fn apply(&self, saved: UnitPreference) -> UnitPreference {
        UnitPreference {
            temperature: if self.fahrenheit {
                TemperatureUnit::Fahrenheit
            } else {
                saved.temperature
            },
            wind: if self.mph { WindUnit::Mph } else { saved.wind },
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// Add a city to favorites.
    Add { city: String },
    /// Remove a city from favorites.
    Remove { city: String },
    /// List favorite cities.
    List,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let result = match self.command {
            Command::Show { city, units } => show_city(&city, &units).await,
            Command::Here {
                latitude,
                longitude,
                units,
            } => show_coordinates(latitude, longitude, &units).await,
            Command::Fav(cmd) => run_fav(cmd),
        };

        if let Err(e) = result {
            tracing::error!("command failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }

        Ok(())
    }
}

async fn show_city(city: &str, units: &UnitArgs) -> Result<(), AppError> {
    let location = GeocodingClient::new()?.search_city(city).await?;
    show_location(location, units).await
}

async fn show_coordinates(
    latitude: f64,
    longitude: f64,
    units: &UnitArgs,
) -> Result<(), AppError> {
    let location = GeocodingClient::new()?
        .reverse_geocode(latitude, longitude)
        .await;
    show_location(location, units).await
}

async fn show_location(location: Location, units: &UnitArgs) -> Result<(), AppError> {
    let config = Config::load()?;
    let units = units.apply(config.units);

    let snapshot = WeatherProvider::new()?.fetch_forecast(&location).await?;
    let now = Local::now().naive_local();
    let view = build_view_model(&snapshot, &location, units, now)?;
    render::print_view_model(&view);
    Ok(())
}

fn run_fav(cmd: FavCommand) -> Result<(), AppError> {
    let mut config = Config::load()?;

    match cmd {
        FavCommand::Add { city } => {
            if config.favorites.add(&city) {
                config.save()?;
                println!("Added {} to favorites.", city);
            } else {
                println!("{} is already in your favorites.", city);
            }
        }
        FavCommand::Remove { city } => {
            if config.favorites.remove(&city) {
                config.save()?;
                println!("Removed {} from favorites.", city);
            } else {
                println!("{} is not in your favorites.", city);
            }
        }
        FavCommand::List => {
            if config.favorites.cities.is_empty() {
                println!("No favorites yet");
            } else {
                for city in &config.favorites.cities {
                    println!("{}", city);
                }
            }
        }
    }

    Ok(())
}
