// src/application/app.rs

use std::sync::Arc;

use super::console::Console;
use super::table::{planet_columns, print_table};
use crate::config::AppConfig;
use crate::domain::{Planet, PlanetProperty};
use crate::error::AppResult;
use crate::integrations::JsonReader;
use crate::services::{load_planets, report_statistics};

pub const PROMPT: &str = "The statistics of which property would you like to see?";
pub const INVALID_CHOICE: &str = "Invalid choice.";

pub struct App {
    reader: Arc<dyn JsonReader>,
    config: AppConfig,
}

impl App {
    pub fn new(reader: Arc<dyn JsonReader>, config: AppConfig) -> Self {
        Self { reader, config }
    }

    /// Run the pipeline; every failure is reported here and nowhere else.
    /// Only a console that cannot be written to escapes as an error.
    pub async fn execute(&self, console: &mut dyn Console) -> AppResult<()> {
        if let Err(err) = self.run(console).await {
            log::error!("run aborted: {}", err);
            console.write_line(&err.to_string())?;
        }

        if self.config.pause_on_exit {
            console.read_line()?;
        }
        Ok(())
    }

    /// Fetch, print the table, ask for a property and report it
    pub async fn run(&self, console: &mut dyn Console) -> AppResult<()> {
        let planets = self.fetch_planets().await?;

        print_table(console, &planet_columns(), &planets)?;

        match self.ask_property(console)? {
            Some(property) => {
                log::info!("statistics requested for {}", property);
                report_statistics(console, &planets, property)
            }
            None => console.write_line(INVALID_CHOICE),
        }
    }

    async fn fetch_planets(&self) -> AppResult<Vec<Planet>> {
        let json = self
            .reader
            .read(&self.config.base_address, &self.config.resource)
            .await?;
        load_planets(&json)
    }

    fn ask_property(&self, console: &mut dyn Console) -> AppResult<Option<PlanetProperty>> {
        console.write_line(PROMPT)?;
        for property in PlanetProperty::ALL {
            console.write_line(property.label())?;
        }

        let choice = console.read_line()?;
        if choice.is_none() {
            log::debug!("input closed before a property was chosen");
        }
        Ok(choice.as_deref().and_then(PlanetProperty::from_label))
    }
}
