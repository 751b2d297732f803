//! UI module for Sample Explorer.

mod canvas;
mod messages;
mod state;
pub mod theme;
mod update;
mod views;

use std::sync::Arc;

use iced::widget::{container, text};
use iced::{Element, Length, Task, Theme};

use crate::config;
use crate::genius::GeniusClient;

pub use messages::Message;
use state::{AppState, ExplorerState};

pub struct SampleExplorer {
    state: AppState,
}

impl SampleExplorer {
    /// Build the window state; `token` is the `--token` / env override
    pub fn new(token: Option<String>) -> (Self, Task<Message>) {
        let state = match connect(token.as_deref()) {
            Ok(client) => {
                tracing::debug!("Using API at {}", client.base_url());
                AppState::Ready(Box::new(ExplorerState::new(Arc::new(client))))
            }
            Err(e) => {
                tracing::error!("Cannot start explorer: {}", e);
                AppState::Error(e.to_string())
            }
        };
        (Self { state }, Task::none())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<Message> = match &self.state {
            AppState::Ready(s) => views::explorer_view(s),
            AppState::Error(e) => text(format!("Error: {}", e))
                .size(theme::typography::SIZE_HEADING)
                .color(theme::color::ERROR)
                .into(),
        };
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        tracing::trace!(target: "ui::update", message = ?message, "Update received");

        let AppState::Ready(s) = &mut self.state else {
            return Task::none();
        };
        update::handle(s, message)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn connect(token: Option<&str>) -> Result<GeniusClient, crate::error::Error> {
    let config = config::load();
    let token = config.access_token(token)?;
    Ok(GeniusClient::with_base_url(token, config.api.base_url)?)
}
