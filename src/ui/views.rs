//! View rendering for the explorer window.

use iced::widget::{Space, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length};

use super::canvas::graph_canvas;
use super::messages::Message;
use super::state::ExplorerState;
use super::theme::{self, color, spacing, typography};
use crate::explorer::SampleView;
use crate::model::SongRecord;

/// Main view for a ready explorer
pub fn explorer_view(s: &ExplorerState) -> Element<'_, Message> {
    let header = column![
        text("Sample Explorer").size(typography::SIZE_TITLE),
        text("Search for a song to see which records it samples.")
            .size(typography::SIZE_BODY)
            .color(color::TEXT_MUTED),
    ]
    .spacing(spacing::XS);

    let search = text_input("Search for a song...", &s.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(spacing::SM)
        .size(typography::SIZE_BODY);

    let mut content = column![header, search].spacing(spacing::LG);

    if let Some(error) = &s.error {
        content = content.push(
            text(error)
                .size(typography::SIZE_BODY)
                .color(color::ERROR),
        );
    }

    if s.searching {
        content = content.push(muted("Searching..."));
    } else if !s.results.is_empty() {
        content = content.push(
            row![
                text("Select a song:").size(typography::SIZE_BODY),
                pick_list(
                    s.results.clone(),
                    s.selected_summary().cloned(),
                    Message::SongSelected,
                )
                .width(Length::Fill),
            ]
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center),
        );
    } else if s.searched && s.error.is_none() {
        content = content.push(muted("No results found. Try a different search term."));
    }

    if s.loading_song.is_some() {
        content = content.push(muted("Loading sample data and generating graph..."));
    } else if let Some(view) = &s.sample_view {
        content = content.push(sample_view(view));
    }

    scrollable(content.padding(spacing::XS)).into()
}

fn sample_view(view: &SampleView) -> Element<'_, Message> {
    let main = &view.details.main_song;
    let heading = text(format!("Samples used in {}", main.title)).size(typography::SIZE_HEADING);
    let subtitle = muted(format!("{} · {}", main.artist, main.year_label()));

    if !view.details.has_samples() {
        return column![heading, subtitle, muted("No samples found for this song.")]
            .spacing(spacing::SM)
            .into();
    }

    let graph = container(graph_canvas(&view.figure))
        .width(Length::Fill)
        .style(|_| theme::card_style());

    column![
        heading,
        subtitle,
        graph,
        text("Sample Details").size(typography::SIZE_HEADING),
        sample_table(&view.details.sampled_songs),
    ]
    .spacing(spacing::MD)
    .into()
}

/// Song / Artist / Year table for the sampled songs
fn sample_table(samples: &[SongRecord]) -> Element<'_, Message> {
    let header = table_row(
        text("Song").size(typography::SIZE_SMALL).color(color::TEXT_MUTED),
        text("Artist").size(typography::SIZE_SMALL).color(color::TEXT_MUTED),
        text("Year").size(typography::SIZE_SMALL).color(color::TEXT_MUTED),
    );

    let rows = samples.iter().map(|song| {
        table_row(
            text(&song.title).size(typography::SIZE_BODY),
            text(&song.artist).size(typography::SIZE_BODY),
            text(song.year_label()).size(typography::SIZE_BODY),
        )
    });

    let table = column(std::iter::once(header).chain(rows)).spacing(spacing::SM);

    container(table)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_| theme::card_style())
        .into()
}

fn table_row<'a>(
    song: iced::widget::Text<'a>,
    artist: iced::widget::Text<'a>,
    year: iced::widget::Text<'a>,
) -> Element<'a, Message> {
    row![
        song.width(Length::FillPortion(5)),
        artist.width(Length::FillPortion(4)),
        year.width(Length::FillPortion(1)),
        Space::with_width(spacing::XS),
    ]
    .spacing(spacing::MD)
    .into()
}

fn muted<'a>(content: impl ToString) -> iced::widget::Text<'a> {
    text(content.to_string())
        .size(typography::SIZE_BODY)
        .color(color::TEXT_MUTED)
}
