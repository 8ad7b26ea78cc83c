use iced::widget::{button, column, container, pick_list, row, text, Image, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::app::Message;
use crate::state::filter::NO_FILTER_LABEL;
use crate::state::{Filter, ScreenState, ScreenVariant};

/// Side of the square preview frame
const PREVIEW_SIZE: f32 = 300.0;

/// Build the screen for the current state
///
/// This is the only reader of `ScreenState`; it never mutates it.
pub fn render<'a>(state: &'a ScreenState, status: &'a str) -> Element<'a, Message> {
    let mut content = column![preview(state)]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

    if shows_filter_row(state) {
        content = content.push(filter_controls(state));
    }

    content = content
        .push(
            button(text(state.primary_label()))
                .on_press(Message::Primary)
                .padding(10),
        )
        .push(text(status).size(14));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn preview(state: &ScreenState) -> Element<'_, Message> {
    let inner: Element<'_, Message> = match state.image() {
        Some(image) => column![
            row![
                Space::with_width(Length::Fill),
                button(text("Delete"))
                    .on_press(Message::DeleteImage)
                    .style(button::danger),
            ],
            Image::new(image.handle().clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(8)
        .into(),
        None => text("No Image Selected").into(),
    };

    container(inner)
        .padding(16)
        .center_x(Length::Fixed(PREVIEW_SIZE))
        .center_y(Length::Fixed(PREVIEW_SIZE))
        .style(container::bordered_box)
        .into()
}

/// How the "Apply filter" button appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApplyButton {
    Hidden,
    Disabled,
    Enabled,
}

/// Filter controls only exist while an image is loaded
fn shows_filter_row(state: &ScreenState) -> bool {
    state.filter_controls_visible()
}

fn apply_button(state: &ScreenState) -> ApplyButton {
    if !shows_filter_row(state) || state.variant() != ScreenVariant::WithApply {
        ApplyButton::Hidden
    } else if state.can_apply() {
        ApplyButton::Enabled
    } else {
        ApplyButton::Disabled
    }
}

fn filter_controls(state: &ScreenState) -> Element<'_, Message> {
    let choices = pick_list(Filter::ALL, state.filter(), Message::FilterChosen)
        .placeholder(NO_FILTER_LABEL);

    let mut controls = row![choices].spacing(16).align_y(Alignment::Center);

    let apply = button(text("Apply filter"));
    match apply_button(state) {
        ApplyButton::Hidden => {}
        ApplyButton::Disabled => controls = controls.push(apply),
        ApplyButton::Enabled => controls = controls.push(apply.on_press(Message::ApplyFilter)),
    }

    controls.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, Effect, RasterImage};

    fn with_image(variant: ScreenVariant) -> ScreenState {
        let mut state = ScreenState::new(variant);
        if let Effect::LaunchPicker(ticket) = state.update(Action::Primary) {
            let image = RasterImage::from_rgba(1, 1, vec![0; 4]);
            state.update(Action::ImagePicked { ticket, image });
        }
        state
    }

    #[test]
    fn test_empty_screen_has_no_filter_row() {
        let state = ScreenState::default();
        assert!(!shows_filter_row(&state));
        assert_eq!(apply_button(&state), ApplyButton::Hidden);
    }

    #[test]
    fn test_filter_row_follows_image() {
        let mut state = with_image(ScreenVariant::WithApply);
        assert!(shows_filter_row(&state));

        state.update(Action::DeleteImage);
        assert!(!shows_filter_row(&state));
    }

    #[test]
    fn test_apply_disabled_until_filter_chosen() {
        let mut state = with_image(ScreenVariant::WithApply);
        assert_eq!(apply_button(&state), ApplyButton::Disabled);

        state.update(Action::ChooseFilter(Filter::Contrast));
        assert_eq!(apply_button(&state), ApplyButton::Enabled);
    }

    #[test]
    fn test_select_only_hides_apply() {
        let mut state = with_image(ScreenVariant::SelectOnly);
        state.update(Action::ChooseFilter(Filter::Grayscale));

        assert!(shows_filter_row(&state));
        assert_eq!(apply_button(&state), ApplyButton::Hidden);
    }

    #[test]
    fn test_render_every_phase() {
        let mut state = with_image(ScreenVariant::WithApply);
        let _ = render(&state, "");

        state.update(Action::ChooseFilter(Filter::Brightness));
        state.update(Action::ApplyFilter);
        let _ = render(&state, "applied");

        let _ = render(&ScreenState::default(), "Ready.");
    }
}
