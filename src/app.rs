/// The iced application: messages in, state transitions, effects out as tasks

use iced::{Element, Task, Theme};
use std::sync::Arc;
use tracing::{error, info};

use crate::acquire::{self, DecodeError, Decoder, GalleryPicker, ImagePicker, PlatformDecoder};
use crate::config::Settings;
use crate::state::{Action, Effect, Filter, PickTicket, RasterImage, ScreenState};
use crate::ui;

/// Main application state
pub struct PhotoFilter {
    /// The screen's state machine
    screen: ScreenState,
    /// Status message to display to the user
    status: String,
    title: String,
    theme: Theme,
    /// Injected picker capability
    picker: Arc<dyn ImagePicker>,
    /// Injected decode capability
    decoder: Arc<dyn Decoder>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the primary button ("Select Image" / "Save Image")
    Primary,
    /// A picker flow finished: an image, a cancellation, or a decode failure
    Acquired(PickTicket, Result<Option<RasterImage>, DecodeError>),
    /// User picked a name from the filter menu
    FilterChosen(Filter),
    /// User clicked "Apply filter"
    ApplyFilter,
    /// User clicked the delete button on the preview
    DeleteImage,
}

impl PhotoFilter {
    /// Create the application from settings, wiring in the platform capabilities
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let picker = GalleryPicker::new(settings.picker_title.clone(), settings.gallery_dir());
        let decoder = PlatformDecoder::new(settings.capabilities);

        info!(
            "🎨 Photo Filter starting ({:?}, {:?} decoding)",
            settings.variant,
            decoder.strategy()
        );

        (
            Self::with_capabilities(&settings, Arc::new(picker), Arc::new(decoder)),
            Task::none(),
        )
    }

    pub fn with_capabilities(
        settings: &Settings,
        picker: Arc<dyn ImagePicker>,
        decoder: Arc<dyn Decoder>,
    ) -> Self {
        PhotoFilter {
            screen: ScreenState::new(settings.variant),
            status: String::from("Ready."),
            title: settings.window_title.clone(),
            theme: settings.theme.clone(),
            picker,
            decoder,
        }
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effect = match message {
            Message::Primary => self.screen.update(Action::Primary),
            Message::Acquired(ticket, result) => self.finish_pick(ticket, result),
            Message::FilterChosen(filter) => self.screen.update(Action::ChooseFilter(filter)),
            Message::ApplyFilter => self.screen.update(Action::ApplyFilter),
            Message::DeleteImage => {
                self.status = String::from("Image removed.");
                self.screen.update(Action::DeleteImage)
            }
        };

        self.run(effect)
    }

    /// Feed a picker result back into the state machine
    fn finish_pick(
        &mut self,
        ticket: PickTicket,
        result: Result<Option<RasterImage>, DecodeError>,
    ) -> Effect {
        let current = self.screen.pending() == Some(ticket);

        match result {
            Ok(Some(image)) => {
                if current {
                    self.status = format!("Loaded {}x{} image.", image.width(), image.height());
                }
                self.screen.update(Action::ImagePicked { ticket, image })
            }
            Ok(None) => self.screen.update(Action::PickCancelled { ticket }),
            Err(e) => {
                // State is left as it was; only the status line changes
                error!("❌ Could not load image: {}", e);
                if current {
                    self.status = format!("⚠️  Could not load image: {}", e);
                }
                self.screen.update(Action::PickCancelled { ticket })
            }
        }
    }

    /// Carry out what a transition asked for
    fn run(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::LaunchPicker(ticket) => {
                let picker = Arc::clone(&self.picker);
                let decoder = Arc::clone(&self.decoder);

                Task::perform(acquire::acquire(picker, decoder), move |result| {
                    Message::Acquired(ticket, result)
                })
            }
            Effect::SaveRequested(filter) => {
                // TODO: write the filtered image once filters touch pixels
                info!("💾 Save requested for {} filter; saving is not implemented", filter);
                self.status = String::from("Saving is not available yet.");
                Task::none()
            }
        }
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        ui::render(&self.screen, &self.status)
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::{ContentRef, PickerOutcome};
    use crate::state::{Phase, ScreenVariant};
    use async_trait::async_trait;

    struct NeverPicker;

    #[async_trait]
    impl ImagePicker for NeverPicker {
        async fn pick(&self) -> PickerOutcome {
            PickerOutcome::Cancelled
        }
    }

    struct NeverDecoder;

    impl Decoder for NeverDecoder {
        fn decode(&self, content: &ContentRef) -> Result<RasterImage, DecodeError> {
            Err(DecodeError::UnsupportedFormat(content.to_string()))
        }
    }

    fn app(variant: ScreenVariant) -> PhotoFilter {
        let settings = Settings {
            variant,
            ..Settings::default()
        };
        PhotoFilter::with_capabilities(&settings, Arc::new(NeverPicker), Arc::new(NeverDecoder))
    }

    fn launch(app: &mut PhotoFilter) -> PickTicket {
        let _ = app.update(Message::Primary);
        app.screen.pending().expect("picker should be pending")
    }

    fn image() -> RasterImage {
        RasterImage::from_rgba(2, 1, vec![7; 8])
    }

    #[test]
    fn test_full_flow() {
        let mut app = app(ScreenVariant::WithApply);

        let ticket = launch(&mut app);
        let _ = app.update(Message::Acquired(ticket, Ok(Some(image()))));
        assert_eq!(app.screen.phase(), Phase::ImageSelected);
        assert_eq!(app.status, "Loaded 2x1 image.");

        let _ = app.update(Message::FilterChosen(Filter::Grayscale));
        let _ = app.update(Message::ApplyFilter);
        assert_eq!(app.screen.primary_label(), "Save Image");

        let _ = app.update(Message::Primary);
        assert_eq!(app.screen.phase(), Phase::FilterApplied(Filter::Grayscale));
        assert_eq!(app.status, "Saving is not available yet.");

        let _ = app.update(Message::DeleteImage);
        assert_eq!(app.screen.phase(), Phase::Empty);
    }

    #[test]
    fn test_decode_failure_leaves_state() {
        let mut app = app(ScreenVariant::WithApply);

        let ticket = launch(&mut app);
        let _ = app.update(Message::Acquired(ticket, Ok(Some(image()))));

        let ticket = launch(&mut app);
        let err = DecodeError::UnsupportedFormat("broken.xyz".into());
        let _ = app.update(Message::Acquired(ticket, Err(err)));

        assert_eq!(app.screen.image(), Some(&image()));
        assert_eq!(app.screen.pending(), None);
        assert!(app.status.contains("broken.xyz"));
    }

    #[test]
    fn test_stale_result_does_not_touch_status() {
        let mut app = app(ScreenVariant::SelectOnly);

        let stale = launch(&mut app);
        let _fresh = launch(&mut app);
        let _ = app.update(Message::Acquired(stale, Ok(Some(image()))));

        assert_eq!(app.screen.phase(), Phase::Empty);
        assert_eq!(app.status, "Ready.");
    }
}
