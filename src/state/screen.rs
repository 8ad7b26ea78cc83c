/// Screen state and its transition function
///
/// `ScreenState::update` is the only writer of the state. It performs no I/O:
/// anything that has to leave the UI thread (opening the picker, saving) is
/// handed back to the caller as an `Effect`.

use tracing::{debug, warn};

use super::data::{PickTicket, RasterImage};
use super::filter::{Filter, NO_FILTER_LABEL};

pub const SELECT_IMAGE_LABEL: &str = "Select Image";
pub const SAVE_IMAGE_LABEL: &str = "Save Image";

/// Which flavour of the screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenVariant {
    /// Filter row has an "Apply filter" button; applying turns the primary
    /// button into "Save Image"
    #[default]
    WithApply,
    /// Filter can only be chosen; the applied flag is never set
    SelectOnly,
}

/// Everything the user can do, plus the picker's answers
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The primary button ("Select Image" or "Save Image")
    Primary,
    /// A picker flow finished with a decoded image
    ImagePicked { ticket: PickTicket, image: RasterImage },
    /// A picker flow finished without an image
    PickCancelled { ticket: PickTicket },
    ChooseFilter(Filter),
    ApplyFilter,
    DeleteImage,
}

/// Work the caller must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the picker; report back with this ticket
    LaunchPicker(PickTicket),
    /// "Save Image" was pressed. Saving is not implemented
    SaveRequested(Filter),
}

/// Observable phase of the screen, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    ImageSelected,
    FilterChosen(Filter),
    FilterApplied(Filter),
}

/// State behind the single screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    variant: ScreenVariant,
    image: Option<RasterImage>,
    /// `None` is the "Select Filter" sentinel
    filter: Option<Filter>,
    filter_applied: bool,
    /// Most recent picker flow; results for any other ticket are dropped
    pending: Option<PickTicket>,
    next_ticket: u64,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(ScreenVariant::default())
    }
}

impl ScreenState {
    /// Start in the empty state
    pub fn new(variant: ScreenVariant) -> Self {
        Self {
            variant,
            image: None,
            filter: None,
            filter_applied: false,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Apply one action and report the effect it asks for
    pub fn update(&mut self, action: Action) -> Effect {
        match action {
            Action::Primary => {
                if self.filter_applied {
                    match self.filter {
                        Some(filter) => Effect::SaveRequested(filter),
                        None => Effect::None,
                    }
                } else {
                    Effect::LaunchPicker(self.begin_pick())
                }
            }
            Action::ImagePicked { ticket, image } => {
                if self.pending != Some(ticket) {
                    warn!("Dropping image from superseded picker flow {:?}", ticket);
                    return Effect::None;
                }
                debug!("Image {}x{} selected", image.width(), image.height());
                self.pending = None;
                self.image = Some(image);
                Effect::None
            }
            Action::PickCancelled { ticket } => {
                if self.pending == Some(ticket) {
                    debug!("Picker cancelled, keeping current image");
                    self.pending = None;
                }
                Effect::None
            }
            Action::ChooseFilter(filter) => {
                if self.image.is_some() {
                    debug!("Filter chosen: {}", filter);
                    self.filter = Some(filter);
                }
                Effect::None
            }
            Action::ApplyFilter => {
                if self.can_apply() {
                    // Only the flag changes; no pixels are touched
                    self.filter_applied = true;
                }
                Effect::None
            }
            Action::DeleteImage => {
                debug!("Image deleted");
                self.image = None;
                self.filter = None;
                self.filter_applied = false;
                Effect::None
            }
        }
    }

    /// Start a new picker flow, superseding any earlier one
    fn begin_pick(&mut self) -> PickTicket {
        self.next_ticket += 1;
        let ticket = PickTicket(self.next_ticket);
        self.pending = Some(ticket);
        self.filter = None;
        self.filter_applied = false;
        ticket
    }

    pub fn phase(&self) -> Phase {
        match (&self.image, self.filter) {
            (None, _) => Phase::Empty,
            (Some(_), None) => Phase::ImageSelected,
            (Some(_), Some(filter)) if self.filter_applied => Phase::FilterApplied(filter),
            (Some(_), Some(filter)) => Phase::FilterChosen(filter),
        }
    }

    pub fn variant(&self) -> ScreenVariant {
        self.variant
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn filter(&self) -> Option<Filter> {
        self.filter
    }

    pub fn is_filter_applied(&self) -> bool {
        self.filter_applied
    }

    /// Ticket of the picker flow still waiting for a result, if any
    pub fn pending(&self) -> Option<PickTicket> {
        self.pending
    }

    /// Filter row is shown exactly when an image is loaded
    pub fn filter_controls_visible(&self) -> bool {
        self.image.is_some()
    }

    pub fn can_apply(&self) -> bool {
        self.variant == ScreenVariant::WithApply && self.image.is_some() && self.filter.is_some()
    }

    pub fn primary_label(&self) -> &'static str {
        if self.filter_applied {
            SAVE_IMAGE_LABEL
        } else {
            SELECT_IMAGE_LABEL
        }
    }

    pub fn filter_label(&self) -> &'static str {
        self.filter.map_or(NO_FILTER_LABEL, Filter::name)
    }
}
