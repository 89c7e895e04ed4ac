use crate::clock::Clock;
use crate::config::CardConfig;
use crate::day_progress::classify_with;
use crate::error::Result;
use crate::locations::LocationTable;
use crate::types::{
    ActiveView, Activity, ActivityIcon, DayProgressState, Gradient, LocationRecord, Rgb, Theme,
};

pub const INITIAL_CITY: &str = "New York";

pub const SUNRISE_ACTIVITIES: [Activity; 3] = [
    Activity {
        icon: ActivityIcon::Coffee,
        name: "Morning coffee",
        description: "Start your day with a relaxing coffee",
    },
    Activity {
        icon: ActivityIcon::Bike,
        name: "Morning jog",
        description: "Enjoy the fresh morning air",
    },
    Activity {
        icon: ActivityIcon::Camera,
        name: "Sunrise photography",
        description: "Capture the beautiful colors",
    },
];

pub const SUNSET_ACTIVITIES: [Activity; 3] = [
    Activity {
        icon: ActivityIcon::Camera,
        name: "Sunset photography",
        description: "Capture the golden hour",
    },
    Activity {
        icon: ActivityIcon::Umbrella,
        name: "Beach walk",
        description: "Enjoy the cool evening breeze",
    },
    Activity {
        icon: ActivityIcon::Moon,
        name: "Stargazing",
        description: "Wait for the stars to appear",
    },
];

pub const SUNRISE_THEME: Theme = Theme {
    accent: Gradient {
        from: Rgb(0xfc, 0xd3, 0x4d),
        to: Rgb(0xf9, 0x73, 0x16),
    },
    panel: Gradient {
        from: Rgb(0xff, 0xfb, 0xeb),
        to: Rgb(0xff, 0xed, 0xd5),
    },
    text: Rgb(0xb4, 0x53, 0x09),
};

pub const SUNSET_THEME: Theme = Theme {
    accent: Gradient {
        from: Rgb(0x37, 0x30, 0xa3),
        to: Rgb(0x58, 0x1c, 0x87),
    },
    panel: Gradient {
        from: Rgb(0xee, 0xf2, 0xff),
        to: Rgb(0xf3, 0xe8, 0xff),
    },
    text: Rgb(0x43, 0x38, 0xca),
};

impl ActiveView {
    pub fn activities(&self) -> &'static [Activity] {
        match self {
            ActiveView::Sunrise => &SUNRISE_ACTIVITIES,
            ActiveView::Sunset => &SUNSET_ACTIVITIES,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ActiveView::Sunrise => SUNRISE_THEME,
            ActiveView::Sunset => SUNSET_THEME,
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            ActiveView::Sunrise => "Rise and shine!",
            ActiveView::Sunset => "Time to wind down",
        }
    }
}

/// Presentation state of the sun times card.
///
/// Text input is held until [`SunCard::submit`]; an empty or whitespace-only
/// submit leaves the displayed location untouched.
#[derive(Debug, Clone)]
pub struct SunCard {
    table: LocationTable,
    input: String,
    current_location: String,
    record: LocationRecord,
    active_view: ActiveView,
    progress: DayProgressState,
}

impl SunCard {
    pub fn new(table: LocationTable, initial_city: &str, progress: DayProgressState) -> Self {
        let record = table.resolve(initial_city).clone();
        Self {
            table,
            input: String::new(),
            current_location: initial_city.trim().to_string(),
            record,
            active_view: ActiveView::default(),
            progress,
        }
    }

    pub fn from_config(config: &CardConfig, clock: &impl Clock) -> Result<Self> {
        config.validate()?;
        let table = config.build_table()?;
        let progress = classify_with(&clock.now(), config.time_format);
        Ok(Self::new(table, &config.default_city, progress))
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Resolves the current input. Returns `false` without touching the
    /// displayed state when the trimmed input is empty.
    pub fn submit(&mut self) -> bool {
        let query = self.input.trim();
        if query.is_empty() {
            log::debug!("ignoring empty location search");
            return false;
        }

        self.record = self.table.resolve(query).clone();
        self.current_location = query.to_string();
        true
    }

    pub fn search(&mut self, text: impl Into<String>) -> bool {
        self.set_input(text);
        self.submit()
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn record(&self) -> &LocationRecord {
        &self.record
    }

    pub fn table(&self) -> &LocationTable {
        &self.table
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn featured_time(&self) -> &str {
        match self.active_view {
            ActiveView::Sunrise => &self.record.sunrise,
            ActiveView::Sunset => &self.record.sunset,
        }
    }

    pub fn tagline(&self) -> &'static str {
        self.active_view.tagline()
    }

    pub fn activities(&self) -> &'static [Activity] {
        self.active_view.activities()
    }

    pub fn theme(&self) -> Theme {
        self.active_view.theme()
    }

    pub fn first_light(&self) -> Result<String> {
        self.record.first_light()
    }

    pub fn last_light(&self) -> Result<String> {
        self.record.last_light()
    }

    pub fn apply_progress(&mut self, state: DayProgressState) {
        self.progress = state;
    }

    pub fn progress(&self) -> &DayProgressState {
        &self.progress
    }

    pub fn status_label(&self) -> &'static str {
        self.progress.time_of_day.status_label()
    }
}
