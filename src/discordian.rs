use std::fmt;

use serde::ser::SerializeStruct;
use tracing::{debug, trace};

use crate::consts::{
    APOSTLE_HOLYDAY_DAY, DAYS_IN_DISCORDIAN_YEAR, FLUX_HOLYDAY_DAY, SEASON_LENGTH,
    ST_TIBS_ORDINAL, YOLD_OFFSET,
};
use crate::prelude::*;
use crate::{Clock, GregorianDate, ParseError};

/// One of the five 73-day seasons of the Discordian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Season {
    #[display(fmt = "Chaos")]
    Chaos,
    #[display(fmt = "Discord")]
    Discord,
    #[display(fmt = "Confusion")]
    Confusion,
    #[display(fmt = "Bureaucracy")]
    Bureaucracy,
    #[display(fmt = "The Aftermath")]
    TheAftermath,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Self; 5] = [
        Self::Chaos,
        Self::Discord,
        Self::Confusion,
        Self::Bureaucracy,
        Self::TheAftermath,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaos => "Chaos",
            Self::Discord => "Discord",
            Self::Confusion => "Confusion",
            Self::Bureaucracy => "Bureaucracy",
            Self::TheAftermath => "The Aftermath",
        }
    }

    /// Ordinal of the day before the season's first day (0, 73, 146, 219, 292).
    pub const fn start(self) -> u16 {
        self as u16 * SEASON_LENGTH
    }

    /// Ordinal of the season's last day (73, 146, 219, 292, 365).
    pub const fn end(self) -> u16 {
        self.start() + SEASON_LENGTH
    }

    /// Holyday on the 5th day of the season.
    pub const fn apostle_holyday(self) -> Holyday {
        match self {
            Self::Chaos => Holyday::Mungday,
            Self::Discord => Holyday::Mojoday,
            Self::Confusion => Holyday::Syaday,
            Self::Bureaucracy => Holyday::Zaraday,
            Self::TheAftermath => Holyday::Maladay,
        }
    }

    /// Holyday on the 50th day of the season.
    pub const fn flux_holyday(self) -> Holyday {
        match self {
            Self::Chaos => Holyday::Chaoflux,
            Self::Discord => Holyday::Discoflux,
            Self::Confusion => Holyday::Confluflux,
            Self::Bureaucracy => Holyday::Bureflux,
            Self::TheAftermath => Holyday::Afflux,
        }
    }

    /// The season whose bin holds a leap-adjusted ordinal in `1..=365`.
    fn containing(ordinal: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|season| ordinal > season.start() && ordinal <= season.end())
    }

    /// The holyday falling on an absolute leap-adjusted ordinal, if any.
    ///
    /// Compares against the ordinal itself, never against the day within the
    /// season, so ordinal 78 is Mojoday while ordinal 5 alone is Mungday.
    const fn holyday_on(self, ordinal: u16) -> Option<Holyday> {
        if ordinal == self.start() + APOSTLE_HOLYDAY_DAY {
            Some(self.apostle_holyday())
        } else if ordinal == self.start() + FLUX_HOLYDAY_DAY {
            Some(self.flux_holyday())
        } else {
            None
        }
    }
}

/// A named Discordian holyday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Holyday {
    #[display(fmt = "St. Tib's Day")]
    StTibsDay,
    #[display(fmt = "Mungday")]
    Mungday,
    #[display(fmt = "Chaoflux")]
    Chaoflux,
    #[display(fmt = "Mojoday")]
    Mojoday,
    #[display(fmt = "Discoflux")]
    Discoflux,
    #[display(fmt = "Syaday")]
    Syaday,
    #[display(fmt = "Confluflux")]
    Confluflux,
    #[display(fmt = "Zaraday")]
    Zaraday,
    #[display(fmt = "Bureflux")]
    Bureflux,
    #[display(fmt = "Maladay")]
    Maladay,
    #[display(fmt = "Afflux")]
    Afflux,
}

impl Holyday {
    /// The season the holyday belongs to; St. Tib's Day belongs to none.
    pub const fn season(self) -> Option<Season> {
        match self {
            Self::StTibsDay => None,
            Self::Mungday | Self::Chaoflux => Some(Season::Chaos),
            Self::Mojoday | Self::Discoflux => Some(Season::Discord),
            Self::Syaday | Self::Confluflux => Some(Season::Confusion),
            Self::Zaraday | Self::Bureflux => Some(Season::Bureaucracy),
            Self::Maladay | Self::Afflux => Some(Season::TheAftermath),
        }
    }
}

/// A date in the Discordian calendar.
///
/// Either the intercalary St. Tib's Day, which belongs to no season, or a
/// numbered day of one of the five seasons, optionally a holyday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscordianDate {
    /// The leap day of a Gregorian leap year
    StTibsDay { yold: u16 },
    /// Day `day` (1..=73) of `season`
    SeasonDay {
        yold:    u16,
        season:  Season,
        day:     u8,
        holyday: Option<Holyday>,
    },
}

impl DiscordianDate {
    /// Converts a Gregorian date.
    ///
    /// In leap years 29 February becomes St. Tib's Day and every later day is
    /// numbered as though 29 February did not exist, keeping all five seasons
    /// at 73 days.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let yold = date.year() + YOLD_OFFSET;
        let ordinal = date.ordinal();
        let leap = date.is_leap_year();

        if leap && ordinal == ST_TIBS_ORDINAL {
            debug!(%date, yold, "St. Tib's Day");
            return Self::StTibsDay { yold };
        }

        let adjusted = if leap && ordinal > ST_TIBS_ORDINAL {
            ordinal - 1
        } else {
            ordinal
        };
        trace!(%date, ordinal, adjusted, leap, "leap-adjusted ordinal");

        let converted = Self::from_adjusted_ordinal(yold, adjusted);
        debug!(%date, discordian = %converted, "converted");
        converted
    }

    /// Converts the current date reported by `clock`.
    ///
    /// # Errors
    /// Propagates the clock's error when it cannot produce a supported date.
    pub fn today(clock: &impl Clock) -> Result<Self, ParseError> {
        clock.today().map(Self::from_gregorian)
    }

    fn from_adjusted_ordinal(yold: u16, ordinal: u16) -> Self {
        debug_assert!((1..=DAYS_IN_DISCORDIAN_YEAR).contains(&ordinal));

        let season = Season::containing(ordinal).unwrap_or(Season::TheAftermath);
        // At most SEASON_LENGTH, always fits
        #[allow(clippy::cast_possible_truncation)]
        let day = (ordinal - season.start()) as u8;

        Self::SeasonDay {
            yold,
            season,
            day,
            holyday: season.holyday_on(ordinal),
        }
    }

    /// Year of Our Lady of Discord
    pub const fn yold(&self) -> u16 {
        match *self {
            Self::StTibsDay { yold } | Self::SeasonDay { yold, .. } => yold,
        }
    }

    pub const fn season(&self) -> Option<Season> {
        match *self {
            Self::StTibsDay { .. } => None,
            Self::SeasonDay { season, .. } => Some(season),
        }
    }

    pub const fn season_day(&self) -> Option<u8> {
        match *self {
            Self::StTibsDay { .. } => None,
            Self::SeasonDay { day, .. } => Some(day),
        }
    }

    pub const fn holyday(&self) -> Option<Holyday> {
        match *self {
            Self::StTibsDay { .. } => Some(Holyday::StTibsDay),
            Self::SeasonDay { holyday, .. } => holyday,
        }
    }

    pub const fn is_st_tibs_day(&self) -> bool {
        matches!(self, Self::StTibsDay { .. })
    }

    /// The one-line announcement printed by `ddate`.
    pub fn sentence(&self) -> String {
        format!("Today is {self}.")
    }
}

impl fmt::Display for DiscordianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::StTibsDay { yold } => write!(f, "{}, {yold} YOLD", Holyday::StTibsDay),
            Self::SeasonDay {
                yold,
                season,
                day,
                holyday: Some(holyday),
            } => write!(f, "{holyday}, {season} {day}, {yold} YOLD"),
            Self::SeasonDay {
                yold,
                season,
                day,
                holyday: None,
            } => write!(f, "{season} {day}, {yold} YOLD"),
        }
    }
}

impl serde::Serialize for Season {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl serde::Serialize for Holyday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl serde::Serialize for DiscordianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DiscordianDate", 4)?;
        state.serialize_field("yold", &self.yold())?;
        state.serialize_field("season", &self.season())?;
        state.serialize_field("season_day", &self.season_day())?;
        state.serialize_field("holyday", &self.holyday())?;
        state.end()
    }
}
