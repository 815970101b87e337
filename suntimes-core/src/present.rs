use crate::model::{Coordinates, DayRecord};

/// Which of the two display regions an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Tomorrow,
}

impl DayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Today => "Today",
            DayLabel::Tomorrow => "Tomorrow",
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled day, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub label: DayLabel,
    pub record: DayRecord,
    pub coords: Coordinates,
}

impl DayEntry {
    /// The human-readable lines for this entry, in display order.
    ///
    /// This mapping is the external contract with the rendering boundary;
    /// renderers add decoration but never reorder or reword these.
    pub fn lines(&self) -> Vec<String> {
        let day = self.label.as_str();
        let r = &self.record;

        vec![
            format!(
                "Latitude: {}, Longitude: {}",
                self.coords.latitude, self.coords.longitude
            ),
            format!("{day}'s Sunrise: {}", r.sunrise),
            format!("{day}'s Sunset: {}", r.sunset),
            format!("{day}'s Dawn: {}", r.dawn),
            format!("{day}'s Dusk: {}", r.dusk),
            format!("{day}'s Day Length: {}", r.day_length),
            format!("{day}'s Solar Noon: {}", r.solar_noon),
            format!("Time Zone: {}", r.timezone),
        ]
    }
}

/// The fused result of one lookup: today first, tomorrow second.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub today: DayEntry,
    pub tomorrow: DayEntry,
}

impl DisplayModel {
    /// Both entries in their fixed display order.
    pub fn entries(&self) -> [&DayEntry; 2] {
        [&self.today, &self.tomorrow]
    }
}

/// Fuse two day records into the display model. Synchronous and infallible:
/// every field was already defaulted at parse time.
pub fn present(coords: Coordinates, today: DayRecord, tomorrow: DayRecord) -> DisplayModel {
    DisplayModel {
        today: DayEntry {
            label: DayLabel::Today,
            record: today,
            coords,
        },
        tomorrow: DayEntry {
            label: DayLabel::Tomorrow,
            record: tomorrow,
            coords,
        },
    }
}
