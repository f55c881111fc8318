//! Text rendering of a session snapshot.

use std::fmt;

use crate::{
    kards::normalize::{PlayerStats, PRESENTED_STATS},
    session::SessionView,
};

pub const NO_DATA: &str = "No Data";
pub const QUEUED_MESSAGE: &str = "Stats have been queued for an update, please refresh in a minute";
pub const NOT_COMPUTED_MESSAGE: &str = "Stats haven't been updated for this player yet";
const MISSING_VALUE: &str = "-";

/// Stat sections in display order, as indices into [`PRESENTED_STATS`].
const SECTIONS: [&[usize]; 3] = [&[1, 2, 3], &[4, 5, 6], &[7, 8, 9, 10]];

/// Text form of a snapshot, as the interactive session shows it.
pub struct TextView<'a>(pub &'a SessionView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        if view.loading {
            return writeln!(f, "Loading...");
        }
        if !view.error.is_empty() {
            writeln!(f, "Error: {}", view.error)?;
        }
        match &view.data {
            Some(data) => write_data(f, data, view.queued),
            None => writeln!(f, "{}", NO_DATA),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<32}{}", label, value)
}

fn write_stat(f: &mut fmt::Formatter<'_>, data: &PlayerStats, key: &str, label: &str) -> fmt::Result {
    let label = format!("{}:", label);
    match data.value(key) {
        Some(value) => write_row(f, &label, value),
        None => write_row(f, &label, MISSING_VALUE),
    }
}

fn write_data(f: &mut fmt::Formatter<'_>, data: &PlayerStats, queued: bool) -> fmt::Result {
    if queued {
        writeln!(f, "{}", QUEUED_MESSAGE)?;
    } else if data.is_empty() {
        writeln!(f, "{}", NOT_COMPUTED_MESSAGE)?;
    }
    writeln!(f, "{}#{:04}", data.player.name, data.player.tag.as_u16())?;

    if data.is_empty() {
        return Ok(());
    }

    let (key, label) = PRESENTED_STATS[0];
    writeln!(f)?;
    write_stat(f, data, key, label)?;
    write_row(f, "Elo Bump Floor:", data.elo_bump_floor())?;

    let seasons = data.seasons();
    if !seasons.is_empty() {
        writeln!(f)?;
        for entry in seasons {
            write_row(f, &entry.label, &entry.value)?;
        }
    }

    for section in SECTIONS {
        writeln!(f)?;
        for &i in section {
            let (key, label) = PRESENTED_STATS[i];
            write_stat(f, data, key, label)?;
        }
    }
    Ok(())
}

/// Render a snapshot the way the interactive session shows it.
pub fn render_text(view: &SessionView) -> String {
    TextView(view).to_string()
}
