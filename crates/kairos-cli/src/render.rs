//! Plain-text rendering of engine output for the terminal.

use kairos_core::{
    CalendarCoordinates, CalendarFrame, DAY_MICRO_PULSES, KairosMoment, MICRO_PER_PULSE,
    SunriseOffset,
};

fn frame_line(frame: &CalendarFrame) -> String {
    let d = &frame.coordinates.display;
    format!(
        "{}, day {} of {} (week {}), year {} [day index {}]",
        frame.day_name,
        d.day_in_month,
        frame.month_name,
        d.week_in_month,
        d.year,
        frame.coordinates.day_index,
    )
}

pub fn moment(m: &KairosMoment) -> String {
    let day_pulses = DAY_MICRO_PULSES as f64 / MICRO_PER_PULSE as f64;
    [
        format!("utc:        {}", m.utc),
        format!("pulse:      {} (micro {})", m.eternal_pulse, m.micro_pulses),
        format!(
            "day pulse:  {:.6} / {day_pulses:.6} ({:.3}%)",
            m.pulses_into_day_exact, m.percent_into_day
        ),
        format!(
            "beat:step:  {}:{:02} ({:.2}% into step)",
            m.grid.beat, m.grid.step, m.percent_into_step
        ),
        format!("arc:        {}", m.arc),
        format!("eternal:    {}", frame_line(&m.eternal)),
        format!("solar:      {}", frame_line(&m.solar)),
        format!(
            "window:     {}..{} ({}, sunrise {} s)",
            m.window.start, m.window.end, m.mode, m.sunrise_offset_seconds
        ),
    ]
    .join("\n")
}

/// Single line for the watch loop.
pub fn tick(m: &KairosMoment) -> String {
    format!(
        "{}  pulse {}  beat {}:{:02}  {}  {} {} {}",
        m.utc,
        m.eternal_pulse,
        m.grid.beat,
        m.grid.step,
        m.arc,
        m.solar.day_name,
        m.solar.coordinates.display.day_in_month,
        m.solar.month_name,
    )
}

pub fn calendar(c: &CalendarCoordinates) -> String {
    let l = &c.logic;
    let d = &c.display;
    [
        format!("day index:  {}", c.day_index),
        format!("day:        {} ({})", c.day_name(), d.day_of_week),
        format!("month:      {} ({})", c.month_name(), d.month),
        format!("date:       day {} of month, week {}", d.day_in_month, d.week_in_month),
        format!("year:       {} (day {} of year)", d.year, d.day_in_year),
        format!(
            "logic:      y={} m={} d={} w={} dow={}",
            l.year, l.month, l.day_in_month, l.week_in_month, l.day_of_week
        ),
    ]
    .join("\n")
}

pub fn sunrise(offset: SunriseOffset) -> String {
    format!(
        "sunrise:    {} s after UTC midnight ({} UTC)",
        offset,
        offset.utc_clock()
    )
}
