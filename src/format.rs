//! Display formatter for uptime and fermentation countdown.
//!
//! The 7-segment display driver takes a plain string; this module renders
//! one from a template. Recognized token letters and the field they select:
//!
//! | letter    | field               |
//! |-----------|---------------------|
//! | `d` / `D` | uptime days         |
//! | `h` / `H` | uptime hours        |
//! | `m` / `M` | uptime minutes      |
//! | `s` / `S` | uptime seconds      |
//! | `T`       | fermentation hours  |
//! | `t`       | fermentation minutes|
//!
//! Two adjacent letters selecting the same field form one group rendered as
//! two zero-padded digits (`"MM"` -> `"02"`); a single letter renders the
//! value at natural width, so zero still shows as `"0"`. Anything else
//! passes through as a literal. `"T.tt"` with 7:05 remaining renders
//! `"7.05"`.
//!
//! Rendering goes into a fixed-capacity buffer and truncates silently if the
//! template overflows it — no allocation on any path.

use core::fmt::Write;

use heapless::String;

use crate::clock::Uptime;
use crate::ferment::FermentationTimer;

/// Output buffer capacity, sized for the widest sensible template.
pub const DISPLAY_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Days,
    Hours,
    Minutes,
    Seconds,
    FermentHours,
    FermentMinutes,
}

fn field_of(c: char) -> Option<Field> {
    match c {
        'd' | 'D' => Some(Field::Days),
        'h' | 'H' => Some(Field::Hours),
        'm' | 'M' => Some(Field::Minutes),
        's' | 'S' => Some(Field::Seconds),
        'T' => Some(Field::FermentHours),
        't' => Some(Field::FermentMinutes),
        _ => None,
    }
}

fn value_of(field: Field, clock: &Uptime, timer: &FermentationTimer) -> u16 {
    match field {
        Field::Days => u16::from(clock.days()),
        Field::Hours => u16::from(clock.hours()),
        Field::Minutes => u16::from(clock.minutes()),
        Field::Seconds => u16::from(clock.seconds()),
        Field::FermentHours => timer.hours(),
        Field::FermentMinutes => timer.minutes(),
    }
}

/// Render `template` against the current clock and fermentation timer.
pub fn render(
    clock: &Uptime,
    timer: &FermentationTimer,
    template: &str,
) -> String<DISPLAY_CAPACITY> {
    let mut out = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let Some(field) = field_of(c) else {
            let _ = out.push(c);
            continue;
        };

        let paired = chars.peek().copied().and_then(field_of) == Some(field);
        if paired {
            chars.next();
        }

        let v = value_of(field, clock, timer);
        let _ = if paired {
            write!(out, "{:02}", v % 100)
        } else {
            write!(out, "{}", v)
        };
    }

    out
}
