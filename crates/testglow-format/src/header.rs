// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Banner printed before any input is read

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::color::{Color, paint};

/// Width of the `=` separator rules
pub const RULE_WIDTH: usize = 70;

/// `strftime` layout of the header timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TITLE: &str = "🧪 PISCINE GO TEST RESULTS";

/// The separator rule, without terminator
#[must_use]
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render the header block for a run started at `now`
#[must_use]
pub fn render_header<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let rule = rule();
    let stamp = format!("📅 {}", now.format(TIMESTAMP_FORMAT));
    format!(
        "\n{rule}\n{}\n{}\n{rule}\n\n",
        paint(TITLE, Color::Bold),
        paint(&stamp, Color::Cyan)
    )
}
