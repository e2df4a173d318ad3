use log::trace;

use crate::model::WeekMenu;

use super::allergens::strip_allergens;
use super::day_header::is_day_header;

/// Lines starting with one of these end the menu body: the news box and
/// the copyright footer come after the last day on the page.
const TERMINAL_PREFIXES: [&str; 2] = ["Ajankohtaista", "©"];

/// Label rows that carry no dish content.
const LUNCH_LABELS: [&str; 2] = ["lounas", "lounas."];

/// Walk the scraped page text once and collect dishes under the day
/// header they appear after.
///
/// A day ends up in the result only if at least one dish survived
/// cleaning. Duplicate dishes are kept; deduplication is a display
/// decision and belongs to the renderer. Every input is valid: worst
/// case the result is empty.
pub fn parse_week(text: &str) -> WeekMenu {
    let mut menu = WeekMenu::default();
    let mut current_day: Option<String> = None;
    let mut dishes: Vec<String> = Vec::new();
    let mut collecting = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_day_header(line) {
            if let Some(day) = current_day.take() {
                if !dishes.is_empty() {
                    menu.insert(day, std::mem::take(&mut dishes));
                }
            }
            trace!("day header: {line}");
            current_day = Some(line.to_string());
            dishes.clear();
            collecting = true;
            continue;
        }
        if TERMINAL_PREFIXES.iter().any(|p| line.starts_with(p)) {
            collecting = false;
        }
        if !collecting || current_day.is_none() {
            continue;
        }
        if LUNCH_LABELS.iter().any(|l| line.eq_ignore_ascii_case(l)) {
            continue;
        }
        for fragment in line.split(',') {
            let dish = strip_allergens(fragment.trim());
            if dish.chars().count() > 2 {
                dishes.push(dish);
            }
        }
    }

    if let Some(day) = current_day {
        if !dishes.is_empty() {
            menu.insert(day, dishes);
        }
    }

    menu
}
