//! Static HTML rendering of a parsed week menu.

use std::collections::HashSet;

use chrono::{Datelike, Local};
use html_escape::encode_text;

use crate::config::MenuConfig;
use crate::menu::DayHeading;
use crate::model::{DayMenu, WeekMenu};

const PAGE_STYLE: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #1a1a2e;
    --surface: #16213e;
    --accent: #e94560;
    --text: #eaeaea;
    --muted: #8892a4;
    --radius: 16px;
}

body {
    background: var(--bg);
    color: var(--text);
    font-family: 'DM Sans', sans-serif;
    min-height: 100vh;
    padding: 2rem 1rem 4rem;
}

header {
    text-align: center;
    margin-bottom: 3rem;
}

header h1 {
    font-family: 'Fraunces', serif;
    font-size: clamp(1.8rem, 5vw, 3rem);
    font-weight: 700;
    line-height: 1.1;
    color: #fff;
}

header h1 span {
    color: var(--accent);
}

.subtitle {
    margin-top: 0.5rem;
    color: var(--muted);
    font-size: 0.95rem;
}

.week-badge {
    display: inline-block;
    margin-top: 1rem;
    border: 1px solid var(--accent);
    color: var(--accent);
    padding: 0.3rem 1rem;
    border-radius: 100px;
    font-size: 0.85rem;
    font-weight: 500;
    letter-spacing: 0.05em;
    text-transform: uppercase;
}

.menu-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.25rem;
    max-width: 1200px;
    margin: 0 auto;
}

.day-card {
    background: var(--surface);
    border: 1px solid rgba(255,255,255,0.07);
    border-radius: var(--radius);
    padding: 1.5rem;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.day-card:hover {
    transform: translateY(-3px);
    box-shadow: 0 12px 30px rgba(0,0,0,0.3);
}

.day-head {
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    margin-bottom: 1rem;
    padding-bottom: 0.75rem;
    border-bottom: 1px solid rgba(255,255,255,0.08);
}

.day-name {
    font-family: 'Fraunces', serif;
    font-size: 1.3rem;
    font-weight: 600;
}

.day-date {
    font-size: 0.8rem;
    color: var(--muted);
}

.dish-list {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.dish-list li {
    font-size: 0.9rem;
    padding-left: 1rem;
    position: relative;
    line-height: 1.4;
}

.dish-list li::before {
    content: '–';
    position: absolute;
    left: 0;
    color: var(--accent);
}

footer {
    text-align: center;
    margin-top: 3rem;
    color: var(--muted);
    font-size: 0.8rem;
}

footer a {
    color: var(--accent);
    text-decoration: none;
}

.no-data {
    color: var(--muted);
    text-align: center;
    grid-column: 1/-1;
    padding: 3rem;
}

@media (max-width: 600px) {
    .menu-grid { grid-template-columns: 1fr; }
}
"#;

/// Render the parsed week as a complete standalone HTML document.
///
/// Dishes are deduplicated per day here, first occurrence wins; the
/// parser keeps duplicates so this stays a display decision. Day names
/// and dates come from [`DayHeading::from_key`].
pub fn render_page(menu: &WeekMenu, config: &MenuConfig) -> String {
    let now = Local::now();
    let updated = format!(
        "{}.{}.{} klo {}",
        now.day(),
        now.month(),
        now.year(),
        now.format("%H:%M")
    );

    let cards = if menu.is_empty() {
        r#"<p class="no-data">Ruokalistaa ei saatavilla.</p>"#.to_string()
    } else {
        menu.days().iter().map(day_card).collect()
    };

    let menu_url = config.menu_url();

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"fi\">\n<head>\n");
    page.push_str("<meta charset=\"UTF-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    page.push_str(&format!(
        "<title>Ruokalista – {}</title>\n",
        encode_text(&config.restaurant_name)
    ));
    page.push_str("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n");
    page.push_str("<link href=\"https://fonts.googleapis.com/css2?family=Fraunces:wght@400;600;700&family=DM+Sans:wght@400;500&display=swap\" rel=\"stylesheet\">\n");
    page.push_str(&format!("<style>{PAGE_STYLE}</style>\n"));
    page.push_str("</head>\n<body>\n<header>\n");
    page.push_str(&format!("<h1>{}</h1>\n", heading_html(&config.restaurant_name)));
    page.push_str("<p class=\"subtitle\">Palvelukeskus Helsinki</p>\n");
    page.push_str(&format!(
        "<div class=\"week-badge\">Viikko {}</div>\n",
        now.iso_week().week()
    ));
    page.push_str("</header>\n<main class=\"menu-grid\">\n");
    page.push_str(&cards);
    page.push_str("</main>\n<footer>\n");
    page.push_str(&format!(
        "<p>Päivitetty {} &nbsp;·&nbsp; <a href=\"{}\" target=\"_blank\">Lähde: {}</a></p>\n",
        encode_text(&updated),
        encode_text(&menu_url),
        encode_text(host_of(&menu_url))
    ));
    page.push_str("</footer>\n</body>\n</html>\n");
    page
}

fn day_card(day: &DayMenu) -> String {
    let heading = DayHeading::from_key(&day.key);

    let mut seen = HashSet::new();
    let mut items = String::new();
    for dish in &day.dishes {
        if seen.insert(dish.as_str()) {
            items.push_str(&format!("        <li>{}</li>\n", encode_text(dish)));
        }
    }

    format!(
        r#"<div class="day-card">
    <div class="day-head">
        <span class="day-name">{}</span>
        <span class="day-date">{}</span>
    </div>
    <ul class="dish-list">
{}    </ul>
</div>
"#,
        encode_text(&heading.name),
        encode_text(&heading.date),
        items
    )
}

/// Two-line heading with the accent comma, e.g.
/// `Suutarilan peruskoulu<span>,</span><br>Nummi`.
fn heading_html(restaurant_name: &str) -> String {
    match restaurant_name.split_once(',') {
        Some((school, unit)) => format!(
            "{}<span>,</span><br>{}",
            encode_text(school.trim()),
            encode_text(unit.trim())
        ),
        None => encode_text(restaurant_name).into_owned(),
    }
}

/// Host part of a URL, for the footer source label.
fn host_of(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeekMenu;

    fn week_with(key: &str, dishes: &[&str]) -> WeekMenu {
        let mut menu = WeekMenu::default();
        menu.insert(key.to_string(), dishes.iter().map(|d| d.to_string()).collect());
        menu
    }

    #[test]
    fn renders_day_card_with_decomposed_heading() {
        let menu = week_with("ke 25.2.2026", &["Kanapasta", "Salaatti"]);
        let page = render_page(&menu, &MenuConfig::default());

        assert!(page.contains(r#"<span class="day-name">Keskiviikko</span>"#));
        assert!(page.contains(r#"<span class="day-date">25.2.2026</span>"#));
        assert!(page.contains("<li>Kanapasta</li>"));
        assert!(page.contains("<li>Salaatti</li>"));
    }

    #[test]
    fn deduplicates_dishes_keeping_first_occurrence() {
        let menu = week_with("ma 2.2.2026", &["Keitto", "Pasta", "Keitto"]);
        let page = render_page(&menu, &MenuConfig::default());

        assert_eq!(page.matches("<li>Keitto</li>").count(), 1);
        let keitto = page.find("<li>Keitto</li>").unwrap();
        let pasta = page.find("<li>Pasta</li>").unwrap();
        assert!(keitto < pasta);
    }

    #[test]
    fn escapes_html_in_dish_names() {
        let menu = week_with("ma 2.2.2026", &["Makkara & muusi <extra>"]);
        let page = render_page(&menu, &MenuConfig::default());

        assert!(page.contains("Makkara &amp; muusi &lt;extra&gt;"));
        assert!(!page.contains("<extra>"));
    }

    #[test]
    fn empty_menu_renders_placeholder() {
        let page = render_page(&WeekMenu::default(), &MenuConfig::default());
        assert!(page.contains("Ruokalistaa ei saatavilla."));
        assert!(!page.contains("day-card"));
    }

    #[test]
    fn footer_links_back_to_menu_page() {
        let menu = week_with("ma 2.2.2026", &["Keitto"]);
        let config = MenuConfig::default();
        let page = render_page(&menu, &config);

        assert!(page.contains(&config.menu_url()));
        assert!(page.contains("Lähde: aromi.hel.fi"));
    }
}
