//! Plain-text rendering of a resolved card.

use crate::forecast::DisplayForecast;

/// Render the card under a `place  clock` header line.
pub fn render_card(header: &str, card: &DisplayForecast) -> String {
    let unit = card.unit.symbol();
    let mut s = format!(
        "{header}\n\n{} {}{unit}  {}\n",
        card.icon, card.current_temp, card.description
    );

    if card.hourly.is_empty() {
        s.push_str("\n_(no hourly data)_\n");
    } else {
        s.push_str("\nNext hours\n");
        let times: Vec<String> = card.hourly.iter().map(|h| format!("{:>4}", h.display_time)).collect();
        let temps: Vec<String> = card.hourly.iter().map(|h| format!("{:>3}°", h.temp)).collect();
        s.push_str(&times.join(" "));
        s.push('\n');
        s.push_str(&temps.join(" "));
        s.push('\n');
    }

    if card.daily.is_empty() {
        s.push_str("\n_(no daily data)_\n");
    } else {
        s.push_str("\nComing days\n");
        for d in &card.daily {
            s.push_str(&format!(
                "{} {} {}°/{}°\n",
                d.weekday_label, d.icon, d.temp_max, d.temp_min
            ));
        }
    }
    s
}
